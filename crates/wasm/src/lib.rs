//! twinborn-wasm - WebAssembly entry points and bindings for the browser form.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use twinborn_core::{ChipTier, Inventory, OptimizerConfig, OptimizerError, Part, RawForm};
use twinborn_search::{optimize, Assignment};

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
}

/// Editable form state. Every field keeps the raw text the user typed; it is
/// validated only when a calculation is requested.
#[wasm_bindgen]
pub struct JsOptimizerForm {
    inner: RawForm,
}

#[wasm_bindgen]
impl JsOptimizerForm {
    /// Initial form: no parts, 23 chips, three targets of [3000, 6000].
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: RawForm::from(&OptimizerConfig::default()),
        }
    }

    #[wasm_bindgen(js_name = setPartCount)]
    pub fn set_part_count(&mut self, tag: &str, text: &str) -> Result<(), JsError> {
        let part: Part = tag.parse().map_err(to_js_error)?;
        self.inner
            .part_counts
            .insert(part.tag().to_string(), text.to_string());
        Ok(())
    }

    #[wasm_bindgen(js_name = setChipBudget)]
    pub fn set_chip_budget(&mut self, text: &str) {
        self.inner.chip_budget = text.to_string();
    }

    /// Edit one bound of target `index`; `bound` is `"min"` or anything else for max.
    #[wasm_bindgen(js_name = setGoal)]
    pub fn set_goal(&mut self, index: usize, bound: &str, text: &str) {
        if let Some(goal) = self.inner.targets.get_mut(index) {
            if bound == "min" {
                goal.0 = text.to_string();
            } else {
                goal.1 = text.to_string();
            }
        }
    }

    #[wasm_bindgen(js_name = addGoal)]
    pub fn add_goal(&mut self, min: &str, max: &str) -> usize {
        self.inner.targets.push((min.to_string(), max.to_string()));
        self.inner.targets.len()
    }

    #[wasm_bindgen(js_name = removeGoal)]
    pub fn remove_goal(&mut self, index: usize) {
        if index < self.inner.targets.len() {
            self.inner.targets.remove(index);
        }
    }

    #[wasm_bindgen(getter, js_name = goalCount)]
    pub fn goal_count(&self) -> usize {
        self.inner.targets.len()
    }

    #[wasm_bindgen(setter, js_name = optimizeForMax)]
    pub fn set_optimize_for_max(&mut self, enabled: bool) {
        self.inner.optimize_for_max = enabled;
    }

    #[wasm_bindgen(getter, js_name = optimizeForMax)]
    pub fn optimize_for_max(&self) -> bool {
        self.inner.optimize_for_max
    }

    /// Label shown next to the optimize toggle.
    #[wasm_bindgen(getter, js_name = modeLabel)]
    pub fn mode_label(&self) -> String {
        if self.inner.optimize_for_max {
            "Maximize Resonance".to_string()
        } else {
            "Optimize for Chip Efficiency".to_string()
        }
    }

    /// Validate the form and run the optimizer.
    pub fn calculate(&self) -> Result<JsValue, JsError> {
        let config = OptimizerConfig::try_from(&self.inner).map_err(to_js_error)?;
        run(&config)
    }
}

impl Default for JsOptimizerForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsBuild {
    /// One-based target number, as shown on the result card ("TB 1").
    pub slot: usize,
    pub parts: Vec<String>,
    pub base_resonance: u32,
    pub multiplier: f64,
    pub chip_cost: u32,
    pub total_resonance: f64,
    pub summary: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsAssignment {
    pub builds: Vec<JsBuild>,
    /// One-based numbers of targets that got no build.
    pub unfilled: Vec<usize>,
    pub chips_used: u32,
    pub remaining: Inventory,
}

impl JsAssignment {
    fn new(assignment: &Assignment, inventory: &Inventory) -> Self {
        Self {
            builds: assignment
                .slots()
                .iter()
                .map(|slot| JsBuild {
                    slot: slot.goal_index + 1,
                    parts: slot
                        .candidate
                        .parts
                        .iter()
                        .map(|p| p.tag().to_string())
                        .collect(),
                    base_resonance: slot.candidate.base_resonance(),
                    multiplier: slot.candidate.multiplier,
                    chip_cost: slot.candidate.chip_cost,
                    total_resonance: slot.candidate.total_resonance,
                    summary: slot.candidate.to_string(),
                })
                .collect(),
            unfilled: assignment.unfilled().into_iter().map(|i| i + 1).collect(),
            chips_used: assignment.chips_used(),
            remaining: assignment.remaining_inventory(inventory),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsPartInfo {
    pub tag: String,
    pub base_resonance: u32,
}

/// Run the optimizer on a plain JS object shaped like `OptimizerConfig`
/// (`{ inventory: { E: 3 }, chipBudget: 23, targets: [{ min, max }], optimizeForMax }`).
#[wasm_bindgen(js_name = calculateBuilds)]
pub fn calculate_builds(config: JsValue) -> Result<JsValue, JsError> {
    let config: OptimizerConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|err| JsError::new(&err.to_string()))?;
    config.validate().map_err(to_js_error)?;
    run(&config)
}

/// Part tags in catalog order with their base resonance.
#[wasm_bindgen(js_name = partCatalog)]
pub fn part_catalog() -> JsValue {
    let parts: Vec<JsPartInfo> = Part::ALL
        .iter()
        .map(|part| JsPartInfo {
            tag: part.tag().to_string(),
            base_resonance: part.base_resonance(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&parts).unwrap_or_else(|_| JsValue::NULL)
}

#[wasm_bindgen(js_name = chipTiers)]
pub fn chip_tiers() -> JsValue {
    serde_wasm_bindgen::to_value(&ChipTier::ALL[..]).unwrap_or_else(|_| JsValue::NULL)
}

fn run(config: &OptimizerConfig) -> Result<JsValue, JsError> {
    let assignment = optimize(config);
    let result = JsAssignment::new(&assignment, &config.inventory);
    log::info!(
        "filled {} of {} targets, {} parts left",
        assignment.len(),
        assignment.target_count(),
        result.remaining.total()
    );
    // Plain objects rather than ES Maps for the inventory.
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsError::new(&err.to_string()))
}

fn to_js_error(err: OptimizerError) -> JsError {
    JsError::new(&err.to_string())
}
