//! Optimizer configuration and conversion from raw form input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Inventory, OptimizerError, Part, TargetRange};

pub const DEFAULT_CHIP_BUDGET: u32 = 23;
pub const DEFAULT_TARGET: TargetRange = TargetRange {
    min: 3000,
    max: 6000,
};
pub const DEFAULT_TARGET_COUNT: usize = 3;

/// Everything one optimizer run needs. Immutable once built.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub chip_budget: u32,
    #[serde(default)]
    pub targets: Vec<TargetRange>,
    #[serde(default)]
    pub optimize_for_max: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            inventory: Inventory::new(),
            chip_budget: DEFAULT_CHIP_BUDGET,
            targets: vec![DEFAULT_TARGET; DEFAULT_TARGET_COUNT],
            optimize_for_max: false,
        }
    }
}

impl OptimizerConfig {
    pub fn new(
        inventory: Inventory,
        chip_budget: u32,
        targets: Vec<TargetRange>,
        optimize_for_max: bool,
    ) -> Result<Self, OptimizerError> {
        let config = Self {
            inventory,
            chip_budget,
            targets,
            optimize_for_max,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every target window is well formed.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        for (index, target) in self.targets.iter().enumerate() {
            if target.min > target.max {
                return Err(OptimizerError::InvertedRange {
                    index,
                    min: target.min,
                    max: target.max,
                });
            }
        }
        Ok(())
    }
}

/// Unvalidated form fields as typed by the user.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForm {
    #[serde(default)]
    pub part_counts: BTreeMap<String, String>,
    #[serde(default)]
    pub chip_budget: String,
    #[serde(default)]
    pub targets: Vec<(String, String)>,
    #[serde(default)]
    pub optimize_for_max: bool,
}

impl TryFrom<&RawForm> for OptimizerConfig {
    type Error = OptimizerError;

    fn try_from(form: &RawForm) -> Result<Self, Self::Error> {
        let mut inventory = Inventory::new();
        for (tag, text) in &form.part_counts {
            let part: Part = tag.parse()?;
            let count = parse_form_int(text);
            let count = u32::try_from(count)
                .map_err(|_| OptimizerError::NegativeCount { part, count })?;
            inventory.set(part, count);
        }

        let budget = parse_form_int(&form.chip_budget);
        let chip_budget =
            u32::try_from(budget).map_err(|_| OptimizerError::NegativeBudget(budget))?;

        let mut targets = Vec::with_capacity(form.targets.len());
        for (index, (min, max)) in form.targets.iter().enumerate() {
            let (min, max) = (parse_form_int(min), parse_form_int(max));
            let target = TargetRange::new(min, max)
                .ok_or(OptimizerError::InvertedRange { index, min, max })?;
            targets.push(target);
        }

        Ok(Self {
            inventory,
            chip_budget,
            targets,
            optimize_for_max: form.optimize_for_max,
        })
    }
}

impl From<&OptimizerConfig> for RawForm {
    fn from(config: &OptimizerConfig) -> Self {
        Self {
            part_counts: config
                .inventory
                .iter()
                .map(|(part, count)| (part.tag().to_string(), count.to_string()))
                .collect(),
            chip_budget: config.chip_budget.to_string(),
            targets: config
                .targets
                .iter()
                .map(|t| (t.min.to_string(), t.max.to_string()))
                .collect(),
            optimize_for_max: config.optimize_for_max,
        }
    }
}

/// Lenient integer parse for form text.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// decimal digits is read and anything after it ignored. Text with no leading
/// digits reads as 0. Out-of-range values saturate.
pub fn parse_form_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_form() {
        let config = OptimizerConfig::default();
        assert_eq!(config.chip_budget, 23);
        assert_eq!(config.targets, vec![TargetRange { min: 3000, max: 6000 }; 3]);
        assert!(config.inventory.is_empty());
        assert!(!config.optimize_for_max);
    }

    #[test]
    fn test_parse_form_int() {
        assert_eq!(parse_form_int("42"), 42);
        assert_eq!(parse_form_int("  7"), 7);
        assert_eq!(parse_form_int("12abc"), 12);
        assert_eq!(parse_form_int("-5"), -5);
        assert_eq!(parse_form_int("+8"), 8);
        assert_eq!(parse_form_int(""), 0);
        assert_eq!(parse_form_int("abc"), 0);
        assert_eq!(parse_form_int("-"), 0);
        assert_eq!(parse_form_int("3.9"), 3);
        assert_eq!(parse_form_int("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_raw_form_conversion() {
        let form = RawForm {
            part_counts: BTreeMap::from([
                ("E".to_string(), "3".to_string()),
                ("R4".to_string(), "oops".to_string()),
            ]),
            chip_budget: "10".to_string(),
            targets: vec![("2500".to_string(), "3500".to_string())],
            optimize_for_max: true,
        };

        let config = OptimizerConfig::try_from(&form).unwrap();
        assert_eq!(config.inventory.get(Part::E), 3);
        assert_eq!(config.inventory.get(Part::R4), 0);
        assert_eq!(config.chip_budget, 10);
        assert_eq!(config.targets, vec![TargetRange { min: 2500, max: 3500 }]);
        assert!(config.optimize_for_max);
    }

    #[test]
    fn test_raw_form_blank_budget_is_zero() {
        let config = OptimizerConfig::try_from(&RawForm::default()).unwrap();
        assert_eq!(config.chip_budget, 0);
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_raw_form_rejects_negative_count() {
        let form = RawForm {
            part_counts: BTreeMap::from([("Y2".to_string(), "-1".to_string())]),
            ..RawForm::default()
        };
        assert_eq!(
            OptimizerConfig::try_from(&form),
            Err(OptimizerError::NegativeCount {
                part: Part::Y2,
                count: -1
            })
        );
    }

    #[test]
    fn test_raw_form_rejects_negative_budget() {
        let form = RawForm {
            chip_budget: "-3".to_string(),
            ..RawForm::default()
        };
        assert_eq!(
            OptimizerConfig::try_from(&form),
            Err(OptimizerError::NegativeBudget(-3))
        );
    }

    #[test]
    fn test_raw_form_rejects_unknown_part() {
        let form = RawForm {
            part_counts: BTreeMap::from([("X".to_string(), "1".to_string())]),
            ..RawForm::default()
        };
        assert_eq!(
            OptimizerConfig::try_from(&form),
            Err(OptimizerError::UnknownPart("X".to_string()))
        );
    }

    #[test]
    fn test_config_to_form_and_back() {
        let config = OptimizerConfig {
            inventory: Inventory::new().with(Part::R1, 4),
            ..OptimizerConfig::default()
        };
        let form = RawForm::from(&config);
        assert_eq!(form.chip_budget, "23");
        assert_eq!(form.targets[0], ("3000".to_string(), "6000".to_string()));
        assert_eq!(OptimizerConfig::try_from(&form), Ok(config));
    }

    #[test]
    fn test_inverted_range_reports_index() {
        let result = OptimizerConfig::new(
            Inventory::new(),
            0,
            vec![TargetRange { min: 1, max: 2 }, TargetRange { min: 9, max: 3 }],
            false,
        );
        assert_eq!(
            result,
            Err(OptimizerError::InvertedRange {
                index: 1,
                min: 9,
                max: 3
            })
        );
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let config: OptimizerConfig = serde_json::from_str(
            r#"{"inventory": {"E": 3}, "chipBudget": 100, "targets": [{"min": 2500, "max": 3500}]}"#,
        )
        .unwrap();
        assert_eq!(config.inventory.get(Part::E), 3);
        assert_eq!(config.chip_budget, 100);
        assert!(!config.optimize_for_max);
        assert!(config.validate().is_ok());
    }
}
