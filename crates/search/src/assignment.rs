//! Result of one assignment pass.

use serde::Serialize;
use twinborn_core::{Candidate, Inventory, PartUsage};

/// A committed build and the target it fills.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub goal_index: usize,
    pub candidate: Candidate,
}

/// Chosen builds in target order. Unfilled targets have no slot.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    slots: Vec<Slot>,
    target_count: usize,
    chips_used: u32,
    part_usage: PartUsage,
}

impl Assignment {
    pub(crate) fn new(target_count: usize) -> Self {
        Self {
            slots: Vec::with_capacity(target_count),
            target_count,
            chips_used: 0,
            part_usage: PartUsage::new(),
        }
    }

    pub(crate) fn commit(&mut self, goal_index: usize, candidate: Candidate) {
        self.chips_used += candidate.chip_cost;
        self.part_usage.add(&candidate.parts);
        self.slots.push(Slot {
            goal_index,
            candidate,
        });
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.slots.iter().map(|slot| slot.candidate).collect()
    }

    /// Build chosen for target `goal_index`, if any.
    pub fn for_target(&self, goal_index: usize) -> Option<&Candidate> {
        self.slots
            .iter()
            .find(|slot| slot.goal_index == goal_index)
            .map(|slot| &slot.candidate)
    }

    /// Indices of targets that got no build.
    pub fn unfilled(&self) -> Vec<usize> {
        (0..self.target_count)
            .filter(|&idx| self.for_target(idx).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    pub fn chips_used(&self) -> u32 {
        self.chips_used
    }

    pub fn part_usage(&self) -> &PartUsage {
        &self.part_usage
    }

    pub fn remaining_inventory(&self, inventory: &Inventory) -> Inventory {
        inventory.remaining(&self.part_usage)
    }
}
