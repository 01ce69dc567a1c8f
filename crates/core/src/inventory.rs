//! Per-part counts: the player's stock and the usage accumulated while assigning builds.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Part;

/// Available count for every catalog part. Parts never set count as zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Inventory {
    counts: [u32; Part::COUNT],
}

/// Running per-part use tally for committed builds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct PartUsage {
    counts: [u32; Part::COUNT],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, part: Part, count: u32) -> Self {
        self.set(part, count);
        self
    }

    #[inline]
    pub fn get(&self, part: Part) -> u32 {
        self.counts[part.index()]
    }

    #[inline]
    pub fn set(&mut self, part: Part, count: u32) {
        self.counts[part.index()] = count;
    }

    /// Take one unit of `part`. Returns false (and changes nothing) when none are left.
    #[inline]
    pub fn take(&mut self, part: Part) -> bool {
        let slot = &mut self.counts[part.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    #[inline]
    pub fn put_back(&mut self, part: Part) {
        self.counts[part.index()] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Non-zero entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Part, u32)> + '_ {
        Part::ALL
            .into_iter()
            .map(|part| (part, self.get(part)))
            .filter(|&(_, count)| count > 0)
    }

    /// True when `usage` fits inside this stock for every part.
    pub fn covers(&self, usage: &PartUsage) -> bool {
        self.counts
            .iter()
            .zip(usage.counts.iter())
            .all(|(&have, &used)| used <= have)
    }

    /// Stock left once `usage` has been spent.
    pub fn remaining(&self, usage: &PartUsage) -> Inventory {
        let mut left = *self;
        for (slot, &used) in left.counts.iter_mut().zip(usage.counts.iter()) {
            *slot = slot.saturating_sub(used);
        }
        left
    }
}

impl FromIterator<(Part, u32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (Part, u32)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for (part, count) in iter {
            inventory.set(part, count);
        }
        inventory
    }
}

impl PartUsage {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, part: Part) -> u32 {
        self.counts[part.index()]
    }

    pub fn add(&mut self, parts: &[Part]) {
        for &part in parts {
            self.counts[part.index()] += 1;
        }
    }

    /// Copy of this tally with `parts` added.
    pub fn plus(&self, parts: &[Part]) -> PartUsage {
        let mut next = *self;
        next.add(parts);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (Part, u32)> + '_ {
        Part::ALL
            .into_iter()
            .map(|part| (part, self.get(part)))
            .filter(|&(_, count)| count > 0)
    }
}

impl Serialize for Inventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter().map(|(part, count)| (part.tag(), count)))
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, u32> = BTreeMap::deserialize(deserializer)?;
        let mut inventory = Inventory::new();
        for (tag, count) in raw {
            let part: Part = tag.parse().map_err(serde::de::Error::custom)?;
            inventory.set(part, count);
        }
        Ok(inventory)
    }
}

impl Serialize for PartUsage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter().map(|(part, count)| (part.tag(), count)))
    }
}
