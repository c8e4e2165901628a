use super::duty_status::DutyStatus;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Resolution of the grid in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// 24h × 4 quarter hours.
pub const SLOTS_PER_DAY: usize = (24 * 60 / SLOT_MINUTES) as usize;

/// Last slot of the day (23:45–24:00).
pub const LAST_SLOT: usize = SLOTS_PER_DAY - 1;

/// Occupancy of one status across one day, one flag per 15-minute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRow([bool; SLOTS_PER_DAY]);

impl Default for SlotRow {
    fn default() -> Self {
        Self([false; SLOTS_PER_DAY])
    }
}

impl SlotRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `[start, end]` inclusive. Bounds are clamped to the last slot.
    pub fn mark(&mut self, start: usize, end: usize) {
        let end = end.min(LAST_SLOT);
        if start > end {
            return;
        }
        for slot in &mut self.0[start..=end] {
            *slot = true;
        }
    }

    pub fn is_covered(&self, slot: usize) -> bool {
        self.0.get(slot).copied().unwrap_or(false)
    }

    pub fn covered_slots(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, covered)| covered.then_some(i))
            .collect()
    }

    pub fn covered_count(&self) -> usize {
        self.0.iter().filter(|c| **c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.covered_count() == 0
    }

    /// "0"/"1" string, one character per slot.
    pub fn to_bits(&self) -> String {
        self.0.iter().map(|c| if *c { '1' } else { '0' }).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl Serialize for SlotRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bits())
    }
}

/// One `SlotRow` per duty status. Every status is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCoverage(BTreeMap<DutyStatus, SlotRow>);

impl Default for SlotCoverage {
    fn default() -> Self {
        Self(
            DutyStatus::ALL
                .iter()
                .map(|s| (*s, SlotRow::new()))
                .collect(),
        )
    }
}

impl SlotCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, status: DutyStatus) -> &SlotRow {
        // populated for every status in Default
        &self.0[&status]
    }

    pub fn row_mut(&mut self, status: DutyStatus) -> &mut SlotRow {
        self.0.entry(status).or_default()
    }

    pub fn is_covered(&self, status: DutyStatus, slot: usize) -> bool {
        self.row(status).is_covered(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DutyStatus, &SlotRow)> {
        self.0.iter()
    }
}
