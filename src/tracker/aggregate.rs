use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BodyTuneError;

/// Default daily calorie target when no profile overrides it.
pub const DEFAULT_DAILY_TARGET: u32 = 2200;

/// One of the four meal categories a portion can be logged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl SlotKind {
    pub const ALL: [SlotKind; 4] = [
        SlotKind::Breakfast,
        SlotKind::Lunch,
        SlotKind::Dinner,
        SlotKind::Snacks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Breakfast => "Breakfast",
            SlotKind::Lunch => "Lunch",
            SlotKind::Dinner => "Dinner",
            SlotKind::Snacks => "Snacks",
        }
    }

    /// Per-slot calorie target used for the day summary bars.
    pub fn default_target(&self) -> u32 {
        match self {
            SlotKind::Breakfast => 500,
            SlotKind::Lunch => 600,
            SlotKind::Dinner => 700,
            SlotKind::Snacks => 300,
        }
    }

    fn index(&self) -> usize {
        match self {
            SlotKind::Breakfast => 0,
            SlotKind::Lunch => 1,
            SlotKind::Dinner => 2,
            SlotKind::Snacks => 3,
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SlotKind {
    type Err = BodyTuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SlotKind::ALL
            .into_iter()
            .find(|k| needle == k.label().to_lowercase())
            .ok_or_else(|| BodyTuneError::InvalidInput(format!("unknown meal slot: {}", s)))
    }
}

/// Running calorie count for one meal slot.
#[derive(Debug, Clone, Serialize)]
pub struct MealSlot {
    pub kind: SlotKind,
    pub consumed_calories: u32,
    pub target_calories: u32,
}

/// Running calorie totals for one day, split across the four meal slots.
///
/// Portions can only be added, never edited or removed; that mirrors the
/// product's behavior and keeps the slot/total invariant trivial to hold.
/// State lives for the life of the session only.
#[derive(Debug, Clone, Serialize)]
pub struct DailyAggregate {
    daily_target: u32,
    total_consumed: u32,
    slots: [MealSlot; 4],
}

impl DailyAggregate {
    pub fn new(daily_target: u32) -> Self {
        let slots = SlotKind::ALL.map(|kind| MealSlot {
            kind,
            consumed_calories: 0,
            target_calories: kind.default_target(),
        });
        Self {
            daily_target,
            total_consumed: 0,
            slots,
        }
    }

    /// Add a committed portion's calories to a slot and the day total.
    pub fn add_portion(&mut self, kind: SlotKind, calories: u32) {
        self.slots[kind.index()].consumed_calories += calories;
        self.total_consumed += calories;
    }

    pub fn slot(&self, kind: SlotKind) -> &MealSlot {
        &self.slots[kind.index()]
    }

    /// All slots in fixed Breakfast..Snacks order.
    pub fn slots(&self) -> &[MealSlot] {
        &self.slots
    }

    pub fn total_consumed(&self) -> u32 {
        self.total_consumed
    }

    pub fn daily_target(&self) -> u32 {
        self.daily_target
    }

    /// Calories left against the daily target. Negative when over target.
    pub fn remaining(&self) -> i64 {
        self.daily_target as i64 - self.total_consumed as i64
    }
}

impl Default for DailyAggregate {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_TARGET)
    }
}
