use crate::utils::validation::{clamp_leg_count, lose_one_leg};
use serde::{Deserialize, Serialize};

/// The planet every animal reports. Fixed value, asserted by tests.
pub const PLANET: &str = "Erde";

/// Non-negative leg counter.
///
/// Raw inputs are signed and clamped on the way in: negative values become
/// zero, values beyond `u32::MAX` saturate. Deserialization runs through the
/// same clamp, so a stored leg count can never be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct LegCount(u32);

impl LegCount {
    pub fn new(raw: i64) -> Self {
        Self(clamp_leg_count(raw))
    }

    pub fn count(self) -> u32 {
        self.0
    }

    /// One leg fewer, never below zero.
    pub fn lose_one(self) -> Self {
        Self(lose_one_leg(self.0))
    }
}

impl From<i64> for LegCount {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl From<LegCount> for i64 {
    fn from(legs: LegCount) -> Self {
        Self::from(legs.0)
    }
}

/// Shared state every animal carries: the leg counter, an optional name and
/// an eye count. Species embed a profile instead of inheriting one.
///
/// The leg count is the only guarded attribute; name and eye count are
/// stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalProfile {
    legs: LegCount,
    name: Option<String>,
    eyes: u32,
}

impl AnimalProfile {
    /// New unnamed profile. Negative leg input is clamped to zero.
    pub fn new(legs: i64, eyes: u32) -> Self {
        Self {
            legs: LegCount::new(legs),
            name: None,
            eyes,
        }
    }

    /// Attach a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn legs(&self) -> u32 {
        self.legs.count()
    }

    /// Store a new leg count. Negative input is clamped to zero, everything
    /// else is stored exactly.
    pub fn set_legs(&mut self, raw: i64) {
        self.legs = LegCount::new(raw);
    }

    /// Drop one leg, never below zero.
    pub fn lose_leg(&mut self) {
        self.legs = self.legs.lose_one();
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn eyes(&self) -> u32 {
        self.eyes
    }
}
