/// Category a director event belongs to.
///
/// The turn driver asks for one random event per category; categories with no
/// eligible events simply produce nothing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EventCategory {
    /// Oxen and wildlife.
    Animal,
    /// Illness and injury of a traveller.
    Person,
    /// Wagon breakdowns, theft, and salvage.
    Vehicle,
    Weather,
    /// Hazards of the trail itself.
    Wild,
    /// Mishaps while fording a river.
    RiverCross,
    /// Story beats such as deaths; fired by explicit reference.
    Special,
}

/// Whether an event may be picked by random selection.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ExecutionMode {
    /// Eligible for random selection and for explicit triggering.
    #[default]
    RandomOrManual,
    /// Only fired by explicit type reference.
    ManualOnly,
}

impl ExecutionMode {
    #[inline]
    pub fn is_random_eligible(self) -> bool {
        matches!(self, ExecutionMode::RandomOrManual)
    }
}
