use crate::event::EventCategory;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Percent chance (1-100) that each random category fires on a given day.
    pub event_chance_percent: u32,
    /// Categories rolled for a random event every day, in roll order.
    pub random_categories: Vec<EventCategory>,
    /// Pounds of food each living traveller eats per day.
    pub daily_food_per_person: u32,
    /// Miles covered on a day the wagon can travel.
    pub miles_per_day: u32,
    /// Health lost per day by each sick or injured traveller.
    pub illness_damage: u32,
    /// Health lost per day by every traveller once food runs out.
    pub starvation_damage: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EVENT_CHANCE_PERCENT: u32 = 10;
    pub const DEFAULT_DAILY_FOOD_PER_PERSON: u32 = 2;
    pub const DEFAULT_MILES_PER_DAY: u32 = 15;
    pub const DEFAULT_ILLNESS_DAMAGE: u32 = 10;
    pub const DEFAULT_STARVATION_DAMAGE: u32 = 25;

    pub fn new() -> Self {
        Self {
            event_chance_percent: Self::DEFAULT_EVENT_CHANCE_PERCENT,
            random_categories: vec![
                EventCategory::Animal,
                EventCategory::Person,
                EventCategory::Vehicle,
                EventCategory::Weather,
                EventCategory::Wild,
            ],
            daily_food_per_person: Self::DEFAULT_DAILY_FOOD_PER_PERSON,
            miles_per_day: Self::DEFAULT_MILES_PER_DAY,
            illness_damage: Self::DEFAULT_ILLNESS_DAMAGE,
            starvation_damage: Self::DEFAULT_STARVATION_DAMAGE,
        }
    }

    pub fn with_event_chance(event_chance_percent: u32) -> Self {
        Self {
            event_chance_percent,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
