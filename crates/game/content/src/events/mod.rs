//! Director events of the trail.
//!
//! Every event lives in the module of its category. Shared behaviour (losing
//! cargo, finding cargo, falling ill, getting hurt, losing days) sits in
//! [`bases`]; those bases are listed in the catalog too, and discovery skips
//! them.

/// Implements `DirectorEvent` for a content type.
macro_rules! director_event {
    ($ty:ty, $name:literal, $category:ident) => {
        director_event!($ty, $name, $category, RandomOrManual);
    };
    ($ty:ty, $name:literal, $category:ident, $mode:ident) => {
        impl game_core::DirectorEvent for $ty {
            const NAME: &'static str = $name;
            const CATEGORY: game_core::EventCategory = game_core::EventCategory::$category;
            const MODE: game_core::ExecutionMode = game_core::ExecutionMode::$mode;
        }
    };
}

pub mod animal;
pub mod bases;
pub mod person;
pub mod river;
pub mod special;
pub mod vehicle;
pub mod weather;
pub mod wild;

use game_core::{EventDescriptor, ItemKind};

/// The registration table handed to `EventFactory::new`.
///
/// Order matters only for duplicate keys: the first entry wins.
pub fn catalog() -> Vec<EventDescriptor> {
    vec![
        // Shared bases (skipped by discovery)
        EventDescriptor::base::<bases::ItemDestroyer>(),
        EventDescriptor::base::<bases::ItemCreator>(),
        EventDescriptor::base::<bases::PersonInfect>(),
        EventDescriptor::base::<bases::PersonInjure>(),
        EventDescriptor::base::<bases::LoseTime>(),
        // Animal
        EventDescriptor::of::<animal::OxWandersOff>(),
        EventDescriptor::of::<animal::BuffaloStampede>(),
        // Person
        EventDescriptor::of::<person::Cholera>(),
        EventDescriptor::of::<person::Dysentery>(),
        EventDescriptor::of::<person::Measles>(),
        EventDescriptor::of::<person::Typhoid>(),
        EventDescriptor::of::<person::BrokenArm>(),
        EventDescriptor::of::<person::BrokenLeg>(),
        EventDescriptor::of::<person::SnakeBite>(),
        // Vehicle
        EventDescriptor::of::<vehicle::BrokenAxle>(),
        EventDescriptor::of::<vehicle::BrokenWheel>(),
        EventDescriptor::of::<vehicle::BrokenTongue>(),
        EventDescriptor::of::<vehicle::WagonFire>(),
        EventDescriptor::of::<vehicle::Thief>(),
        EventDescriptor::of::<vehicle::AbandonedWagon>(),
        // Weather
        EventDescriptor::of::<weather::HeavyFog>(),
        EventDescriptor::of::<weather::Hail>(),
        EventDescriptor::of::<weather::Blizzard>(),
        // Wild
        EventDescriptor::of::<wild::LostTrail>(),
        EventDescriptor::of::<wild::WrongTrail>(),
        EventDescriptor::of::<wild::WildFruit>(),
        EventDescriptor::of::<wild::BadWater>(),
        // River crossing
        EventDescriptor::of::<river::SwampedWagon>(),
        EventDescriptor::of::<river::StuckInMud>(),
        // Special
        EventDescriptor::of::<special::CompanionDied>(),
    ]
}

/// Human-readable quantity of a cargo kind, e.g. "40 pounds of food".
pub fn describe(kind: ItemKind, amount: u32) -> String {
    match kind {
        ItemKind::Food => format!("{amount} pounds of food"),
        ItemKind::Clothing => format!("{amount} sets of clothing"),
        ItemKind::Ammunition => format!("{amount} boxes of ammunition"),
        ItemKind::Oxen if amount == 1 => "1 ox".to_string(),
        ItemKind::Oxen => format!("{amount} oxen"),
        ItemKind::SpareWheel => format!("{amount} spare wheel(s)"),
        ItemKind::SpareAxle => format!("{amount} spare axle(s)"),
        ItemKind::SpareTongue => format!("{amount} spare tongue(s)"),
        ItemKind::Money => format!("${}.{:02}", amount / 100, amount % 100),
    }
}

/// Joins cargo changes into a sentence fragment.
pub(crate) fn list_items(items: &[(ItemKind, u32)]) -> String {
    items
        .iter()
        .map(|&(kind, amount)| describe(kind, amount))
        .collect::<Vec<_>>()
        .join(", ")
}

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}
