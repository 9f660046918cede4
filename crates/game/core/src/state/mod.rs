//! Authoritative trail state.
//!
//! The state describes the wagon, its cargo, and the travelling party. Director
//! events mutate it through [`crate::event::EventContext`]; the turn driver
//! advances the clock and mileage.
pub mod party;
pub mod vehicle;

use std::fmt;

pub use party::{HealthStatus, Party, Person, PersonId};
pub use vehicle::{Inventory, ItemKind, PartCondition, Vehicle, VehiclePart, VehicleStatus};

/// Entity an event is fired against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceEntity {
    /// The wagon and its cargo.
    Vehicle,
    /// A specific party member.
    Person(PersonId),
    /// The party as a whole; events pick a living member themselves.
    Party,
}

impl fmt::Display for SourceEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEntity::Vehicle => write!(f, "vehicle"),
            SourceEntity::Person(id) => write!(f, "person {}", id),
            SourceEntity::Party => write!(f, "party"),
        }
    }
}

/// Canonical snapshot of a journey.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailState {
    /// Days elapsed since leaving Independence.
    pub day: u32,
    /// Total miles travelled.
    pub mileage: u32,
    pub vehicle: Vehicle,
    pub party: Party,
}

impl TrailState {
    /// Creates a freshly outfitted wagon carrying the named travellers.
    ///
    /// The first name becomes the party leader.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            day: 0,
            mileage: 0,
            vehicle: Vehicle::outfitted(),
            party: Party::from_names(names),
        }
    }

    /// Advances the trail clock by `days`.
    pub fn skip_days(&mut self, days: u32) {
        self.day = self.day.saturating_add(days);
    }

    /// Returns true once every traveller has died.
    pub fn is_party_dead(&self) -> bool {
        self.party.living().next().is_none()
    }
}
