//! Travelling party and per-person health.

use std::fmt;

/// Unique identifier for a party member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse health bucket derived from the numeric health meter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HealthStatus {
    Dead,
    VeryPoor,
    Poor,
    Fair,
    Good,
}

impl HealthStatus {
    pub const fn from_value(health: u32) -> Self {
        match health {
            0 => Self::Dead,
            1..=199 => Self::VeryPoor,
            200..=299 => Self::Poor,
            300..=399 => Self::Fair,
            _ => Self::Good,
        }
    }
}

/// A single traveller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Health meter in `0..=MAX_HEALTH`. Zero means dead.
    pub health: u32,
    pub infected: bool,
    pub injured: bool,
    pub leader: bool,
}

impl Person {
    pub const MAX_HEALTH: u32 = 500;

    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            health: Self::MAX_HEALTH,
            infected: false,
            injured: false,
            leader: false,
        }
    }

    pub fn status(&self) -> HealthStatus {
        HealthStatus::from_value(self.health)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Removes up to `amount` health. Returns true if this blow was fatal.
    pub fn damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(amount);
        was_alive && !self.is_alive()
    }

    pub fn heal(&mut self, amount: u32) {
        if self.is_alive() {
            self.health = self.health.saturating_add(amount).min(Self::MAX_HEALTH);
        }
    }

    /// Marks the person sick. A second infection while already sick hurts instead.
    pub fn infect(&mut self, damage_if_sick: u32) {
        if self.infected {
            self.damage(damage_if_sick);
        } else {
            self.infected = true;
        }
    }

    /// Marks the person hurt. A second injury while already hurt hurts instead.
    pub fn injure(&mut self, damage_if_hurt: u32) {
        if self.injured {
            self.damage(damage_if_hurt);
        } else {
            self.injured = true;
        }
    }

    pub fn kill(&mut self) {
        self.health = 0;
    }
}

/// Ordered list of travellers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    members: Vec<Person>,
}

impl Party {
    pub const MAX_SIZE: usize = 5;

    /// Builds a party from names; the first becomes leader. Extra names past
    /// [`Party::MAX_SIZE`] are ignored.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let members = names
            .iter()
            .take(Self::MAX_SIZE)
            .enumerate()
            .map(|(index, name)| {
                let mut person = Person::new(PersonId(index as u32), name.as_ref());
                person.leader = index == 0;
                person
            })
            .collect();
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.members.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.members.iter_mut().find(|p| p.id == id)
    }

    pub fn leader(&self) -> Option<&Person> {
        self.members.iter().find(|p| p.leader)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.members.iter_mut()
    }

    pub fn living(&self) -> impl Iterator<Item = &Person> {
        self.members.iter().filter(|p| p.is_alive())
    }

    pub fn living_ids(&self) -> Vec<PersonId> {
        self.living().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_buckets() {
        assert_eq!(HealthStatus::from_value(500), HealthStatus::Good);
        assert_eq!(HealthStatus::from_value(350), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_value(250), HealthStatus::Poor);
        assert_eq!(HealthStatus::from_value(10), HealthStatus::VeryPoor);
        assert_eq!(HealthStatus::from_value(0), HealthStatus::Dead);
    }

    #[test]
    fn damage_reports_fatal_blow_once() {
        let mut person = Person::new(PersonId(0), "Ezra");
        assert!(!person.damage(100));
        assert!(person.damage(1000));
        assert!(!person.damage(10));
        assert_eq!(person.status(), HealthStatus::Dead);
    }

    #[test]
    fn repeated_infection_damages() {
        let mut person = Person::new(PersonId(0), "Ezra");
        person.infect(50);
        assert!(person.infected);
        assert_eq!(person.health, Person::MAX_HEALTH);
        person.infect(50);
        assert_eq!(person.health, Person::MAX_HEALTH - 50);
    }

    #[test]
    fn dead_cannot_heal() {
        let mut person = Person::new(PersonId(0), "Ezra");
        person.kill();
        person.heal(100);
        assert!(!person.is_alive());
    }

    #[test]
    fn party_caps_size_and_marks_leader() {
        let party = Party::from_names(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(party.len(), Party::MAX_SIZE);
        assert_eq!(party.iter().filter(|p| p.leader).count(), 1);
        assert_eq!(party.leader().map(|p| p.id), Some(PersonId(0)));
    }
}
