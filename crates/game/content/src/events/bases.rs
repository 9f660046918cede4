//! Shared behaviour embedded by concrete events.
//!
//! Each base is configured in the owning event's `on_create` hook; a base
//! that was never configured does nothing.

use game_core::{EventBase, EventCategory, EventContext, ItemKind, PersonId};

/// Removes a random share of each target cargo kind.
#[derive(Debug, Default)]
pub struct ItemDestroyer {
    targets: Vec<ItemKind>,
    max_percent: u32,
}

impl EventBase for ItemDestroyer {
    const NAME: &'static str = "item_destroyer";
    const CATEGORY: EventCategory = EventCategory::Vehicle;
}

impl ItemDestroyer {
    pub fn configure(&mut self, targets: &[ItemKind], max_percent: u32) {
        self.targets = targets.to_vec();
        self.max_percent = max_percent.min(100);
    }

    /// Destroys cargo and returns what was lost. Any non-empty slot loses at
    /// least one unit.
    pub fn destroy(&self, ctx: &mut EventContext<'_>) -> Vec<(ItemKind, u32)> {
        if self.max_percent == 0 {
            return Vec::new();
        }
        let mut lost = Vec::new();
        for &kind in &self.targets {
            let held = ctx.state.vehicle.inventory.quantity(kind);
            if held == 0 {
                continue;
            }
            let percent = ctx.rng.range(1, self.max_percent);
            let share = (u64::from(held) * u64::from(percent) / 100) as u32;
            let removed = ctx.state.vehicle.inventory.remove(kind, share.max(1));
            lost.push((kind, removed));
        }
        lost
    }
}

/// Adds a random amount of each target cargo kind.
#[derive(Debug, Default)]
pub struct ItemCreator {
    /// `(kind, maximum amount)` pairs.
    targets: Vec<(ItemKind, u32)>,
}

impl EventBase for ItemCreator {
    const NAME: &'static str = "item_creator";
    const CATEGORY: EventCategory = EventCategory::Vehicle;
}

impl ItemCreator {
    pub fn configure(&mut self, targets: &[(ItemKind, u32)]) {
        self.targets = targets.to_vec();
    }

    /// Each target has an even chance of turning up; returns what was found.
    pub fn create(&self, ctx: &mut EventContext<'_>) -> Vec<(ItemKind, u32)> {
        let mut found = Vec::new();
        for &(kind, max) in &self.targets {
            if max == 0 || !ctx.rng.chance(50) {
                continue;
            }
            let amount = ctx.rng.range(1, max);
            ctx.state.vehicle.inventory.add(kind, amount);
            found.push((kind, amount));
        }
        found
    }
}

/// Makes the targeted traveller sick.
#[derive(Debug, Default)]
pub struct PersonInfect {
    /// Extra damage when the target is already sick.
    relapse_damage: u32,
}

impl EventBase for PersonInfect {
    const NAME: &'static str = "person_infect";
    const CATEGORY: EventCategory = EventCategory::Person;
}

impl PersonInfect {
    pub fn configure(&mut self, relapse_damage: u32) {
        self.relapse_damage = relapse_damage;
    }

    /// Returns the name of the infected traveller, if anyone could be.
    pub fn infect(&self, ctx: &mut EventContext<'_>) -> Option<String> {
        let id = ctx.target_person()?;
        let person = ctx.person_mut(id)?;
        person.infect(self.relapse_damage);
        Some(person.name.clone())
    }
}

/// Hurts the targeted traveller.
#[derive(Debug, Default)]
pub struct PersonInjure {
    /// Damage dealt on top of the injury flag, once per injury.
    damage: u32,
}

impl EventBase for PersonInjure {
    const NAME: &'static str = "person_injure";
    const CATEGORY: EventCategory = EventCategory::Person;
}

impl PersonInjure {
    pub fn configure(&mut self, damage: u32) {
        self.damage = damage;
    }

    /// Returns the id and name of the injured traveller.
    pub fn injure(&self, ctx: &mut EventContext<'_>) -> Option<(PersonId, String)> {
        let id = ctx.target_person()?;
        let person = ctx.person_mut(id)?;
        person.injured = true;
        person.damage(self.damage);
        Some((id, person.name.clone()))
    }
}

/// Costs the party a random number of days.
#[derive(Debug, Default)]
pub struct LoseTime {
    min_days: u32,
    max_days: u32,
    rolled: u32,
}

impl EventBase for LoseTime {
    const NAME: &'static str = "lose_time";
    const CATEGORY: EventCategory = EventCategory::Weather;
}

impl LoseTime {
    pub fn configure(&mut self, min_days: u32, max_days: u32) {
        self.min_days = min_days;
        self.max_days = max_days.max(min_days);
    }

    /// Rolls the delay and remembers it for [`LoseTime::days`].
    pub fn roll(&mut self, ctx: &mut EventContext<'_>) -> u32 {
        self.rolled = ctx.rng.range(self.min_days, self.max_days);
        self.rolled
    }

    pub fn days(&self) -> u32 {
        self.rolled
    }
}
