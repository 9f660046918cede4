//! Turn driver.
//!
//! One call to [`Simulation::step`] is one day on the trail:
//!
//! 1. the wagon travels (if it can) and the party eats
//! 2. the guarded request is ticked once
//! 3. every configured category rolls for a random event
//! 4. sickness and hunger take their toll, and each new death fires
//!    `CompanionDied`
use circuit_breaker::{BreakerConfig, CircuitBreaker, RequestAction, TickOutcome};
use game_content::events::special::CompanionDied;
use game_core::{
    EventCategory, EventType, GameConfig, ItemKind, PcgRng, PersonId, RngSource, SourceEntity,
    TrailState, VehicleStatus,
};
use tracing::{debug, info};

use crate::director::{EventDirector, EventReport};
use crate::error::Result;

/// Tuning for a [`Simulation`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub breaker: BreakerConfig,
    /// Seed of the simulation's random source.
    pub seed: u64,
}

/// Everything that happened during one day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub day: u32,
    pub mileage: u32,
    pub request: TickOutcome,
    pub events: Vec<EventReport>,
    pub deaths: Vec<PersonId>,
}

pub struct Simulation<A> {
    config: GameConfig,
    state: TrailState,
    director: EventDirector,
    rng: PcgRng,
    breaker: CircuitBreaker<A>,
}

impl<A: RequestAction> Simulation<A> {
    /// Creates a driver around `state`, guarding `action` with a breaker.
    ///
    /// Fails if the breaker configuration is invalid.
    pub fn new(
        config: RuntimeConfig,
        state: TrailState,
        director: EventDirector,
        action: A,
    ) -> Result<Self> {
        let breaker = CircuitBreaker::new(config.breaker, action)?;
        Ok(Self {
            config: config.game,
            state,
            director,
            rng: PcgRng::seed_from(config.seed),
            breaker,
        })
    }

    pub fn state(&self) -> &TrailState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut TrailState {
        &mut self.state
    }

    pub fn director(&self) -> &EventDirector {
        &self.director
    }

    pub fn breaker(&self) -> &CircuitBreaker<A> {
        &self.breaker
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Plays one day.
    pub fn step(&mut self) -> Result<TurnReport> {
        let starving = self.travel_and_eat();

        let request = self.breaker.circuit_tick();
        debug!(
            target: "runtime::simulation",
            day = self.state.day,
            state = %self.breaker.state(),
            ?request,
            "Breaker ticked"
        );

        let travellers = self.state.party.living_ids();
        let mut events = Vec::new();
        for category in self.config.random_categories.clone() {
            if self.rng.roll_d100() > self.config.event_chance_percent {
                continue;
            }
            let source = self.source_for(category);
            if let Some(report) =
                self.director
                    .trigger_random(&mut self.state, source, category, &mut self.rng)?
            {
                events.push(report);
            }
        }

        self.apply_daily_damage(starving);
        let deaths: Vec<PersonId> = travellers
            .into_iter()
            .filter(|&id| self.state.party.get(id).is_some_and(|p| !p.is_alive()))
            .collect();
        for &id in &deaths {
            let report = self.director.trigger(
                &mut self.state,
                SourceEntity::Person(id),
                EventType::of::<CompanionDied>(),
                &mut self.rng,
            )?;
            events.push(report);
        }

        info!(
            target: "runtime::simulation",
            day = self.state.day,
            mileage = self.state.mileage,
            events = events.len(),
            deaths = deaths.len(),
            "Day complete"
        );

        Ok(TurnReport {
            day: self.state.day,
            mileage: self.state.mileage,
            request,
            events,
            deaths,
        })
    }

    /// Plays up to `days` days, stopping early once the whole party is dead.
    pub fn run(&mut self, days: u32) -> Result<Vec<TurnReport>> {
        let mut reports = Vec::with_capacity(days as usize);
        for _ in 0..days {
            if self.state.is_party_dead() {
                info!(
                    target: "runtime::simulation",
                    day = self.state.day,
                    "Party has perished"
                );
                break;
            }
            reports.push(self.step()?);
        }
        Ok(reports)
    }

    /// Advances the clock, moves the wagon, and feeds the party. Returns
    /// true when there was not enough food for everyone.
    fn travel_and_eat(&mut self) -> bool {
        self.state.skip_days(1);

        let vehicle = &mut self.state.vehicle;
        for part in vehicle.try_repair() {
            debug!(target: "runtime::simulation", %part, "Fitted a spare");
        }
        if vehicle.can_travel() {
            vehicle.status = VehicleStatus::Moving;
            self.state.mileage = self.state.mileage.saturating_add(self.config.miles_per_day);
        } else if vehicle.status == VehicleStatus::Moving {
            vehicle.status = VehicleStatus::Stopped;
        }

        let eaters = self.state.party.living().count() as u32;
        let needed = eaters.saturating_mul(self.config.daily_food_per_person);
        let eaten = self.state.vehicle.inventory.remove(ItemKind::Food, needed);
        eaten < needed
    }

    /// Picks who a random event of `category` is fired against.
    fn source_for(&mut self, category: EventCategory) -> SourceEntity {
        match category {
            EventCategory::Person => {
                let living = self.state.party.living_ids();
                if living.is_empty() {
                    SourceEntity::Party
                } else {
                    SourceEntity::Person(living[self.rng.below(living.len() as u32) as usize])
                }
            }
            EventCategory::Animal | EventCategory::Vehicle => SourceEntity::Vehicle,
            _ => SourceEntity::Party,
        }
    }

    /// Applies illness and starvation damage to the living.
    fn apply_daily_damage(&mut self, starving: bool) {
        for person in self.state.party.iter_mut() {
            if !person.is_alive() {
                continue;
            }
            let mut damage = 0;
            if person.infected || person.injured {
                damage += self.config.illness_damage;
            }
            if starving {
                damage += self.config.starvation_damage;
            }
            person.damage(damage);
        }
    }
}
