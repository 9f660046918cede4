use std::cell::Cell;
use std::rc::Rc;

use circuit_breaker::{BreakerConfig, CircuitState, RequestAction, TickOutcome};
use game_core::{EventCategory, GameConfig, PersonId, TrailState};
use runtime::{EventDirector, RuntimeConfig, Simulation};

/// Request that fails while `down` is set.
#[derive(Clone)]
struct Uplink {
    down: Rc<Cell<bool>>,
}

impl RequestAction for Uplink {
    type Error = &'static str;

    fn send_request(&mut self) -> Result<(), Self::Error> {
        if self.down.get() { Err("uplink down") } else { Ok(()) }
    }
}

fn simulation(config: RuntimeConfig, uplink: Uplink) -> Simulation<Uplink> {
    Simulation::new(
        config,
        TrailState::new(&["Ezra", "Mary", "Abe"]),
        EventDirector::with_catalog(),
        uplink,
    )
    .expect("valid config")
}

#[test]
fn seeded_journeys_replay_exactly() {
    let config = RuntimeConfig {
        game: GameConfig::with_event_chance(60),
        seed: 0xC0FFEE,
        ..RuntimeConfig::default()
    };
    let uplink = Uplink { down: Rc::new(Cell::new(false)) };

    let first = simulation(config.clone(), uplink.clone()).run(30).expect("run");
    let second = simulation(config, uplink).run(30).expect("run");
    assert_eq!(first, second);
    assert!(first.iter().any(|turn| !turn.events.is_empty()));
}

#[test]
fn outage_opens_breaker_and_recovery_closes_it() {
    let config = RuntimeConfig {
        game: GameConfig::with_event_chance(0),
        breaker: BreakerConfig::new(2, 3),
        seed: 7,
    };
    let down = Rc::new(Cell::new(true));
    let mut sim = simulation(config, Uplink { down: Rc::clone(&down) });

    let outcomes: Vec<_> = (0..2).map(|_| sim.step().expect("step").request).collect();
    assert!(outcomes.iter().all(|o| matches!(o, TickOutcome::Failed { .. })));
    assert!(sim.breaker().state().is_open());

    down.set(false);
    for _ in 0..3 {
        assert_eq!(sim.step().expect("step").request, TickOutcome::Cancelled);
    }
    assert_eq!(sim.breaker().state(), CircuitState::HalfOpen);

    assert_eq!(sim.step().expect("step").request, TickOutcome::Sent);
    assert_eq!(sim.breaker().state(), CircuitState::Closed);
    assert_eq!(sim.breaker().failure_count(), 0);
}

#[test]
fn only_configured_categories_fire() {
    let config = RuntimeConfig {
        game: GameConfig {
            random_categories: vec![EventCategory::Weather],
            ..GameConfig::with_event_chance(100)
        },
        seed: 11,
        ..RuntimeConfig::default()
    };
    let mut sim = simulation(config, Uplink { down: Rc::new(Cell::new(false)) });

    for turn in sim.run(10).expect("run") {
        assert_eq!(turn.events.len(), 1);
        assert_eq!(turn.events[0].category, EventCategory::Weather);
    }
}

#[test]
fn starvation_kills_and_reports_deaths() {
    let config = RuntimeConfig {
        game: GameConfig {
            starvation_damage: 250,
            ..GameConfig::with_event_chance(0)
        },
        seed: 3,
        ..RuntimeConfig::default()
    };
    let mut sim = simulation(config, Uplink { down: Rc::new(Cell::new(false)) });
    sim.state_mut().vehicle.inventory.food = 0;

    let reports = sim.run(10).expect("run");
    assert_eq!(reports.len(), 2);

    let last = &reports[1];
    assert_eq!(last.deaths, vec![PersonId(0), PersonId(1), PersonId(2)]);
    let obituaries: Vec<_> = last.events.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(
        obituaries,
        ["Ezra has died.", "Mary has died.", "Abe has died."]
    );
    assert!(last.events.iter().all(|e| e.category == EventCategory::Special));
    assert!(sim.state().is_party_dead());
}

#[test]
fn event_deaths_fire_an_obituary() {
    let config = RuntimeConfig {
        game: GameConfig {
            random_categories: vec![EventCategory::Person],
            illness_damage: 0,
            ..GameConfig::with_event_chance(100)
        },
        seed: 5,
        ..RuntimeConfig::default()
    };
    let mut state = TrailState::new(&["Ezra"]);
    let ezra = state.party.get_mut(PersonId(0)).expect("exists");
    ezra.health = 1;
    ezra.infected = true;
    ezra.injured = true;

    let mut sim = Simulation::new(
        config,
        state,
        EventDirector::with_catalog(),
        Uplink { down: Rc::new(Cell::new(false)) },
    )
    .expect("valid config");

    let turn = sim.step().expect("step");
    assert!(sim.state().is_party_dead());
    assert_eq!(turn.deaths, vec![PersonId(0)]);
    assert_eq!(turn.events.len(), 2);
    assert_eq!(turn.events[0].category, EventCategory::Person);
    assert_eq!(turn.events[1].text, "Ezra has died.");
    assert_eq!(turn.events[1].category, EventCategory::Special);
}
