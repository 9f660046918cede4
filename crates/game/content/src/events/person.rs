//! Illness and injury.

use game_core::{DirectorEvent, EventContext, EventProduct};

use super::bases::{PersonInfect, PersonInjure};

const RELAPSE_DAMAGE: u32 = 50;

/// Declares an illness event built on [`PersonInfect`].
macro_rules! illness {
    ($ty:ident, $name:literal, $disease:literal) => {
        #[derive(Debug, Default)]
        pub struct $ty {
            infect: PersonInfect,
        }

        director_event!($ty, $name, Person);

        impl EventProduct for $ty {
            fn name(&self) -> &'static str {
                <Self as DirectorEvent>::NAME
            }

            fn on_create(&mut self) {
                self.infect.configure(RELAPSE_DAMAGE);
            }

            fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
                match self.infect.infect(ctx) {
                    Some(name) => format!("{name} has {}.", $disease),
                    None => "Nobody is left to fall ill.".to_string(),
                }
            }
        }
    };
}

illness!(Cholera, "cholera", "cholera");
illness!(Dysentery, "dysentery", "dysentery");
illness!(Measles, "measles", "measles");
illness!(Typhoid, "typhoid", "typhoid fever");

/// Declares an injury event built on [`PersonInjure`].
macro_rules! injury {
    ($ty:ident, $name:literal, $damage:expr, $template:literal) => {
        #[derive(Debug, Default)]
        pub struct $ty {
            injure: PersonInjure,
        }

        director_event!($ty, $name, Person);

        impl EventProduct for $ty {
            fn name(&self) -> &'static str {
                <Self as DirectorEvent>::NAME
            }

            fn on_create(&mut self) {
                self.injure.configure($damage);
            }

            fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
                match self.injure.injure(ctx) {
                    Some((_, name)) => format!($template, name = name),
                    None => "Nobody is left to get hurt.".to_string(),
                }
            }
        }
    };
}

injury!(BrokenArm, "broken_arm", 20, "{name} has a broken arm.");
injury!(BrokenLeg, "broken_leg", 40, "{name} has a broken leg.");
injury!(SnakeBite, "snake_bite", 80, "{name} was bitten by a snake.");

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Person, PersonId, PcgRng, SourceEntity, TrailState};

    #[test]
    fn illness_marks_target_sick() {
        let mut state = TrailState::new(&["Ezra", "Mary"]);
        let mut rng = PcgRng::seed_from(1);
        let mut event = Cholera::default();
        event.on_create();

        let mut ctx = EventContext::new(&mut state, SourceEntity::Person(PersonId(0)), &mut rng);
        assert_eq!(event.execute(&mut ctx), "Ezra has cholera.");
        assert!(state.party.get(PersonId(0)).is_some_and(|p| p.infected));
    }

    #[test]
    fn second_illness_hurts() {
        let mut state = TrailState::new(&["Ezra"]);
        let mut rng = PcgRng::seed_from(2);
        let mut event = Typhoid::default();
        event.on_create();

        for _ in 0..2 {
            let mut ctx =
                EventContext::new(&mut state, SourceEntity::Person(PersonId(0)), &mut rng);
            event.execute(&mut ctx);
        }
        let ezra = state.party.get(PersonId(0)).expect("exists");
        assert_eq!(ezra.health, Person::MAX_HEALTH - RELAPSE_DAMAGE);
    }

    #[test]
    fn snake_bite_injures_and_damages() {
        let mut state = TrailState::new(&["Ezra"]);
        let mut rng = PcgRng::seed_from(3);
        let mut event = SnakeBite::default();
        event.on_create();

        let mut ctx = EventContext::new(&mut state, SourceEntity::Party, &mut rng);
        assert_eq!(event.execute(&mut ctx), "Ezra was bitten by a snake.");
        let ezra = state.party.get(PersonId(0)).expect("exists");
        assert!(ezra.injured);
        assert_eq!(ezra.health, Person::MAX_HEALTH - 80);
    }
}
