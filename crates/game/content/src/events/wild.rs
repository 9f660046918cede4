//! Hazards of the open country.

use game_core::{DirectorEvent, EventContext, EventProduct, ItemKind};

use super::bases::{ItemCreator, LoseTime, PersonInfect};
use super::weather::delay;
use super::{days, list_items};

delay!(LostTrail, "lost_trail", Wild; 1, 4, "You lose the trail.");
delay!(WrongTrail, "wrong_trail", Wild; 1, 3, "Wrong trail.");

/// Berries and fruit along the trail.
#[derive(Debug, Default)]
pub struct WildFruit {
    creator: ItemCreator,
}

director_event!(WildFruit, "wild_fruit", Wild);

impl EventProduct for WildFruit {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn on_create(&mut self) {
        self.creator.configure(&[(ItemKind::Food, 30)]);
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let found = self.creator.create(ctx);
        if found.is_empty() {
            "You spot wild fruit, but it is not ripe yet.".to_string()
        } else {
            format!("You find wild fruit: {}.", list_items(&found))
        }
    }
}

/// Drinking from a bad spring.
#[derive(Debug, Default)]
pub struct BadWater {
    infect: PersonInfect,
}

director_event!(BadWater, "bad_water", Wild);

impl EventProduct for BadWater {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn on_create(&mut self) {
        self.infect.configure(30);
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        match self.infect.infect(ctx) {
            Some(name) => format!("Bad water. {name} falls ill."),
            None => "Bad water, but nobody drank it.".to_string(),
        }
    }
}
