//! Events raised by the turn driver itself.

use game_core::{DirectorEvent, EventContext, EventProduct, SourceEntity};

/// A traveller has died. Fired against the person who fell.
#[derive(Debug, Default)]
pub struct CompanionDied;

director_event!(CompanionDied, "companion_died", Special, ManualOnly);

impl EventProduct for CompanionDied {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let SourceEntity::Person(id) = ctx.source else {
            return "A grave is dug beside the trail.".to_string();
        };
        match ctx.person_mut(id) {
            Some(person) => {
                person.kill();
                format!("{} has died.", person.name)
            }
            None => format!("Traveller {id} is not with the party."),
        }
    }
}
