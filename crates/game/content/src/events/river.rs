//! Mishaps at river crossings. These only fire when the crossing asks for
//! them.

use game_core::{DirectorEvent, EventContext, EventProduct, ItemKind};

use super::bases::{ItemDestroyer, LoseTime};
use super::weather::delay;
use super::{days, list_items};

/// The wagon tips over in the current.
#[derive(Debug, Default)]
pub struct SwampedWagon {
    destroyer: ItemDestroyer,
}

director_event!(SwampedWagon, "swamped_wagon", RiverCross, ManualOnly);

impl EventProduct for SwampedWagon {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn on_create(&mut self) {
        self.destroyer.configure(
            &[ItemKind::Food, ItemKind::Clothing, ItemKind::Ammunition],
            40,
        );
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let lost = self.destroyer.destroy(ctx);
        if lost.is_empty() {
            "The wagon is swamped, but the cargo stays dry.".to_string()
        } else {
            format!("The wagon is swamped. Lost {}.", list_items(&lost))
        }
    }
}

delay!(StuckInMud, "stuck_in_mud", RiverCross, ManualOnly; 1, 2, "Stuck in the mud.");

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ExecutionMode, PcgRng, SourceEntity, TrailState};

    #[test]
    fn crossing_events_are_manual_only() {
        assert_eq!(<SwampedWagon as DirectorEvent>::MODE, ExecutionMode::ManualOnly);
        assert_eq!(<StuckInMud as DirectorEvent>::MODE, ExecutionMode::ManualOnly);
    }

    #[test]
    fn swamped_wagon_soaks_supplies() {
        let mut state = TrailState::new(&["Ezra"]);
        let mut rng = PcgRng::seed_from(21);
        let mut event = SwampedWagon::default();
        event.on_create();

        let mut ctx = EventContext::new(&mut state, SourceEntity::Vehicle, &mut rng);
        let text = event.execute(&mut ctx);
        assert!(text.starts_with("The wagon is swamped. Lost"));
        assert!(state.vehicle.inventory.food < 1000);
        assert!(state.vehicle.inventory.clothing < 10);
        assert!(state.vehicle.inventory.ammunition < 20);
        assert_eq!(event.days_to_skip(), 0);
    }
}
