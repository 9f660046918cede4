//! Oxen and wildlife.

use game_core::{DirectorEvent, EventContext, EventProduct, ItemKind};

use super::bases::ItemDestroyer;
use super::list_items;

/// An ox strays from the herd overnight.
#[derive(Debug, Default)]
pub struct OxWandersOff;

director_event!(OxWandersOff, "ox_wanders_off", Animal);

impl EventProduct for OxWandersOff {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let inventory = &mut ctx.state.vehicle.inventory;
        if inventory.remove(ItemKind::Oxen, 1) == 0 {
            return "You search for stray oxen, but you have none left.".to_string();
        }
        match inventory.oxen {
            0 => "Your last ox wanders off. The wagon cannot move.".to_string(),
            left => format!("An ox wanders off. {left} remain."),
        }
    }
}

/// A buffalo herd tramples the camp.
#[derive(Debug, Default)]
pub struct BuffaloStampede {
    destroyer: ItemDestroyer,
}

director_event!(BuffaloStampede, "buffalo_stampede", Animal);

impl EventProduct for BuffaloStampede {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn on_create(&mut self) {
        self.destroyer
            .configure(&[ItemKind::Food, ItemKind::Oxen, ItemKind::Clothing], 20);
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let lost = self.destroyer.destroy(ctx);
        if lost.is_empty() {
            "A buffalo stampede thunders past. Nothing was lost.".to_string()
        } else {
            format!("A buffalo stampede! Lost {}.", list_items(&lost))
        }
    }
}
