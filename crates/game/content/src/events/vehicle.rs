//! Breakdowns, theft, and salvage.

use game_core::{DirectorEvent, EventContext, EventProduct, ItemKind, VehiclePart};

use super::bases::{ItemCreator, ItemDestroyer};
use super::list_items;

fn break_part(ctx: &mut EventContext<'_>, part: VehiclePart) -> String {
    if ctx.state.vehicle.break_part(part) {
        format!("A wagon {part} breaks. You replace it with a spare.")
    } else {
        format!("A wagon {part} breaks and you have no spare. The wagon cannot move.")
    }
}

macro_rules! breakdown {
    ($ty:ident, $name:literal, $part:expr) => {
        #[derive(Debug, Default)]
        pub struct $ty;

        director_event!($ty, $name, Vehicle);

        impl EventProduct for $ty {
            fn name(&self) -> &'static str {
                <Self as DirectorEvent>::NAME
            }

            fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
                break_part(ctx, $part)
            }
        }
    };
}

breakdown!(BrokenAxle, "broken_axle", VehiclePart::Axle);
breakdown!(BrokenWheel, "broken_wheel", VehiclePart::Wheel);
breakdown!(BrokenTongue, "broken_tongue", VehiclePart::Tongue);

/// Fire in the wagon.
#[derive(Debug, Default)]
pub struct WagonFire {
    destroyer: ItemDestroyer,
}

director_event!(WagonFire, "wagon_fire", Vehicle);

impl EventProduct for WagonFire {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn on_create(&mut self) {
        self.destroyer.configure(
            &[
                ItemKind::Food,
                ItemKind::Clothing,
                ItemKind::Ammunition,
                ItemKind::SpareWheel,
                ItemKind::SpareAxle,
                ItemKind::SpareTongue,
            ],
            30,
        );
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let lost = self.destroyer.destroy(ctx);
        if lost.is_empty() {
            "A fire in the wagon is put out quickly. Nothing was lost.".to_string()
        } else {
            format!("A fire in the wagon. Lost {}.", list_items(&lost))
        }
    }
}

/// A thief comes during the night.
#[derive(Debug, Default)]
pub struct Thief {
    destroyer: ItemDestroyer,
}

director_event!(Thief, "thief", Vehicle);

impl EventProduct for Thief {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn on_create(&mut self) {
        self.destroyer.configure(
            &[ItemKind::Money, ItemKind::Food, ItemKind::Ammunition],
            25,
        );
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let stolen = self.destroyer.destroy(ctx);
        if stolen.is_empty() {
            "A thief comes during the night but finds nothing worth taking.".to_string()
        } else {
            format!("A thief comes during the night and steals {}.", list_items(&stolen))
        }
    }
}

/// An abandoned wagon by the trail.
#[derive(Debug, Default)]
pub struct AbandonedWagon {
    creator: ItemCreator,
}

director_event!(AbandonedWagon, "abandoned_wagon", Vehicle);

impl EventProduct for AbandonedWagon {
    fn name(&self) -> &'static str {
        <Self as DirectorEvent>::NAME
    }

    fn on_create(&mut self) {
        self.creator.configure(&[
            (ItemKind::Food, 50),
            (ItemKind::Clothing, 3),
            (ItemKind::Ammunition, 5),
            (ItemKind::SpareWheel, 1),
            (ItemKind::SpareAxle, 1),
            (ItemKind::SpareTongue, 1),
        ]);
    }

    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
        let found = self.creator.create(ctx);
        if found.is_empty() {
            "You find an abandoned wagon, but it is empty.".to_string()
        } else {
            format!("You find an abandoned wagon with {}.", list_items(&found))
        }
    }
}
