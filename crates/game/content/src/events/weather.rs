//! Weather that costs the party time.

use game_core::{DirectorEvent, EventContext, EventProduct};

use super::bases::LoseTime;
use super::days;

/// Declares a time-losing event built on [`LoseTime`].
macro_rules! delay {
    ($ty:ident, $name:literal, $category:ident $(, $mode:ident)?; $min:expr, $max:expr, $prompt:literal) => {
        #[derive(Debug, Default)]
        pub struct $ty {
            lose: LoseTime,
        }

        director_event!($ty, $name, $category $(, $mode)?);

        impl EventProduct for $ty {
            fn name(&self) -> &'static str {
                <Self as DirectorEvent>::NAME
            }

            fn on_create(&mut self) {
                self.lose.configure($min, $max);
            }

            fn execute(&mut self, ctx: &mut EventContext<'_>) -> String {
                let lost = self.lose.roll(ctx);
                format!("{} Lose {}.", $prompt, days(lost))
            }

            fn days_to_skip(&self) -> u32 {
                self.lose.days()
            }
        }
    };
}

pub(crate) use delay;

delay!(HeavyFog, "heavy_fog", Weather; 1, 2, "Heavy fog.");
delay!(Hail, "hail", Weather; 1, 2, "Severe hailstorm.");
delay!(Blizzard, "blizzard", Weather, ManualOnly; 2, 5, "Blizzard.");
