//! Event director: creates director events and runs them against the trail.
use game_core::{
    EventCategory, EventContext, EventDescriptor, EventFactory, EventProduct, EventType,
    ExecutionMode, FactoryError, RngSource, SourceEntity, TrailState,
};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};

/// Outcome of one executed event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventReport {
    pub name: &'static str,
    pub category: EventCategory,
    pub mode: ExecutionMode,
    pub source: SourceEntity,
    /// Text returned by the event.
    pub text: String,
    /// Days the trail clock was advanced by the event.
    pub days_skipped: u32,
}

/// Owns the event factory and executes what it builds.
///
/// Each event instance lives for a single call: created, executed against the
/// trail state, then dropped.
pub struct EventDirector {
    factory: EventFactory,
}

impl EventDirector {
    pub fn new(factory: EventFactory) -> Self {
        Self { factory }
    }

    /// Director over an explicit registration table.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = EventDescriptor>) -> Self {
        Self::new(EventFactory::new(descriptors))
    }

    /// Director over every event shipped in `game_content`.
    pub fn with_catalog() -> Self {
        Self::from_descriptors(game_content::catalog())
    }

    pub fn factory(&self) -> &EventFactory {
        &self.factory
    }

    /// Picks a random event of `category` and executes it against `source`.
    ///
    /// Returns `Ok(None)` when the category has no random-eligible events.
    pub fn trigger_random(
        &self,
        state: &mut TrailState,
        source: SourceEntity,
        category: EventCategory,
        rng: &mut dyn RngSource,
    ) -> Result<Option<EventReport>> {
        check_source(state, source)?;

        let Some(event) = self.factory.create_random_by_type(category, rng)? else {
            debug!(
                target: "runtime::director",
                %category,
                "No random events registered for category"
            );
            return Ok(None);
        };

        Ok(Some(execute(
            event,
            category,
            ExecutionMode::RandomOrManual,
            state,
            source,
            rng,
        )))
    }

    /// Executes a specific event type. Works for `ManualOnly` events too.
    pub fn trigger(
        &self,
        state: &mut TrailState,
        source: SourceEntity,
        event_type: EventType,
        rng: &mut dyn RngSource,
    ) -> Result<EventReport> {
        check_source(state, source)?;

        let (category, mode) = self
            .factory
            .registry()
            .find_type(event_type)
            .map(|d| (d.category(), d.mode()))
            .ok_or(FactoryError::UnknownEventType {
                name: event_type.name(),
            })?;
        let event = self.factory.create_instance(event_type)?;

        Ok(execute(event, category, mode, state, source, rng))
    }
}

fn check_source(state: &TrailState, source: SourceEntity) -> Result<()> {
    match source {
        SourceEntity::Person(id) if state.party.get(id).is_none() => {
            Err(RuntimeError::UnknownPerson { id })
        }
        _ => Ok(()),
    }
}

fn execute(
    mut event: Box<dyn EventProduct>,
    category: EventCategory,
    mode: ExecutionMode,
    state: &mut TrailState,
    source: SourceEntity,
    rng: &mut dyn RngSource,
) -> EventReport {
    let text = {
        let mut ctx = EventContext::new(state, source, rng);
        event.execute(&mut ctx)
    };
    let days_skipped = event.days_to_skip();
    state.skip_days(days_skipped);

    info!(
        target: "runtime::director",
        event = event.name(),
        %category,
        %source,
        days_skipped,
        "{}",
        text
    );

    EventReport {
        name: event.name(),
        category,
        mode,
        source,
        text,
        days_skipped,
    }
}
