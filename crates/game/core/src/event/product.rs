use std::any::TypeId;
use std::fmt;

use super::{EventCategory, ExecutionMode};
use crate::rng::RngSource;
use crate::state::{Person, PersonId, SourceEntity, TrailState};

/// Everything an executing event may read or mutate.
pub struct EventContext<'a> {
    pub state: &'a mut TrailState,
    /// Entity the event was fired against.
    pub source: SourceEntity,
    pub rng: &'a mut dyn RngSource,
}

impl<'a> EventContext<'a> {
    pub fn new(state: &'a mut TrailState, source: SourceEntity, rng: &'a mut dyn RngSource) -> Self {
        Self { state, source, rng }
    }

    /// Resolves the traveller this event targets.
    ///
    /// - `Person(id)` targets that person while they are alive
    /// - `Party` and `Vehicle` pick a living traveller at random
    ///
    /// Returns `None` when nobody qualifies.
    pub fn target_person(&mut self) -> Option<PersonId> {
        match self.source {
            SourceEntity::Person(id) => self
                .state
                .party
                .get(id)
                .filter(|p| p.is_alive())
                .map(|p| p.id),
            SourceEntity::Party | SourceEntity::Vehicle => {
                let living = self.state.party.living_ids();
                if living.is_empty() {
                    return None;
                }
                let index = self.rng.below(living.len() as u32) as usize;
                Some(living[index])
            }
        }
    }

    pub fn person_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.state.party.get_mut(id)
    }
}

/// Runtime instance of a chosen director event.
///
/// Instances are created per turn by [`super::EventFactory`], executed once,
/// then dropped.
pub trait EventProduct {
    /// Registered type name of this event.
    fn name(&self) -> &'static str;

    /// Post-create hook, invoked exactly once by the factory after allocation.
    ///
    /// Construction itself only produces a bare `Default` value; anything an
    /// event needs before it can run belongs here.
    fn on_create(&mut self) {}

    /// Applies the event to its target entities and returns the outcome text.
    fn execute(&mut self, ctx: &mut EventContext<'_>) -> String;

    /// Days the party loses to this event. Read after [`Self::execute`].
    fn days_to_skip(&self) -> u32 {
        0
    }
}

/// Registration metadata for a concrete event type.
///
/// Implementing this is the Rust counterpart of tagging a type as a director
/// event: the type can then be listed in the registration table with
/// [`super::EventDescriptor::of`].
pub trait DirectorEvent: EventProduct + Default + 'static {
    const NAME: &'static str;
    const CATEGORY: EventCategory;
    const MODE: ExecutionMode = ExecutionMode::RandomOrManual;
}

/// Registration metadata for a shared behaviour base that is never
/// instantiated on its own.
///
/// Bases appear in the registration table so their tag is visible, and the
/// registry skips them during discovery.
pub trait EventBase: 'static {
    const NAME: &'static str;
    const CATEGORY: EventCategory;
    const MODE: ExecutionMode = ExecutionMode::RandomOrManual;
}

/// Handle identifying an event type for explicit creation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventType {
    id: TypeId,
    name: &'static str,
}

impl EventType {
    /// Handle for a concrete director event.
    pub fn of<T: DirectorEvent>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::NAME,
        }
    }

    /// Handle for a behaviour base.
    pub fn base<T: EventBase>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::NAME,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventType").field(&self.name).finish()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
