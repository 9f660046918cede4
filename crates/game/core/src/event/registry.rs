use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use super::{DirectorEvent, EventBase, EventCategory, EventKey, EventProduct, EventType, ExecutionMode};

type Constructor = fn() -> Box<dyn EventProduct>;

fn construct<T: DirectorEvent>() -> Box<dyn EventProduct> {
    Box::new(T::default())
}

/// One row of the registration table: how to build an event type and where
/// it is filed.
#[derive(Clone, Copy)]
pub struct EventDescriptor {
    event_type: EventType,
    category: EventCategory,
    mode: ExecutionMode,
    /// `None` for behaviour bases.
    constructor: Option<Constructor>,
}

impl EventDescriptor {
    /// Descriptor for a concrete director event.
    pub fn of<T: DirectorEvent>() -> Self {
        Self {
            event_type: EventType::of::<T>(),
            category: T::CATEGORY,
            mode: T::MODE,
            constructor: Some(construct::<T> as Constructor),
        }
    }

    /// Descriptor for a behaviour base. Discovery skips these.
    pub fn base<T: EventBase>() -> Self {
        Self {
            event_type: EventType::base::<T>(),
            category: T::CATEGORY,
            mode: T::MODE,
            constructor: None,
        }
    }

    pub fn key(&self) -> EventKey {
        EventKey::new(self.category, self.event_type.name(), self.mode)
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn is_abstract(&self) -> bool {
        self.constructor.is_none()
    }

    /// Allocates a bare instance. No hooks run.
    pub(crate) fn allocate(&self) -> Option<Box<dyn EventProduct>> {
        self.constructor.map(|build| build())
    }
}

impl fmt::Debug for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDescriptor")
            .field("key", &self.key())
            .field("abstract", &self.is_abstract())
            .finish()
    }
}

/// Read-only index of every registered director event.
///
/// Populated once by [`EventRegistry::discover`]. The first descriptor seen
/// for a key wins; later duplicates are dropped.
#[derive(Clone, Debug, Default)]
pub struct EventRegistry {
    entries: BTreeMap<EventKey, EventDescriptor>,
}

impl EventRegistry {
    /// Builds a registry from a registration table, skipping behaviour bases.
    pub fn discover(descriptors: impl IntoIterator<Item = EventDescriptor>) -> Self {
        let mut registry = Self::default();
        for descriptor in descriptors {
            if descriptor.is_abstract() {
                continue;
            }
            registry.insert(descriptor);
        }
        registry
    }

    /// Inserts without the abstract filter. Returns false if the key was taken.
    pub(crate) fn insert(&mut self, descriptor: EventDescriptor) -> bool {
        match self.entries.entry(descriptor.key()) {
            Entry::Vacant(slot) => {
                slot.insert(descriptor);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, key: &EventKey) -> Option<&EventDescriptor> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &EventKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Reverse lookup by type handle.
    pub fn find_type(&self, event_type: EventType) -> Option<&EventDescriptor> {
        self.entries
            .values()
            .find(|descriptor| descriptor.event_type == event_type)
    }

    /// Entries of `category` eligible for random selection, in key order.
    pub fn random_candidates(
        &self,
        category: EventCategory,
    ) -> impl Iterator<Item = &EventDescriptor> + '_ {
        self.entries.values().filter(move |descriptor| {
            descriptor.category == category && descriptor.mode.is_random_eligible()
        })
    }

    /// Number of entries in `category`, any execution mode.
    pub fn count_in(&self, category: EventCategory) -> usize {
        self.entries
            .keys()
            .filter(|key| key.category() == category)
            .count()
    }

    pub fn keys(&self) -> impl Iterator<Item = &EventKey> + '_ {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventContext;

    #[derive(Default)]
    struct Fog;
    impl EventProduct for Fog {
        fn name(&self) -> &'static str {
            Self::NAME
        }
        fn execute(&mut self, _ctx: &mut EventContext<'_>) -> String {
            String::new()
        }
    }
    impl DirectorEvent for Fog {
        const NAME: &'static str = "fog";
        const CATEGORY: EventCategory = EventCategory::Weather;
    }

    /// Same key as `Fog`, different type.
    #[derive(Default)]
    struct FogImpostor;
    impl EventProduct for FogImpostor {
        fn name(&self) -> &'static str {
            Self::NAME
        }
        fn execute(&mut self, _ctx: &mut EventContext<'_>) -> String {
            String::new()
        }
    }
    impl DirectorEvent for FogImpostor {
        const NAME: &'static str = "fog";
        const CATEGORY: EventCategory = EventCategory::Weather;
    }

    #[derive(Default)]
    struct Blizzard;
    impl EventProduct for Blizzard {
        fn name(&self) -> &'static str {
            Self::NAME
        }
        fn execute(&mut self, _ctx: &mut EventContext<'_>) -> String {
            String::new()
        }
    }
    impl DirectorEvent for Blizzard {
        const NAME: &'static str = "blizzard";
        const CATEGORY: EventCategory = EventCategory::Weather;
        const MODE: ExecutionMode = ExecutionMode::ManualOnly;
    }

    struct LoseTimeBase;
    impl EventBase for LoseTimeBase {
        const NAME: &'static str = "lose_time";
        const CATEGORY: EventCategory = EventCategory::Weather;
    }

    #[test]
    fn discovery_skips_bases() {
        let registry = EventRegistry::discover([
            EventDescriptor::base::<LoseTimeBase>(),
            EventDescriptor::of::<Fog>(),
        ]);
        assert_eq!(registry.len(), 1);
        assert!(registry.find_type(EventType::base::<LoseTimeBase>()).is_none());
        assert!(registry.find_type(EventType::of::<Fog>()).is_some());
    }

    #[test]
    fn first_registrant_wins() {
        let registry = EventRegistry::discover([
            EventDescriptor::of::<Fog>(),
            EventDescriptor::of::<FogImpostor>(),
            EventDescriptor::of::<Fog>(),
        ]);
        assert_eq!(registry.len(), 1);
        assert!(registry.find_type(EventType::of::<Fog>()).is_some());
        assert!(registry.find_type(EventType::of::<FogImpostor>()).is_none());
    }

    #[test]
    fn one_entry_per_distinct_key() {
        let registry = EventRegistry::discover([
            EventDescriptor::of::<Fog>(),
            EventDescriptor::of::<Blizzard>(),
        ]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&EventKey::new(
            EventCategory::Weather,
            "blizzard",
            ExecutionMode::ManualOnly
        )));
        assert_eq!(registry.count_in(EventCategory::Weather), 2);
        assert_eq!(registry.count_in(EventCategory::Wild), 0);
    }

    #[test]
    fn random_candidates_exclude_manual_only() {
        let registry = EventRegistry::discover([
            EventDescriptor::of::<Fog>(),
            EventDescriptor::of::<Blizzard>(),
        ]);
        let names: Vec<_> = registry
            .random_candidates(EventCategory::Weather)
            .map(|d| d.event_type().name())
            .collect();
        assert_eq!(names, vec!["fog"]);
    }
}
