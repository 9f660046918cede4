use super::{
    EventCategory, EventDescriptor, EventProduct, EventRegistry, EventType, FactoryError,
};
use crate::rng::RngSource;

/// Manufactures director events from a discovered registry.
///
/// The registry is built once in [`EventFactory::new`] and never changes
/// afterwards; rebuilding requires a new factory.
#[derive(Clone, Debug, Default)]
pub struct EventFactory {
    registry: EventRegistry,
}

impl EventFactory {
    /// Runs discovery over a registration table.
    pub fn new(descriptors: impl IntoIterator<Item = EventDescriptor>) -> Self {
        Self::with_registry(EventRegistry::discover(descriptors))
    }

    pub(crate) fn with_registry(registry: EventRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Builds an instance of a registered event type.
    ///
    /// The instance is allocated without game-side initialization, then
    /// [`EventProduct::on_create`] runs exactly once before it is returned.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::UnknownEventType`] if `event_type` was never registered
    /// - [`FactoryError::AbstractEventType`] if the matching entry is a base
    /// - [`FactoryError::InstantiationFailed`] if the constructor produced a
    ///   different event than the one registered
    pub fn create_instance(
        &self,
        event_type: EventType,
    ) -> Result<Box<dyn EventProduct>, FactoryError> {
        let descriptor =
            self.registry
                .find_type(event_type)
                .ok_or(FactoryError::UnknownEventType {
                    name: event_type.name(),
                })?;

        let mut instance = descriptor
            .allocate()
            .ok_or(FactoryError::AbstractEventType {
                name: event_type.name(),
            })?;

        if instance.name() != event_type.name() {
            return Err(FactoryError::InstantiationFailed {
                expected: event_type.name(),
                produced: instance.name(),
            });
        }

        instance.on_create();
        Ok(instance)
    }

    /// Picks a random event of `category` and builds it.
    ///
    /// Only `RandomOrManual` entries take part, each with equal probability.
    /// Returns `Ok(None)` when the category has no eligible events.
    pub fn create_random_by_type(
        &self,
        category: EventCategory,
        rng: &mut dyn RngSource,
    ) -> Result<Option<Box<dyn EventProduct>>, FactoryError> {
        let candidates: Vec<EventType> = self
            .registry
            .random_candidates(category)
            .map(EventDescriptor::event_type)
            .collect();

        if candidates.is_empty() {
            return Ok(None);
        }

        let index = rng.below(candidates.len() as u32) as usize;
        self.create_instance(candidates[index]).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{DirectorEvent, EventBase, EventContext, ExecutionMode};
    use crate::rng::PcgRng;
    use std::cell::Cell;
    use std::collections::HashMap;

    thread_local! {
        static CREATED: Cell<u32> = const { Cell::new(0) };
    }

    macro_rules! test_event {
        ($ty:ident, $name:literal, $category:expr) => {
            test_event!($ty, $name, $category, ExecutionMode::RandomOrManual);
        };
        ($ty:ident, $name:literal, $category:expr, $mode:expr) => {
            #[derive(Default)]
            struct $ty;
            impl EventProduct for $ty {
                fn name(&self) -> &'static str {
                    <Self as DirectorEvent>::NAME
                }
                fn execute(&mut self, _ctx: &mut EventContext<'_>) -> String {
                    $name.to_string()
                }
            }
            impl DirectorEvent for $ty {
                const NAME: &'static str = $name;
                const CATEGORY: EventCategory = $category;
                const MODE: ExecutionMode = $mode;
            }
        };
    }

    test_event!(Cholera, "cholera", EventCategory::Person);
    test_event!(Measles, "measles", EventCategory::Person);
    test_event!(Typhoid, "typhoid", EventCategory::Person);
    test_event!(SnakeBite, "snake_bite", EventCategory::Person);
    test_event!(Hail, "hail", EventCategory::Weather);
    test_event!(Swamped, "swamped", EventCategory::RiverCross, ExecutionMode::ManualOnly);
    test_event!(Unlisted, "unlisted", EventCategory::Wild);

    #[derive(Default)]
    struct Counted {
        created: bool,
    }
    impl EventProduct for Counted {
        fn name(&self) -> &'static str {
            Self::NAME
        }
        fn on_create(&mut self) {
            self.created = true;
            CREATED.with(|c| c.set(c.get() + 1));
        }
        fn execute(&mut self, _ctx: &mut EventContext<'_>) -> String {
            format!("created={}", self.created)
        }
    }
    impl DirectorEvent for Counted {
        const NAME: &'static str = "counted";
        const CATEGORY: EventCategory = EventCategory::Special;
    }

    /// Registered as "mislabeled" but reports another name once built.
    #[derive(Default)]
    struct Mislabeled;
    impl EventProduct for Mislabeled {
        fn name(&self) -> &'static str {
            "something_else"
        }
        fn execute(&mut self, _ctx: &mut EventContext<'_>) -> String {
            String::new()
        }
    }
    impl DirectorEvent for Mislabeled {
        const NAME: &'static str = "mislabeled";
        const CATEGORY: EventCategory = EventCategory::Wild;
    }

    struct InjureBase;
    impl EventBase for InjureBase {
        const NAME: &'static str = "person_injure";
        const CATEGORY: EventCategory = EventCategory::Person;
    }

    fn person_factory() -> EventFactory {
        EventFactory::new([
            EventDescriptor::base::<InjureBase>(),
            EventDescriptor::of::<Cholera>(),
            EventDescriptor::of::<Measles>(),
            EventDescriptor::of::<Typhoid>(),
            EventDescriptor::of::<SnakeBite>(),
            EventDescriptor::of::<Hail>(),
            EventDescriptor::of::<Swamped>(),
        ])
    }

    #[test]
    fn unknown_type_is_configuration_error() {
        let factory = person_factory();
        let err = factory
            .create_instance(EventType::of::<Unlisted>())
            .err()
            .expect("unregistered type must fail");
        assert_eq!(err, FactoryError::UnknownEventType { name: "unlisted" });
    }

    #[test]
    fn base_type_is_unknown_after_discovery() {
        let factory = person_factory();
        let err = factory
            .create_instance(EventType::base::<InjureBase>())
            .err()
            .expect("bases are never registered");
        assert_eq!(
            err,
            FactoryError::UnknownEventType {
                name: "person_injure"
            }
        );
    }

    #[test]
    fn abstract_entry_is_rejected() {
        let mut registry = EventRegistry::default();
        registry.insert(EventDescriptor::base::<InjureBase>());
        let factory = EventFactory::with_registry(registry);

        let err = factory
            .create_instance(EventType::base::<InjureBase>())
            .err()
            .expect("abstract entries cannot be built");
        assert_eq!(
            err,
            FactoryError::AbstractEventType {
                name: "person_injure"
            }
        );
    }

    #[test]
    fn mismatched_constructor_fails() {
        let factory = EventFactory::new([EventDescriptor::of::<Mislabeled>()]);
        let err = factory
            .create_instance(EventType::of::<Mislabeled>())
            .err()
            .expect("mismatch must fail");
        assert_eq!(
            err,
            FactoryError::InstantiationFailed {
                expected: "mislabeled",
                produced: "something_else"
            }
        );
    }

    #[test]
    fn on_create_runs_exactly_once() {
        CREATED.with(|c| c.set(0));
        let factory = EventFactory::new([EventDescriptor::of::<Counted>()]);

        let mut event = factory
            .create_instance(EventType::of::<Counted>())
            .expect("registered");
        assert_eq!(CREATED.with(Cell::get), 1);

        let mut state = crate::TrailState::new(&["Ezra"]);
        let mut rng = PcgRng::seed_from(1);
        let mut ctx = EventContext::new(&mut state, crate::SourceEntity::Party, &mut rng);
        assert_eq!(event.execute(&mut ctx), "created=true");
        assert_eq!(CREATED.with(Cell::get), 1);
    }

    #[test]
    fn empty_category_yields_none() {
        let factory = person_factory();
        let mut rng = PcgRng::seed_from(3);
        assert!(
            factory
                .create_random_by_type(EventCategory::Animal, &mut rng)
                .expect("no error")
                .is_none()
        );
    }

    #[test]
    fn manual_only_never_selected_randomly() {
        let factory = person_factory();
        let mut rng = PcgRng::seed_from(3);
        for _ in 0..100 {
            assert!(
                factory
                    .create_random_by_type(EventCategory::RiverCross, &mut rng)
                    .expect("no error")
                    .is_none()
            );
        }
        // Still reachable by explicit type.
        let event = factory
            .create_instance(EventType::of::<Swamped>())
            .expect("manual creation");
        assert_eq!(event.name(), "swamped");
    }

    #[test]
    fn single_candidate_always_chosen() {
        let factory = person_factory();
        let mut rng = PcgRng::seed_from(5);
        for _ in 0..50 {
            let event = factory
                .create_random_by_type(EventCategory::Weather, &mut rng)
                .expect("no error")
                .expect("hail is eligible");
            assert_eq!(event.name(), "hail");
        }
    }

    #[test]
    fn selection_is_uniform() {
        const DRAWS: usize = 10_000;
        let factory = person_factory();
        let mut rng = PcgRng::seed_from(0xD1CE);
        let mut counts: HashMap<&'static str, usize> = HashMap::new();

        for _ in 0..DRAWS {
            let event = factory
                .create_random_by_type(EventCategory::Person, &mut rng)
                .expect("no error")
                .expect("person events registered");
            *counts.entry(event.name()).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        let expected = 1.0 / 4.0;
        for (name, count) in counts {
            let frequency = count as f64 / DRAWS as f64;
            assert!(
                (frequency - expected).abs() < 0.03,
                "{name} drawn with frequency {frequency}"
            );
        }
    }
}
