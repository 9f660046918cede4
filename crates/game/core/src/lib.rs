//! Trail state, random source, and the director event machinery.
//!
//! `game-core` defines the canonical journey state and the registry/factory
//! that turns a static table of event types into randomly selected, freshly
//! built events. It performs no I/O and logs nothing; the runtime crate wires
//! it into a turn loop.
pub mod config;
pub mod event;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use event::{
    DirectorEvent, EventBase, EventCategory, EventContext, EventDescriptor, EventFactory,
    EventKey, EventProduct, EventRegistry, EventType, ExecutionMode, FactoryError,
};
pub use rng::{PcgRng, RngSource, derive_seed};
pub use state::{
    HealthStatus, Inventory, ItemKind, PartCondition, Party, Person, PersonId, SourceEntity,
    TrailState, Vehicle, VehiclePart, VehicleStatus,
};
