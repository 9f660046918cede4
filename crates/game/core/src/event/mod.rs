//! Director events: identity, registration, and manufacture.
//!
//! # Architecture
//!
//! ```text
//! EventDescriptor (static table) ──discover──▶ EventRegistry
//!                                                  │
//!                                  EventFactory ◀──┘
//!                                    ├─ create_instance(EventType)
//!                                    └─ create_random_by_type(EventCategory, rng)
//! ```
//!
//! Event types register themselves through an explicit table of
//! [`EventDescriptor`]s. The factory indexes them by [`EventKey`], picks one
//! uniformly per category on request, and builds it in two phases: a bare
//! allocation through the descriptor's constructor, then the
//! [`EventProduct::on_create`] hook.
mod error;
mod factory;
mod key;
mod kind;
mod product;
mod registry;

pub use error::FactoryError;
pub use factory::EventFactory;
pub use key::EventKey;
pub use kind::{EventCategory, ExecutionMode};
pub use product::{DirectorEvent, EventBase, EventContext, EventProduct, EventType};
pub use registry::{EventDescriptor, EventRegistry};
