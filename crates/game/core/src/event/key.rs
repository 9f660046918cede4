use std::fmt;

use super::{EventCategory, ExecutionMode};

/// Registry key for a director event type.
///
/// Equality, hashing, and ordering cover all three fields. Ordering is
/// category first, then type name, which keeps registry iteration stable
/// across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventKey {
    category: EventCategory,
    type_name: &'static str,
    mode: ExecutionMode,
}

impl EventKey {
    pub const fn new(category: EventCategory, type_name: &'static str, mode: ExecutionMode) -> Self {
        Self {
            category,
            type_name,
            mode,
        }
    }

    pub const fn category(&self) -> EventCategory {
        self.category
    }

    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.category, self.type_name, self.mode)
    }
}
