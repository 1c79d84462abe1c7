//! Capability probes for the soft-navigation client shell.

use beacon_kernel::domain::registry::FeatureSlice;
use beacon_kernel::registry::SliceRegistry;
use std::any::TypeId;
use std::fmt::Debug;
use std::sync::Arc;

/// Read-only query answering "is a soft-navigation client shell available
/// right now".
///
/// The renderer asks on every render and never caches the answer, so an
/// implementation whose state changes between calls changes the rendered
/// output accordingly. Absence is a normal outcome, not an error; `is_present`
/// must not fail.
pub trait NavigationProbe: Debug + Send + Sync {
    /// Whether the client shell is currently available.
    fn is_present(&self) -> bool;
}

/// Probe with a fixed answer.
///
/// The deterministic substitute for tests, also useful for hosts that know
/// up front they never (or always) serve an interactive shell.
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe(bool);

impl StaticProbe {
    /// The shell is always available.
    pub const PRESENT: Self = Self(true);
    /// The shell is never available.
    pub const ABSENT: Self = Self(false);
}

impl NavigationProbe for StaticProbe {
    fn is_present(&self) -> bool {
        self.0
    }
}

/// Probe backed by the live slice registry.
///
/// Reports presence while a marker slice of the watched type is registered.
/// The lookup happens at call time, so a marker registered after startup
/// flips the answer on the next render.
#[derive(Debug, Clone)]
pub struct RegistryProbe {
    registry: Arc<SliceRegistry>,
    marker: TypeId,
}

impl RegistryProbe {
    /// Create a probe watching the registry for a slice of type `T`.
    #[must_use]
    pub fn watching<T: FeatureSlice>(registry: Arc<SliceRegistry>) -> Self {
        Self { registry, marker: TypeId::of::<T>() }
    }
}

impl NavigationProbe for RegistryProbe {
    fn is_present(&self) -> bool {
        self.registry.contains_id(self.marker)
    }
}
