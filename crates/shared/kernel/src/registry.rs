//! Live slice registry.
//! Holds type-erased feature state registered at startup or later. Lookups
//! always read the current contents, so capability checks made through the
//! registry are re-evaluated on every call rather than cached.

use beacon_domain::registry::{FeatureSlice, InitializedSlice};
use parking_lot::RwLock;
use std::any::TypeId;

/// Registry of initialized feature slices, typically shared via `Arc`.
///
/// Registration is allowed at any point of the process lifetime; a slice that
/// becomes available after startup is visible to the next lookup.
#[derive(Debug, Default)]
pub struct SliceRegistry {
    slices: RwLock<Vec<InitializedSlice>>,
}

impl SliceRegistry {
    /// Register an initialized slice.
    ///
    /// The first registration of a slice type wins; a duplicate is ignored
    /// with a warning so wiring mistakes never break startup.
    pub fn register(&self, slice: InitializedSlice) {
        let mut slices = self.slices.write();
        if slices.iter().any(|s| s.id == slice.id) {
            tracing::warn!("Duplicate slice registration ignored");
            return;
        }
        slices.push(slice);
    }

    /// Whether a slice of type `T` is currently registered.
    #[must_use]
    pub fn contains<T: FeatureSlice>(&self) -> bool {
        self.contains_id(TypeId::of::<T>())
    }

    /// Whether a slice with the given type id is currently registered.
    #[must_use]
    pub fn contains_id(&self, id: TypeId) -> bool {
        self.slices.read().iter().any(|s| s.id == id)
    }

    /// Run `f` against the state of the registered slice of type `T`.
    ///
    /// Returns `None` when no such slice is registered. The closure runs under
    /// the registry read lock; keep it short.
    pub fn with_slice<T: FeatureSlice, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let slices = self.slices.read();
        slices.iter().find_map(InitializedSlice::downcast_ref::<T>).map(f)
    }

    /// Number of registered slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.read().len()
    }

    /// Whether the registry holds no slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.read().is_empty()
    }
}
