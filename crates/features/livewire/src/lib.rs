//! Livewire frontend-integration marker slice.
//!
//! Registering this slice declares that the host serves an interactive client
//! shell which dispatches `livewire:navigated` events after soft navigations.
//! Hosts doing full page loads simply never register it; the GA4 probe then
//! reports the shell as absent.

mod error;

pub use crate::error::LivewireError;

use beacon_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// Livewire marker inner state.
#[derive(Debug)]
pub struct LivewireInner {}

/// Livewire frontend-integration marker slice.
#[derive(Debug, Clone)]
pub struct Livewire {
    inner: Arc<LivewireInner>,
}

impl Livewire {
    /// Wrap the inner state for registration.
    #[must_use]
    pub fn new(inner: LivewireInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Livewire {
    type Target = LivewireInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Livewire {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the Livewire marker.
///
/// # Errors
/// Currently infallible; the `Result` keeps the slice-init contract uniform.
pub fn init() -> Result<InitializedSlice, LivewireError> {
    tracing::info!("Livewire slice initialized");

    let inner = LivewireInner {};

    let slice = Livewire::new(inner);
    Ok(InitializedSlice::new(slice))
}
