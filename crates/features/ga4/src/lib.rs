//! GA4 tracking feature slice.
//!
//! Renders the conditional GA4 tracking snippet for server-rendered pages:
//! nothing when no measurement ID is configured, the async loader plus a
//! `gtag('config', ...)` call when one is, and an additional soft-navigation
//! listener when the injected [`NavigationProbe`] reports an interactive
//! client shell.

mod error;
mod probe;
mod renderer;

pub use crate::error::Ga4Error;
pub use crate::probe::{NavigationProbe, RegistryProbe, StaticProbe};
pub use crate::renderer::SnippetRenderer;

use beacon_kernel::domain::config::AnalyticsConfig;
use beacon_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::ops::Deref;
use std::sync::Arc;

/// GA4 feature inner state.
#[derive(Debug)]
pub struct Ga4Inner {
    renderer: SnippetRenderer,
}

impl Ga4Inner {
    /// Render the tracking snippet for the configured measurement ID.
    #[must_use]
    pub fn render(&self) -> String {
        self.renderer.render()
    }
}

/// GA4 feature slice.
#[derive(Debug, Clone)]
pub struct Ga4 {
    inner: Arc<Ga4Inner>,
}

impl Ga4 {
    /// Wrap the inner state for registration.
    #[must_use]
    pub fn new(inner: Ga4Inner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Ga4 {
    type Target = Ga4Inner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Ga4 {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the GA4 feature.
///
/// The probe decides at render time whether the soft-navigation listener is
/// appended; pass [`StaticProbe::ABSENT`] for hosts without a client shell.
///
/// # Errors
/// Currently infallible; the `Result` keeps the slice-init contract uniform.
pub fn init(
    config: &AnalyticsConfig,
    probe: Box<dyn NavigationProbe>,
) -> Result<InitializedSlice, Ga4Error> {
    tracing::info!(configured = config.measurement_id.is_some(), "GA4 slice initialized");

    let inner = Ga4Inner {
        renderer: SnippetRenderer::new(config.measurement_id.clone(), probe),
    };

    let slice = Ga4::new(inner);
    Ok(InitializedSlice::new(slice))
}
