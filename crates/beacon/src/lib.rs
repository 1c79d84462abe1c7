//! Facade crate for `TagBeacon` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] with the loaded configuration to get a slice registry.
//! - Register the Livewire marker when the host serves an interactive shell.
//! - Call [`snippet`] wherever the page layout injects the tracking markup.

pub use beacon_domain as domain;
pub use beacon_kernel as kernel;
pub use beacon_logger as logger;

use beacon_domain::config::AppConfig;
use beacon_ga4::{Ga4, RegistryProbe};
use beacon_kernel::registry::SliceRegistry;
use beacon_livewire::Livewire;
use std::sync::Arc;

/// Feature registry for runtime introspection.
pub mod features {
    pub use beacon_ga4 as ga4;
    pub use beacon_livewire as livewire;

    /// Built-in features.
    pub const ENABLED: &[&str] = &["ga4", "livewire"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all features and return the shared slice registry.
///
/// The GA4 slice is wired with a probe that watches the registry for the
/// [`Livewire`] marker, so registering the marker later (even after requests
/// started being served) enables the soft-navigation block on the next render.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &AppConfig) -> Result<Arc<SliceRegistry>, Box<dyn std::error::Error>> {
    let registry = Arc::new(SliceRegistry::default());

    // GA4
    let probe = RegistryProbe::watching::<Livewire>(Arc::clone(&registry));
    registry.register(features::ga4::init(&config.ga4, Box::new(probe))?);

    Ok(registry)
}

/// Render the GA4 tracking snippet, or an empty string.
///
/// Mirrors the degrade-to-empty policy of the renderer: an unregistered GA4
/// slice behaves like an unconfigured one. Never fails, so layouts can call
/// it unconditionally.
#[must_use]
pub fn snippet(registry: &SliceRegistry) -> String {
    registry.with_slice(|ga4: &Ga4| ga4.render()).unwrap_or_default()
}
