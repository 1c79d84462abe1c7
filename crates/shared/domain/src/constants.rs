//! Workspace-wide constants.

/// Base URL of the gtag bootstrap script served by Google Tag Manager.
pub const GTAG_SCRIPT_URL: &str = "https://www.googletagmanager.com/gtag/js";

/// DOM event dispatched by the Livewire-style client shell after a soft navigation.
pub const LIVEWIRE_NAVIGATED_EVENT: &str = "livewire:navigated";
