//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it provides config loading, the live slice
//! registry, and output-safety helpers.
//!
//! ## Config loading
//! ```rust,no_run
//! use beacon_kernel::config::load_config;
//!
//! #[derive(Default, serde::Deserialize)]
//! struct AppConfig {
//!     port: u16,
//! }
//!
//! let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
//! ```

pub mod config;
pub mod registry;
pub mod security;

pub use beacon_domain as domain;
