//! Domain layer for Marcus.
//!
//! Holds the session state machine, the analysis and debate models, the
//! localization tables, and the traits that the infrastructure and interaction
//! crates implement.

pub mod agent;
pub mod analysis;
pub mod config;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod secret;
pub mod session;

// Re-export common error type
pub use error::MarcusError;
