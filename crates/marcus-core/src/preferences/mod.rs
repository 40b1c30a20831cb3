//! User preference domain module.
//!
//! - `model`: The persisted record (`Preferences`)
//! - `repository`: Storage interface (`PreferenceRepository`)

mod model;
mod repository;

pub use model::Preferences;
pub use repository::PreferenceRepository;
