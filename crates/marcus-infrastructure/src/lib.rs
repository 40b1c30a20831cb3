//! File-backed services: paths, configuration, secrets and preferences.

pub mod config_service;
pub mod paths;
pub mod preference_repository;
pub mod secret_service;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::{MarcusPaths, PathError};
pub use crate::preference_repository::TomlPreferenceRepository;
pub use crate::secret_service::SecretServiceImpl;
