// src/config/mod.rs

pub mod error;
pub mod settings;
pub mod store;
pub mod table;

pub use error::ConfigError;
pub use settings::{EvaluationSettings, SettingsError};
pub use store::{get_double, ConfigSlot, ConfigStore};
pub use table::{ConfigTable, GLOBAL_SECTION};
