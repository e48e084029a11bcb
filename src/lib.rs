// src/lib.rs

pub mod config;
pub mod logging;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{ConfigError, ConfigStore, EvaluationSettings};
pub use models::{score, simulate, Cost, TrajectoryInputs, TrajectoryResult};
pub use simulation::{evaluate, evaluate_and_record, EvaluationError, ParameterSource};
