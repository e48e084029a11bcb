// src/models/mod.rs

pub mod objective;
pub mod projectile;

pub use objective::{score, Cost, Targets};
pub use projectile::{simulate, simulate_with_gravity, TrajectoryInputs, TrajectoryResult};
