// src/math/mod.rs

pub mod integrator;
pub mod error;

pub use integrator::euler_step;
pub use integrator::TrajectoryState;
pub use error::MathError;
