// src/simulation/mod.rs

pub mod error;
pub mod framework;
pub mod load_parameters;
pub mod optimization_parameters;
pub mod result;

pub use error::{EvaluationError, SinkError};
pub use framework::{evaluate, evaluate_and_record, Evaluation};
pub use load_parameters::{LaunchParameters, ParameterSource, COMPILED_PARAMETERS};
pub use result::{ChannelResultSink, FileResultSink, ResultSink};
