// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("積分刻み幅は正の有限値でなければなりません（dt = {0}）")]
    NonPositiveStep(f64),
}
