// src/simulation/error.rs

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{ConfigError, SettingsError};
use crate::math::MathError;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("結果ファイル {path:?} に書き込めません: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("結果の受け取り側が閉じています")]
    Disconnected,
}

/// 1回の評価で起こり得るエラー
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}
