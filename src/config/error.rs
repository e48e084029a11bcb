// src/config/error.rs

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("パラメータファイル {path:?} を読み込めません: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("パラメータファイル {path:?} の {line} 行目を解釈できません: {content:?}")]
    Syntax {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("パラメータを二重に読み込もうとしました ({path:?}、読み込み済み: {loaded_from:?})")]
    DoubleLoad { path: PathBuf, loaded_from: PathBuf },

    #[error("パラメータ \"{key}\" をパラメータの読み込み前に参照しました")]
    NotInitialized { key: String },

    #[error("パラメータ \"{key}\" がセクション \"{section}\" に存在しません")]
    MissingParameter { key: String, section: String },

    #[error("パラメータ \"{key}\" (セクション \"{section}\") の値 {value:?} は数値ではありません")]
    Parse {
        key: String,
        section: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
