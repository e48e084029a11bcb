// src/config/settings.rs

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::from_reader;
use thiserror::Error;

use crate::models::objective::{DEFAULT_TARGET_RANGE, DEFAULT_TARGET_SPEED};
use crate::models::projectile::{DEFAULT_DT, GRAVITY};
use crate::simulation::load_parameters::PARAMETER_SECTION;
use crate::simulation::result::DEFAULT_RESULT_FILE;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("設定ファイル {path:?} を開けません: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイル {path:?} の YAML が不正です: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("設定値 {field} = {value} は不正です（{requirement}）")]
    Invalid {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

/// 評価の定数（目標、刻み幅、重力、出力先）
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationSettings {
    pub target_range: f64,         // 目標着弾距離 (m)
    pub target_speed: f64,         // 目標初速 (m/s)
    pub dt: f64,                   // 積分刻み幅 (s)
    pub gravity: f64,              // 鉛直方向の重力加速度 (m/s²)
    pub result_file: PathBuf,      // コストの出力先
    pub parameter_section: String, // 打ち出しパラメータのセクション名
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        EvaluationSettings {
            target_range: DEFAULT_TARGET_RANGE,
            target_speed: DEFAULT_TARGET_SPEED,
            dt: DEFAULT_DT,
            gravity: GRAVITY,
            result_file: PathBuf::from(DEFAULT_RESULT_FILE),
            parameter_section: PARAMETER_SECTION.to_string(),
        }
    }
}

impl EvaluationSettings {
    /// 設定ファイルの読み込み
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: EvaluationSettings =
            from_reader(file).map_err(|source| SettingsError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        tracing::debug!(?settings, "評価設定を読み込みました");
        Ok(settings)
    }

    /// 値の検証
    ///
    /// 重力が負でないと軌道が地面に戻らず、積分が終わらない。
    pub fn validate(&self) -> Result<(), SettingsError> {
        check("target_range", self.target_range, self.target_range.is_finite(), "有限値")?;
        check("target_speed", self.target_speed, self.target_speed.is_finite(), "有限値")?;
        check("dt", self.dt, self.dt.is_finite() && self.dt > 0.0, "正の有限値")?;
        check(
            "gravity",
            self.gravity,
            self.gravity.is_finite() && self.gravity < 0.0,
            "負の有限値",
        )?;
        Ok(())
    }
}

fn check(
    field: &'static str,
    value: f64,
    ok: bool,
    requirement: &'static str,
) -> Result<(), SettingsError> {
    if ok {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            value,
            requirement,
        })
    }
}
