// src/simulation/load_parameters.rs

use crate::config::{ConfigError, ConfigStore};
use crate::simulation::optimization_parameters::{OPTIMIZATION_PHI, OPTIMIZATION_V0};

/// 打ち出しパラメータが置かれるセクション
pub const PARAMETER_SECTION: &str = "parameters";

/// 初速のキー
pub const V0_KEY: &str = "optimization_v0";

/// 仰角のキー
pub const PHI_KEY: &str = "optimization_phi";

/// 最適化の対象となる打ち出しパラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    pub v0: f64,  // 初速 (m/s)
    pub phi: f64, // 仰角 (rad)
}

/// ビルド時に埋め込まれたパラメータ
pub const COMPILED_PARAMETERS: LaunchParameters = LaunchParameters {
    v0: OPTIMIZATION_V0,
    phi: OPTIMIZATION_PHI,
};

/// 打ち出しパラメータの取得元
#[derive(Debug, Clone)]
pub enum ParameterSource<'a> {
    /// 定数（ビルド時の値やコマンドライン引数）
    Constants(LaunchParameters),
    /// 読み込み済みのパラメータファイル
    Store {
        store: &'a ConfigStore,
        section: String,
    },
}

impl<'a> ParameterSource<'a> {
    /// `PARAMETER_SECTION` から読むパラメータファイルの取得元
    pub fn store(store: &'a ConfigStore) -> Self {
        ParameterSource::Store {
            store,
            section: PARAMETER_SECTION.to_string(),
        }
    }

    /// 打ち出しパラメータの読み込み
    ///
    /// # 戻り値
    /// - 初速と仰角
    /// - パラメータファイルの参照に失敗した場合は `ConfigError` をそのまま返す
    pub fn resolve(&self) -> Result<LaunchParameters, ConfigError> {
        match self {
            ParameterSource::Constants(parameters) => Ok(*parameters),
            ParameterSource::Store { store, section } => {
                let v0 = store.get_double(V0_KEY, section)?;
                let phi = store.get_double(PHI_KEY, section)?;
                tracing::debug!(v0, phi, section = %section, "打ち出しパラメータを読み込みました");
                Ok(LaunchParameters { v0, phi })
            }
        }
    }
}

impl Default for ParameterSource<'_> {
    fn default() -> Self {
        ParameterSource::Constants(COMPILED_PARAMETERS)
    }
}
