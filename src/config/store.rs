// src/config/store.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::error::ConfigError;
use crate::config::table::ConfigTable;

/// プロセス全体で共有するパラメータの格納先
static PARAMETERS: ConfigSlot = ConfigSlot::new();

/// 読み込み済みのパラメータファイル
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    table: ConfigTable,
}

impl ConfigStore {
    /// パラメータファイルを読み込んで解析する（プロセス全体には登録しない）
    ///
    /// # 引数
    /// - `path`: パラメータファイルのパス
    ///
    /// # 戻り値
    /// - 読み込んだストア
    /// - 読めなければ `Read`、解釈できない行があれば `Syntax`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let table = ConfigTable::parse(&text).map_err(|e| ConfigError::Syntax {
            path: path.clone(),
            line: e.line,
            content: e.content,
        })?;
        Ok(ConfigStore { path, table })
    }

    /// パラメータファイルを読み込み、プロセス全体のストアとして登録する
    ///
    /// 2回目の呼び出しは `DoubleLoad` で失敗し、最初の内容はそのまま残る。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<&'static ConfigStore, ConfigError> {
        PARAMETERS.load(path)
    }

    /// 登録済みのストア（未登録なら `None`）
    pub fn global() -> Option<&'static ConfigStore> {
        PARAMETERS.get()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &ConfigTable {
        &self.table
    }

    pub fn get_str(&self, key: &str, section: &str) -> Result<&str, ConfigError> {
        self.table.get_str(key, section)
    }

    /// 値を `f64` として取得する（空のセクション名はグローバルセクション）
    pub fn get_double(&self, key: &str, section: &str) -> Result<f64, ConfigError> {
        self.table.get_double(key, section)
    }
}

/// 一度だけ書き込めるストアの置き場所
#[derive(Debug, Default)]
pub struct ConfigSlot {
    cell: OnceLock<ConfigStore>,
}

impl ConfigSlot {
    pub const fn new() -> Self {
        ConfigSlot {
            cell: OnceLock::new(),
        }
    }

    /// ファイルを読み込んでこの置き場所に登録する
    ///
    /// # 戻り値
    /// - 登録したストアへの参照
    /// - すでに登録済みなら `DoubleLoad`（ファイルは読まない）
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<&ConfigStore, ConfigError> {
        let path = path.as_ref();
        if let Some(existing) = self.cell.get() {
            return Err(double_load(path, existing));
        }

        let store = ConfigStore::open(path)?;
        let mut installed_here = false;
        let installed = self.cell.get_or_init(|| {
            installed_here = true;
            store
        });
        if !installed_here {
            // 読み込み中に別の呼び出しが先に登録した
            return Err(double_load(path, installed));
        }

        tracing::info!(path = ?installed.path(), "パラメータを読み込みました");
        Ok(installed)
    }

    pub fn get(&self) -> Option<&ConfigStore> {
        self.cell.get()
    }

    /// 登録済みストアから値を `f64` として取得する
    ///
    /// 未登録なら `NotInitialized`。
    pub fn get_double(&self, key: &str, section: &str) -> Result<f64, ConfigError> {
        self.get()
            .ok_or_else(|| ConfigError::NotInitialized {
                key: key.to_string(),
            })?
            .get_double(key, section)
    }
}

fn double_load(path: &Path, existing: &ConfigStore) -> ConfigError {
    ConfigError::DoubleLoad {
        path: path.to_path_buf(),
        loaded_from: existing.path().to_path_buf(),
    }
}

/// プロセス全体のストアから値を `f64` として取得する
///
/// # 引数
/// - `key`: キー名
/// - `section`: セクション名（空文字列はグローバルセクション）
///
/// # 戻り値
/// - 解析した値
/// - `ConfigStore::load` 前なら `NotInitialized`
pub fn get_double(key: &str, section: &str) -> Result<f64, ConfigError> {
    PARAMETERS.get_double(key, section)
}
