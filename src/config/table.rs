// src/config/table.rs

use std::collections::HashMap;

use crate::config::error::ConfigError;

/// 見出しより前の行が属するグローバルセクションの名前
pub const GLOBAL_SECTION: &str = "";

/// パラメータテキストの構文エラー（行番号は1始まり）
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub line: usize,
    pub content: String,
}

/// セクション名 → キー → 生の文字列値 の表
///
/// 構築後は変更しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigTable {
    sections: HashMap<String, HashMap<String, String>>,
}

impl ConfigTable {
    /// `[section]` 見出しと `key = value` 行からなるテキストを解析する
    ///
    /// # 引数
    /// - `text`: パラメータファイルの内容
    ///
    /// # 戻り値
    /// - 解析済みの表
    /// - 解釈できない行があれば、その行の `SyntaxError`
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current = GLOBAL_SECTION.to_string();
        sections.insert(current.clone(), HashMap::new());

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            let syntax_error = || SyntaxError {
                line: index + 1,
                content: raw_line.to_string(),
            };

            // セクション見出し
            if let Some(rest) = line.strip_prefix('[') {
                let name = rest.strip_suffix(']').ok_or_else(syntax_error)?.trim();
                if name.is_empty() {
                    return Err(syntax_error());
                }
                current = name.to_string();
                sections.entry(current.clone()).or_default();
                continue;
            }

            // key = value
            let (key, value) = line.split_once('=').ok_or_else(syntax_error)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(syntax_error());
            }
            let previous = sections
                .entry(current.clone())
                .or_default()
                .insert(key.to_string(), value.trim().to_string());
            if previous.is_some() {
                tracing::warn!(
                    section = %current,
                    key,
                    line = index + 1,
                    "キーが重複しています。後の値で上書きします"
                );
            }
        }

        Ok(ConfigTable { sections })
    }

    /// 生の文字列値を取得する（空のセクション名はグローバルセクション）
    pub fn get(&self, key: &str, section: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// 生の文字列値を取得する。存在しなければ `MissingParameter`
    pub fn get_str(&self, key: &str, section: &str) -> Result<&str, ConfigError> {
        self.get(key, section)
            .ok_or_else(|| ConfigError::MissingParameter {
                key: key.to_string(),
                section: section.to_string(),
            })
    }

    /// 値を `f64` として取得する
    ///
    /// # 引数
    /// - `key`: キー名
    /// - `section`: セクション名（空文字列はグローバルセクション）
    ///
    /// # 戻り値
    /// - 解析した値
    /// - セクションまたはキーが無ければ `MissingParameter`、数値でなければ `Parse`
    pub fn get_double(&self, key: &str, section: &str) -> Result<f64, ConfigError> {
        let value = self.get_str(key, section)?;
        value.trim().parse::<f64>().map_err(|source| ConfigError::Parse {
            key: key.to_string(),
            section: section.to_string(),
            value: value.to_string(),
            source,
        })
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }
}
