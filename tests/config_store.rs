// tests/config_store.rs
//
// プロセス全体のストアは一度しか登録できないため、このファイルのテストは1つにまとめる。

use std::io::Write;

use cannonsim::config::{self, ConfigError, ConfigStore};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_process_wide_store_lifecycle() {
    cannonsim::logging::init_test();

    // 読み込み前の参照
    assert!(ConfigStore::global().is_none());
    match config::get_double("optimization_v0", "parameters") {
        Err(ConfigError::NotInitialized { key }) => assert_eq!(key, "optimization_v0"),
        other => panic!("Expected NotInitialized, got {:?}", other),
    }

    // 読めないファイルでは登録されない
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ConfigStore::load(dir.path().join("missing.ini")),
        Err(ConfigError::Read { .. })
    ));
    assert!(ConfigStore::global().is_none());

    // 1回目の読み込み
    let first = write_config("scale = 2\n[parameters]\noptimization_v0 = 120\noptimization_phi = 0.4\n");
    let store = ConfigStore::load(first.path()).unwrap();
    assert_eq!(store.get_double("optimization_v0", "parameters").unwrap(), 120.0);
    assert_eq!(config::get_double("optimization_phi", "parameters").unwrap(), 0.4);
    assert_eq!(config::get_double("scale", "").unwrap(), 2.0);

    // 2回目の読み込みは失敗し、最初の内容が残る
    let second = write_config("[parameters]\noptimization_v0 = 999\n");
    match ConfigStore::load(second.path()) {
        Err(ConfigError::DoubleLoad { path, loaded_from }) => {
            assert_eq!(path, second.path());
            assert_eq!(loaded_from, first.path());
        }
        other => panic!("Expected DoubleLoad, got {:?}", other),
    }
    assert_eq!(config::get_double("optimization_v0", "parameters").unwrap(), 120.0);

    let global = ConfigStore::global().unwrap();
    assert!(std::ptr::eq(global, store));

    // 存在しないセクションとキー
    match config::get_double("k", "s") {
        Err(ConfigError::MissingParameter { key, section }) => {
            assert_eq!(key, "k");
            assert_eq!(section, "s");
        }
        other => panic!("Expected MissingParameter, got {:?}", other),
    }
    assert!(matches!(
        config::get_double("optimization_theta", "parameters"),
        Err(ConfigError::MissingParameter { .. })
    ));
}
