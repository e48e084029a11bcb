// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// ログ出力の初期化
///
/// `RUST_LOG` でレベルを指定する（既定は info）。
/// 例: `RUST_LOG=cannonsim=debug`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// テスト用のログ出力の初期化（何度呼んでもよい）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
