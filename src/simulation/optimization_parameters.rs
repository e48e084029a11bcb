// src/simulation/optimization_parameters.rs
//
// 定数モードで使う打ち出しパラメータ。
// 最適化ドライバはこのファイルを書き換えてから再ビルドする。

pub const OPTIMIZATION_V0: f64 = 120.0;
pub const OPTIMIZATION_PHI: f64 = 0.4;
