// src/models/objective.rs

use std::fmt;

use crate::models::projectile::TrajectoryResult;

/// 目標着弾距離 (m)
pub const DEFAULT_TARGET_RANGE: f64 = 500.0;

/// 目標初速 (m/s)。市販の砲の初速
pub const DEFAULT_TARGET_SPEED: f64 = 100.0;

/// 初速のずれに掛ける重み
pub const SPEED_PENALTY_WEIGHT: f64 = 100.0;

/// 最小化の対象となるコスト
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(pub f64);

impl Cost {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Cost {
    // f64 の Display は往復変換で同じ値に戻る最短の10進表記
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// コストを計算する純粋関数
///
/// # 引数
/// - `result`: 弾道シミュレーションの結果
/// - `target_range`: 目標着弾距離
/// - `target_speed`: 目標初速
/// - `actual_v0`: 実際の初速
///
/// # 戻り値
/// - (着弾距離 - 目標)² + 100 × (初速 - 目標初速)²
pub fn score(
    result: &TrajectoryResult,
    target_range: f64,
    target_speed: f64,
    actual_v0: f64,
) -> Cost {
    let d = result.x - target_range;
    let d_v0 = actual_v0 - target_speed;
    Cost(d * d + d_v0 * d_v0 * SPEED_PENALTY_WEIGHT)
}

/// 着弾距離と初速の目標
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Targets {
    pub range: f64, // 目標着弾距離 (m)
    pub speed: f64, // 目標初速 (m/s)
}

impl Default for Targets {
    fn default() -> Self {
        Targets {
            range: DEFAULT_TARGET_RANGE,
            speed: DEFAULT_TARGET_SPEED,
        }
    }
}

impl Targets {
    pub fn score(&self, result: &TrajectoryResult, actual_v0: f64) -> Cost {
        score(result, self.range, self.speed, actual_v0)
    }

    /// 目標着弾点からのずれ (m)
    pub fn miss_distance(&self, result: &TrajectoryResult) -> f64 {
        result.x - self.range
    }
}
