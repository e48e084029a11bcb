// src/math/integrator.rs

/// 2次元弾道の積分状態
///
/// 1回のシミュレーションごとに作られ、積分ループの中でだけ更新される。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryState {
    pub x: f64,           // 水平位置 (m)
    pub y: f64,           // 高度 (m)
    pub vx: f64,          // 水平速度 (m/s)
    pub vy: f64,          // 鉛直速度 (m/s)
    pub t: f64,           // 経過時間 (s)
    pub path_length: f64, // 累積飛行距離 (m)。コスト計算では使わない
}

impl TrajectoryState {
    /// 原点から初速 `v0`、仰角 `phi`（ラジアン）で打ち出した状態
    pub fn launch(v0: f64, phi: f64) -> Self {
        TrajectoryState {
            x: 0.0,
            y: 0.0,
            vx: v0 * phi.cos(),
            vy: v0 * phi.sin(),
            t: 0.0,
            path_length: 0.0,
        }
    }
}

/// 前進Euler法による1ステップ
///
/// 位置はステップ開始時の速度で進め、その後で鉛直速度に重力を加える。
///
/// # 引数
/// - `state`: 現在の状態
/// - `gravity`: 鉛直方向の加速度（下向きが負）
/// - `dt`: 時間ステップ
///
/// # 戻り値
/// - 1ステップ後の状態
pub fn euler_step(state: &TrajectoryState, gravity: f64, dt: f64) -> TrajectoryState {
    let dx = state.vx * dt;
    let dy = state.vy * dt;
    TrajectoryState {
        x: state.x + dx,
        y: state.y + dy,
        vx: state.vx,
        vy: state.vy + gravity * dt,
        t: state.t + dt,
        path_length: state.path_length + (dx * dx + dy * dy).sqrt(),
    }
}
