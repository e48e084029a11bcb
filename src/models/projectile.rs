// src/models/projectile.rs

use crate::math::{euler_step, MathError, TrajectoryState};

/// 重力加速度 (m/s²)。下向きが負
pub const GRAVITY: f64 = -9.81;

/// 既定の積分刻み幅 (s)
pub const DEFAULT_DT: f64 = 1e-3;

/// 弾道シミュレーションの入力
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryInputs {
    pub v0: f64,  // 初速 (m/s)
    pub phi: f64, // 仰角 (rad)
    dt: f64,      // 積分刻み幅 (s)。常に正
}

impl TrajectoryInputs {
    /// 既定の刻み幅 `DEFAULT_DT` を使う入力
    pub fn new(v0: f64, phi: f64) -> Self {
        TrajectoryInputs {
            v0,
            phi,
            dt: DEFAULT_DT,
        }
    }

    /// 刻み幅を指定した入力
    ///
    /// # 戻り値
    /// - `dt` が正の有限値でなければ `MathError::NonPositiveStep`
    pub fn with_step(v0: f64, phi: f64, dt: f64) -> Result<Self, MathError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(MathError::NonPositiveStep(dt));
        }
        Ok(TrajectoryInputs { v0, phi, dt })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }
}

/// 着弾時点の結果
///
/// `x`, `vx`, `vy` は高度が初めて負になったステップの値。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryResult {
    pub x: f64,           // 着弾距離 (m)
    pub vx: f64,          // 水平速度 (m/s)
    pub vy: f64,          // 鉛直速度 (m/s)
    pub t: f64,           // 飛行時間 (s)
    pub steps: u64,       // 積分ステップ数
    pub path_length: f64, // 累積飛行距離 (m)
}

impl From<TrajectoryState> for TrajectoryResult {
    fn from(state: TrajectoryState) -> Self {
        TrajectoryResult {
            x: state.x,
            vx: state.vx,
            vy: state.vy,
            t: state.t,
            steps: 0,
            path_length: state.path_length,
        }
    }
}

/// 一定重力 `GRAVITY` の下で弾道を地面到達まで積分する
pub fn simulate(inputs: &TrajectoryInputs) -> TrajectoryResult {
    simulate_with_gravity(inputs, GRAVITY)
}

/// 任意の重力で弾道を地面到達まで積分する純粋な関数
///
/// 高度が負になった最初のステップで終了する。反復回数の上限は設けないため、
/// `gravity` が負でないと終了しない入力がある。
///
/// # 引数
/// - `inputs`: 初速、仰角、刻み幅
/// - `gravity`: 鉛直方向の加速度（下向きが負）
///
/// # 戻り値
/// - 着弾時点の結果
pub fn simulate_with_gravity(inputs: &TrajectoryInputs, gravity: f64) -> TrajectoryResult {
    let mut state = euler_step(&TrajectoryState::launch(inputs.v0, inputs.phi), gravity, inputs.dt);
    let mut steps: u64 = 1;

    while state.y >= 0.0 {
        state = euler_step(&state, gravity, inputs.dt);
        steps += 1;
    }

    tracing::debug!(
        v0 = inputs.v0,
        phi = inputs.phi,
        x = state.x,
        t = state.t,
        steps,
        "着弾"
    );

    TrajectoryResult {
        steps,
        ..TrajectoryResult::from(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_with_step_rejects_non_positive() {
        assert_eq!(
            TrajectoryInputs::with_step(100.0, 0.4, 0.0),
            Err(MathError::NonPositiveStep(0.0))
        );
        assert!(TrajectoryInputs::with_step(100.0, 0.4, -1e-3).is_err());
        assert!(TrajectoryInputs::with_step(100.0, 0.4, f64::NAN).is_err());
        assert_eq!(TrajectoryInputs::with_step(100.0, 0.4, 1e-2).unwrap().dt(), 1e-2);
    }

    #[test]
    fn test_default_step() {
        assert_eq!(TrajectoryInputs::new(1.0, 0.0).dt(), 1e-3);
    }

    #[test]
    fn test_zero_speed_lands_at_origin() {
        for phi in [0.0, 0.4, FRAC_PI_2, -1.0, 3.0] {
            let result = simulate(&TrajectoryInputs::new(0.0, phi));
            assert_eq!(result.x, 0.0, "phi {}", phi);
            assert_eq!(result.vx, 0.0);
        }
    }

    #[test]
    fn test_vertical_launch_returns_to_launch_point() {
        let result = simulate(&TrajectoryInputs::new(100.0, FRAC_PI_2));

        assert!(result.x.abs() < 1e-6);
        // 飛行時間はおよそ 2 * v0 / g
        assert!((result.t - 2.0 * 100.0 / 9.81).abs() < 0.01);
        assert!(result.vy < 0.0);
    }

    /// 仰角0では1ステップ目に高度0のまま鉛直速度が負になり、2ステップ目で着弾する
    #[test]
    fn test_horizontal_launch_terminates() {
        let result = simulate(&TrajectoryInputs::new(100.0, 0.0));

        assert_eq!(result.steps, 2);
        assert!((result.x - 0.2).abs() < 1e-12);
        assert!(result.vy < 0.0);
    }

    #[test]
    fn test_negative_speed_still_runs() {
        let result = simulate(&TrajectoryInputs::new(-10.0, FRAC_PI_4));
        // 下向きに打ち出されるため1ステップで地面より下になる
        assert_eq!(result.steps, 1);
        assert!(result.x < 0.0);
    }

    #[test]
    fn test_range_close_to_vacuum_formula() {
        let v0 = 100.0;
        let result = simulate(&TrajectoryInputs::new(v0, FRAC_PI_4));
        let analytic = v0 * v0 / 9.81;

        assert!((result.x - analytic).abs() < 1.0, "x = {}", result.x);
        assert!((result.vx - v0 * FRAC_PI_4.cos()).abs() < 1e-12);
        assert!(result.path_length > result.x);
    }

    #[test]
    fn test_simulate_is_repeatable() {
        let inputs = TrajectoryInputs::new(120.0, 0.4);
        let first = simulate(&inputs);
        let second = simulate(&inputs);

        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.vx.to_bits(), second.vx.to_bits());
        assert_eq!(first.vy.to_bits(), second.vy.to_bits());
        assert_eq!(first.steps, second.steps);
    }

    #[test]
    fn test_default_gravity_matches_explicit() {
        let inputs = TrajectoryInputs::new(80.0, 0.7);
        assert_eq!(simulate(&inputs), simulate_with_gravity(&inputs, -9.81));
    }

    #[test]
    fn test_stronger_gravity_shortens_range() {
        let inputs = TrajectoryInputs::new(80.0, 0.7);
        let earth = simulate_with_gravity(&inputs, GRAVITY);
        let heavy = simulate_with_gravity(&inputs, 2.0 * GRAVITY);
        assert!(heavy.x < earth.x);
    }

    #[test]
    fn test_matches_hand_written_loop() {
        let (v0, phi, dt) = (120.0_f64, 0.4_f64, 1e-3_f64);
        let vx = v0 * phi.cos();
        let mut vy = v0 * phi.sin();
        let (mut x, mut y) = (0.0_f64, 0.0_f64);
        loop {
            let dx = vx * dt;
            let dy = vy * dt;
            x += dx;
            y += dy;
            vy += -9.81 * dt;
            if y < 0.0 {
                break;
            }
        }

        let result = simulate(&TrajectoryInputs::new(v0, phi));
        assert_eq!(result.x.to_bits(), x.to_bits());
        assert_eq!(result.vx.to_bits(), vx.to_bits());
        assert_eq!(result.vy.to_bits(), vy.to_bits());
    }
}
