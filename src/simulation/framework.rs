// src/simulation/framework.rs

use crate::config::EvaluationSettings;
use crate::models::{simulate_with_gravity, Cost, Targets, TrajectoryInputs, TrajectoryResult};
use crate::simulation::error::EvaluationError;
use crate::simulation::load_parameters::{LaunchParameters, ParameterSource};
use crate::simulation::result::ResultSink;

/// 1回の評価の記録
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub parameters: LaunchParameters,
    pub result: TrajectoryResult,
    pub cost: Cost,
}

/// 打ち出しパラメータの取得からコスト計算までを実行する
///
/// # 引数
/// - `source`: 打ち出しパラメータの取得元
/// - `settings`: 目標、刻み幅、重力
///
/// # 戻り値
/// - 評価結果
/// - 設定の検証やパラメータの取得に失敗した場合はそのエラー
pub fn evaluate(
    source: &ParameterSource<'_>,
    settings: &EvaluationSettings,
) -> Result<Evaluation, EvaluationError> {
    settings.validate()?;

    let parameters = source.resolve()?;
    let inputs = TrajectoryInputs::with_step(parameters.v0, parameters.phi, settings.dt)?;
    let result = simulate_with_gravity(&inputs, settings.gravity);

    let targets = Targets {
        range: settings.target_range,
        speed: settings.target_speed,
    };
    let cost = targets.score(&result, parameters.v0);

    tracing::info!(
        phi = parameters.phi,
        v0 = parameters.v0,
        landed_at = result.x,
        difference = targets.miss_distance(&result),
        %cost,
        "弾を発射しました"
    );

    Ok(Evaluation {
        parameters,
        result,
        cost,
    })
}

/// 評価してコストを記録する
pub fn evaluate_and_record(
    source: &ParameterSource<'_>,
    settings: &EvaluationSettings,
    sink: &mut dyn ResultSink,
) -> Result<Evaluation, EvaluationError> {
    let evaluation = evaluate(source, settings)?;
    sink.record(evaluation.cost)?;
    Ok(evaluation)
}
