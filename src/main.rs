// src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cannonsim::config::{ConfigStore, EvaluationSettings};
use cannonsim::logging;
use cannonsim::simulation::{
    evaluate_and_record, FileResultSink, LaunchParameters, ParameterSource,
};

/// 弾道の着弾点と初速からコストを計算し、結果ファイルに書き出す
#[derive(Parser, Debug)]
#[command(name = "cannonsim")]
#[command(version)]
struct Args {
    /// 打ち出しパラメータを読むパラメータファイル（[parameters] セクション）
    #[arg(short, long, conflicts_with_all = ["v0", "phi"])]
    config: Option<PathBuf>,

    /// パラメータファイルのセクション名（設定ファイルの値より優先）
    #[arg(long, requires = "config")]
    section: Option<String>,

    /// 評価設定の YAML ファイル
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// 初速 (m/s)
    #[arg(long, requires = "phi", allow_negative_numbers = true)]
    v0: Option<f64>,

    /// 仰角 (rad)
    #[arg(long, requires = "v0", allow_negative_numbers = true)]
    phi: Option<f64>,

    /// 結果ファイル（設定ファイルの値より優先）
    #[arg(short, long)]
    result_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    // 評価設定の読み込み
    let mut settings = match &args.settings {
        Some(path) => EvaluationSettings::load(path)?,
        None => EvaluationSettings::default(),
    };
    if let Some(section) = args.section {
        settings.parameter_section = section;
    }
    if let Some(result_file) = args.result_file {
        settings.result_file = result_file;
    }

    // 打ち出しパラメータの取得元
    let source = match (&args.config, args.v0, args.phi) {
        (Some(path), _, _) => ParameterSource::Store {
            store: ConfigStore::load(path)?,
            section: settings.parameter_section.clone(),
        },
        (None, Some(v0), Some(phi)) => ParameterSource::Constants(LaunchParameters { v0, phi }),
        _ => ParameterSource::default(),
    };

    let mut sink = FileResultSink::new(settings.result_file.clone());
    evaluate_and_record(&source, &settings, &mut sink)
        .with_context(|| format!("評価に失敗しました（結果ファイル: {:?}）", sink.path()))?;

    Ok(())
}
