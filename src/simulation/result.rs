// src/simulation/result.rs

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use crate::models::Cost;
use crate::simulation::error::SinkError;

/// 既定の結果ファイル名
pub const DEFAULT_RESULT_FILE: &str = "result.txt";

/// 評価1回ごとのコストの受け取り先
pub trait ResultSink {
    /// コストを記録する。前回の記録は置き換えられる
    fn record(&mut self, cost: Cost) -> Result<(), SinkError>;
}

/// コストの10進表記だけを内容とするファイル
#[derive(Debug, Clone)]
pub struct FileResultSink {
    path: PathBuf,
}

impl FileResultSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileResultSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for FileResultSink {
    fn record(&mut self, cost: Cost) -> Result<(), SinkError> {
        let write_error = |source: std::io::Error| SinkError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&self.path).map_err(write_error)?;
        file.write_all(cost.to_string().as_bytes())
            .map_err(write_error)?;
        file.sync_all().map_err(write_error)?;

        tracing::debug!(path = ?self.path, %cost, "コストを書き込みました");
        Ok(())
    }
}

/// チャネルでコストを送る受け取り先
#[derive(Debug, Clone)]
pub struct ChannelResultSink {
    sender: Sender<Cost>,
}

impl ChannelResultSink {
    pub fn new(sender: Sender<Cost>) -> Self {
        ChannelResultSink { sender }
    }
}

impl ResultSink for ChannelResultSink {
    fn record(&mut self, cost: Cost) -> Result<(), SinkError> {
        self.sender.send(cost).map_err(|_| SinkError::Disconnected)
    }
}
