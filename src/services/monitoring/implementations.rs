// シナリオ出力の具象実装

use crate::core::{ScenarioKind, ScenarioReporter, ScenarioState};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// コンソール出力による報告実装
///
/// シナリオの出力行は標準出力へそのまま書き、状態遷移は `verbose` のときだけ
/// タイムスタンプ付きで標準エラーへ書く。
#[derive(Debug, Default, Clone)]
pub struct ConsoleScenarioReporter {
    verbose: bool,
}

impl ConsoleScenarioReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl ScenarioReporter for ConsoleScenarioReporter {
    async fn report_line(&self, line: &str) {
        println!("{line}");
    }

    async fn report_state(&self, kind: ScenarioKind, state: ScenarioState) {
        if !self.verbose {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        match state {
            ScenarioState::BlockedForever => {
                eprintln!("[{timestamp}] ⛔ {kind}: {state}");
            }
            ScenarioState::Completed => {
                eprintln!("[{timestamp}] ✅ {kind}: {state}");
            }
            _ => {
                eprintln!("[{timestamp}] 🚀 {kind}: {state}");
            }
        }
    }
}

/// 何もしない報告実装
#[derive(Debug, Default, Clone)]
pub struct NoOpScenarioReporter;

impl NoOpScenarioReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScenarioReporter for NoOpScenarioReporter {
    async fn report_line(&self, _line: &str) {
        // 何もしない
    }

    async fn report_state(&self, _kind: ScenarioKind, _state: ScenarioState) {
        // 何もしない
    }
}

/// メモリ内に記録する報告実装（テスト用）
///
/// 複数タスクから呼ばれても呼び出し順に記録される。
#[derive(Debug, Default, Clone)]
pub struct MemoryScenarioReporter {
    lines: Arc<Mutex<Vec<String>>>,
    states: Arc<Mutex<Vec<(ScenarioKind, ScenarioState)>>>,
}

impl MemoryScenarioReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録された出力行を取得
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 記録された状態遷移を取得
    pub fn states(&self) -> Vec<(ScenarioKind, ScenarioState)> {
        self.states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 指定した行の出現回数
    pub fn count(&self, line: &str) -> usize {
        self.lines().iter().filter(|l| l.as_str() == line).count()
    }

    /// 指定した行が最初に現れた位置
    pub fn position(&self, line: &str) -> Option<usize> {
        self.lines().iter().position(|l| l == line)
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
        self.states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

#[async_trait]
impl ScenarioReporter for MemoryScenarioReporter {
    async fn report_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }

    async fn report_state(&self, kind: ScenarioKind, state: ScenarioState) {
        self.states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((kind, state));
    }
}
