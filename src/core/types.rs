// シナリオ関連の型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 実行するシナリオの種類
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    /// 容量0のチャンネルでのランデブー受け渡し
    #[default]
    NoBuffer,
    /// 容量付きチャンネルでのパイプライン
    Buffer,
    /// 2本の容量0チャンネルによる相互ブロック
    Deadlock,
}

impl ScenarioKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoBuffer => "no-buffer",
            Self::Buffer => "buffer",
            Self::Deadlock => "deadlock",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// シナリオのライフサイクル状態
///
/// `Created → Running → {Completed | BlockedForever}` の順にのみ遷移する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioState {
    Created,
    Running,
    Completed,
    BlockedForever,
}

impl ScenarioState {
    /// 許可された遷移かどうか
    pub fn can_transition_to(&self, next: ScenarioState) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::Running)
                | (Self::Running, Self::Completed)
                | (Self::Running, Self::BlockedForever)
        )
    }
}

impl fmt::Display for ScenarioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::BlockedForever => "blocked-forever",
        };
        f.write_str(label)
    }
}

/// シナリオ実行結果のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub kind: ScenarioKind,
    pub state: ScenarioState,
    pub elapsed_ms: u64,
}

impl ScenarioOutcome {
    pub fn is_completed(&self) -> bool {
        self.state == ScenarioState::Completed
    }
}
