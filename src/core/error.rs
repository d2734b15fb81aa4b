// サンドボックス用のカスタムエラー型定義
// シナリオ本体は回復可能なエラーを持たないが、設定読み込みやタスク管理の失敗を型で表す

use std::path::PathBuf;
use thiserror::Error;

/// サンドボックス固有のエラー型
#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("チャンネルエラー: {operation} - 相手側が既に閉じられています")]
    ChannelClosed { operation: String },

    #[error("タスクエラー: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("設定ファイルエラー: {} - {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("バリデーションエラー: {field} - {reason}")]
    Validation { field: String, reason: String },
}

impl SandboxError {
    /// チャンネル切断エラーの作成
    pub fn channel_closed(operation: impl Into<String>) -> Self {
        Self::ChannelClosed {
            operation: operation.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// 設定ファイルエラーの作成
    pub fn config_file(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::ConfigFile {
            path: path.into(),
            source,
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// エラーが回復可能かどうかを判定
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ChannelClosed { .. } => true,
            Self::Task { .. } => false,
            Self::Configuration { .. } | Self::ConfigFile { .. } => false,
            Self::Validation { .. } => false,
        }
    }
}

impl From<tokio::task::JoinError> for SandboxError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::task(source)
    }
}

/// サンドボックス処理の結果型
pub type SandboxResult<T> = Result<T, SandboxError>;
