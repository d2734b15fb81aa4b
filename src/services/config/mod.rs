// 設定管理機能
// 時間単位、チャンネル容量、送信数などシナリオのパラメータ

pub mod implementations;

// 公開API
pub use implementations::{DefaultScenarioConfig, PRESET_NAMES};
