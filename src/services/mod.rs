// サービス層 - 設定と出力
// 各サービスは特定の責任を持ち、エンジン層からトレイト経由で利用される

pub mod config;
pub mod monitoring;

// 公開API
pub use config::{DefaultScenarioConfig, PRESET_NAMES};
pub use monitoring::{ConsoleScenarioReporter, MemoryScenarioReporter, NoOpScenarioReporter};
