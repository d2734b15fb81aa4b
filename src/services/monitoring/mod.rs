// 出力監視機能
// シナリオの出力行と状態遷移の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleScenarioReporter, MemoryScenarioReporter, NoOpScenarioReporter};
