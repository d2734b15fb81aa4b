// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{SandboxError, SandboxResult};
pub use traits::{handoff_delay, pipeline_interval, scaled_time, ScenarioConfig, ScenarioReporter};
pub use types::{ScenarioKind, ScenarioOutcome, ScenarioState};
