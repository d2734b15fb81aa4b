// エンジン層 - 3つのシナリオと実行器
// 同期プリミティブとサービス層を組み合わせてシナリオを実行する

pub mod api;
pub mod buffered;
pub mod deadlock;
pub mod runner;
pub mod unbuffered;

// 公開API
pub use api::{create_console_runner, create_quiet_runner, goroutine};
pub use buffered::{run_buffered, PIPELINE_VALUE, RECEIVED, SENT};
pub use deadlock::{combined_line, run_deadlock, INITIATOR_VALUE, PARTNER_VALUE};
pub use runner::ScenarioRunner;
pub use unbuffered::{run_unbuffered, COMPLETED_SENDING, HANDOFF_VALUE};
