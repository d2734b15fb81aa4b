// 高レベル公開API
// ScenarioRunnerを簡単に使用できるようにするための便利な関数

use super::ScenarioRunner;
use crate::{
    core::{SandboxResult, ScenarioConfig, ScenarioKind},
    services::{ConsoleScenarioReporter, DefaultScenarioConfig, NoOpScenarioReporter},
};

/// 引数なしのエントリーポイント
///
/// デフォルト設定・コンソール出力でデフォルトのシナリオ（no-buffer）を実行する。
pub async fn goroutine() -> SandboxResult<()> {
    create_console_runner(DefaultScenarioConfig::default(), false)
        .run(ScenarioKind::default())
        .await?;
    Ok(())
}

/// コンソール出力の実行器を作成
pub fn create_console_runner<C>(config: C, verbose: bool) -> ScenarioRunner<C, ConsoleScenarioReporter>
where
    C: ScenarioConfig,
{
    let reporter = if verbose {
        ConsoleScenarioReporter::verbose()
    } else {
        ConsoleScenarioReporter::new()
    };
    ScenarioRunner::new(config, reporter)
}

/// 静音版の実行器を作成（テスト・バックグラウンド用）
pub fn create_quiet_runner<C>(config: C) -> ScenarioRunner<C, NoOpScenarioReporter>
where
    C: ScenarioConfig,
{
    ScenarioRunner::new(config, NoOpScenarioReporter::new())
}
