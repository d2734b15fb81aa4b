use crate::{
    core::{ScenarioKind, ScenarioOutcome, ScenarioState},
    engine::create_console_runner,
    services::DefaultScenarioConfig,
};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// goroutineコマンドの引数をまとめた設定
#[derive(Debug, Clone)]
pub struct GoroutineOptions {
    pub scenario: ScenarioKind,
    pub preset: String,
    pub config: Option<PathBuf>,
    pub time_unit_ms: Option<u64>,
    pub watchdog_ms: Option<u64>,
    pub verbose: bool,
}

impl Default for GoroutineOptions {
    fn default() -> Self {
        Self {
            scenario: ScenarioKind::default(),
            preset: "default".to_string(),
            config: None,
            time_unit_ms: None,
            watchdog_ms: None,
            verbose: false,
        }
    }
}

/// 引数からシナリオ設定を組み立てる
///
/// 設定ファイルが指定されていればプリセットより優先し、`time_unit_ms` は最後に上書きする。
pub fn build_config(options: &GoroutineOptions) -> Result<DefaultScenarioConfig> {
    let mut config = match &options.config {
        Some(path) => DefaultScenarioConfig::from_json_file(path)?,
        None => DefaultScenarioConfig::preset(&options.preset)?,
    };

    if let Some(time_unit_ms) = options.time_unit_ms {
        config = config.with_time_unit(Duration::from_millis(time_unit_ms));
        config.validate()?;
    }

    Ok(config)
}

/// goroutineコマンドを実行
pub async fn execute_goroutine(options: GoroutineOptions) -> Result<ScenarioOutcome> {
    let config = build_config(&options)?;
    let runner = create_console_runner(config, options.verbose);

    let Some(watchdog_ms) = options.watchdog_ms else {
        // ウォッチドッグなしの deadlock はここで永久に待つ
        return Ok(runner.run(options.scenario).await?);
    };

    let outcome = runner
        .run_with_watchdog(options.scenario, Duration::from_millis(watchdog_ms))
        .await?;

    if outcome.state == ScenarioState::BlockedForever {
        anyhow::bail!(
            "シナリオ {} が {}ms 以内に終了しませんでした ({})",
            outcome.kind,
            watchdog_ms,
            outcome.state
        );
    }

    Ok(outcome)
}
