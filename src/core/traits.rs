// シナリオ実行のトレイト定義
// 設定と出力先を抽象化し、テストではモックや記録用実装に差し替える

use super::error::{SandboxError, SandboxResult};
use super::types::{ScenarioKind, ScenarioState};
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// シナリオのタイミングと容量を抽象化するトレイト
#[automock]
pub trait ScenarioConfig: Send + Sync {
    /// 1時間単位の長さ
    fn time_unit(&self) -> Duration;

    /// 受け渡し後に送信側が眠る時間単位数
    fn handoff_delay_units(&self) -> u32;

    /// バッファ付きチャンネルの容量
    fn pipeline_capacity(&self) -> usize;

    /// パイプラインで送信する要素数
    fn pipeline_items(&self) -> usize;

    /// パイプラインの送信間隔（時間単位数）
    fn pipeline_interval_units(&self) -> u32;
}

/// 時間単位に係数を掛ける
///
/// `Duration` の乗算はオーバーフローでパニックするため、検査付きで計算する。
pub fn scaled_time(unit: Duration, units: u32, field: &str) -> SandboxResult<Duration> {
    unit.checked_mul(units)
        .ok_or_else(|| SandboxError::validation(field, "待機時間がオーバーフローします"))
}

/// 受け渡し後に送信側が眠る時間
///
/// 受信側の出力が送信側の完了通知より先に出るには0より大きい必要がある。
pub fn handoff_delay<C>(config: &C) -> SandboxResult<Duration>
where
    C: ScenarioConfig + ?Sized,
{
    let delay = scaled_time(
        config.time_unit(),
        config.handoff_delay_units(),
        "handoff_delay_units",
    )?;
    if delay.is_zero() {
        return Err(SandboxError::validation(
            "handoff_delay_units",
            "受け渡し後の待機時間は0より大きくしてください",
        ));
    }
    Ok(delay)
}

/// パイプラインの送信間隔
pub fn pipeline_interval<C>(config: &C) -> SandboxResult<Duration>
where
    C: ScenarioConfig + ?Sized,
{
    scaled_time(
        config.time_unit(),
        config.pipeline_interval_units(),
        "pipeline_interval_units",
    )
}

/// シナリオ出力の抽象化トレイト
#[automock]
#[async_trait]
pub trait ScenarioReporter: Send + Sync {
    /// シナリオが出力する1行
    async fn report_line(&self, line: &str);

    /// ライフサイクル状態の遷移
    async fn report_state(&self, kind: ScenarioKind, state: ScenarioState);
}
