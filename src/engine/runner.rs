// ScenarioRunner - シナリオの選択、状態遷移の報告、ウォッチドッグ

use super::{buffered::run_buffered, deadlock::run_deadlock, unbuffered::run_unbuffered};
use crate::core::{
    SandboxResult, ScenarioConfig, ScenarioKind, ScenarioOutcome, ScenarioReporter, ScenarioState,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// シナリオ実行器
///
/// 設定と出力先はコンストラクタで注入する。チャンネルや待機グループは
/// 呼び出しごとに新しく作られるため、同じ実行器を何度使っても状態は残らない。
pub struct ScenarioRunner<C, R> {
    config: C,
    reporter: Arc<R>,
}

impl<C, R> ScenarioRunner<C, R>
where
    C: ScenarioConfig,
    R: ScenarioReporter + 'static,
{
    pub fn new(config: C, reporter: R) -> Self {
        Self::with_shared_reporter(config, Arc::new(reporter))
    }

    /// 既に共有されている出力先で作成（テストで出力を検査する場合など）
    pub fn with_shared_reporter(config: C, reporter: Arc<R>) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &Arc<R> {
        &self.reporter
    }

    /// シナリオを最後まで実行
    ///
    /// `Deadlock` を渡すと戻らない。
    pub async fn run(&self, kind: ScenarioKind) -> SandboxResult<ScenarioOutcome> {
        let start = Instant::now();
        let mut state = ScenarioState::Created;
        self.reporter.report_state(kind, state).await;
        self.transition(kind, &mut state, ScenarioState::Running).await;

        self.execute(kind).await?;

        self.transition(kind, &mut state, ScenarioState::Completed)
            .await;
        Ok(Self::outcome(kind, state, start))
    }

    /// 上限時間付きでシナリオを実行
    ///
    /// 上限までに終わらなければ `BlockedForever` として報告する。シナリオ内部の
    /// 待機はタイムアウトしないため、上限はシナリオの想定所要時間より長く取ること。
    pub async fn run_with_watchdog(
        &self,
        kind: ScenarioKind,
        limit: Duration,
    ) -> SandboxResult<ScenarioOutcome> {
        let start = Instant::now();
        let mut state = ScenarioState::Created;
        self.reporter.report_state(kind, state).await;
        self.transition(kind, &mut state, ScenarioState::Running).await;

        let next = match tokio::time::timeout(limit, self.execute(kind)).await {
            Ok(result) => {
                result?;
                ScenarioState::Completed
            }
            Err(_) => ScenarioState::BlockedForever,
        };

        self.transition(kind, &mut state, next).await;
        Ok(Self::outcome(kind, state, start))
    }

    async fn execute(&self, kind: ScenarioKind) -> SandboxResult<()> {
        match kind {
            ScenarioKind::NoBuffer => {
                run_unbuffered(&self.config, Arc::clone(&self.reporter)).await?;
            }
            ScenarioKind::Buffer => {
                run_buffered(&self.config, Arc::clone(&self.reporter)).await?;
            }
            ScenarioKind::Deadlock => {
                run_deadlock(Arc::clone(&self.reporter)).await?;
            }
        }
        Ok(())
    }

    async fn transition(&self, kind: ScenarioKind, state: &mut ScenarioState, next: ScenarioState) {
        debug_assert!(state.can_transition_to(next), "{state} -> {next}");
        *state = next;
        self.reporter.report_state(kind, next).await;
    }

    fn outcome(kind: ScenarioKind, state: ScenarioState, start: Instant) -> ScenarioOutcome {
        ScenarioOutcome {
            kind,
            state,
            elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }
}
