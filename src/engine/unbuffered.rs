// Unbuffered Handoff - 容量0チャンネルでの1回の受け渡し

use crate::{
    core::{handoff_delay, SandboxError, SandboxResult, ScenarioConfig, ScenarioReporter},
    sync::{rendezvous, DoneGuard, Sender, WaitGroup},
};
use std::sync::Arc;
use std::time::Duration;

/// 受け渡す値
pub const HANDOFF_VALUE: i64 = 1;

/// 送信側の完了通知
pub const COMPLETED_SENDING: &str = "completed sending";

/// 送信側タスク: 値を渡した後に眠り、完了を通知する
pub fn spawn_handoff_sender<R>(
    tx: Sender<i64>,
    delay: Duration,
    reporter: Arc<R>,
    done: DoneGuard,
) -> tokio::task::JoinHandle<SandboxResult<()>>
where
    R: ScenarioReporter + 'static,
{
    tokio::spawn(async move {
        let _done = done;
        // 受信側が取り出すまでここで止まる
        tx.send(HANDOFF_VALUE).await?;
        tokio::time::sleep(delay).await;
        reporter.report_line(COMPLETED_SENDING).await;
        Ok(())
    })
}

/// シナリオ本体
///
/// 受信した値を出力し、送信側タスクの完了を待ってから戻る。
pub async fn run_unbuffered<C, R>(config: &C, reporter: Arc<R>) -> SandboxResult<i64>
where
    C: ScenarioConfig + ?Sized,
    R: ScenarioReporter + 'static,
{
    let delay = handoff_delay(config)?;

    let (tx, mut rx) = rendezvous::<i64>();
    let wg = WaitGroup::new();
    wg.add(1);

    let sender = spawn_handoff_sender(tx, delay, Arc::clone(&reporter), wg.done_guard());

    let value = rx
        .recv()
        .await
        .ok_or_else(|| SandboxError::channel_closed("recv"))?;
    reporter.report_line(&value.to_string()).await;

    wg.wait().await;
    sender.await??;

    Ok(value)
}
