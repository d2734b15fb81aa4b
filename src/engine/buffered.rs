// Buffered Pipeline - 容量付きチャンネルでの送信と、close までの受信ループ

use crate::{
    core::{pipeline_interval, SandboxResult, ScenarioConfig, ScenarioReporter},
    sync::{channel, DoneGuard, Sender, WaitGroup},
};
use std::sync::Arc;
use std::time::Duration;

/// パイプラインで送る値
pub const PIPELINE_VALUE: i64 = 1;

pub const SENT: &str = "sent";
pub const RECEIVED: &str = "received";

/// Producer: 指定回数送信した後にチャンネルを閉じる
pub fn spawn_pipeline_producer<R>(
    tx: Sender<i64>,
    items: usize,
    interval: Duration,
    reporter: Arc<R>,
    done: DoneGuard,
) -> tokio::task::JoinHandle<SandboxResult<()>>
where
    R: ScenarioReporter + 'static,
{
    tokio::spawn(async move {
        let _done = done;
        for _ in 0..items {
            tx.send(PIPELINE_VALUE).await?;
            reporter.report_line(SENT).await;
            tokio::time::sleep(interval).await;
        }
        // 受信ループの終了シグナル
        tx.close();
        Ok(())
    })
}

/// シナリオ本体
///
/// チャンネルが閉じられて空になるまで受信し、受け取った値を送信順で返す。
pub async fn run_buffered<C, R>(config: &C, reporter: Arc<R>) -> SandboxResult<Vec<i64>>
where
    C: ScenarioConfig + ?Sized,
    R: ScenarioReporter + 'static,
{
    let interval = pipeline_interval(config)?;

    let (tx, mut rx) = channel::<i64>(config.pipeline_capacity());
    let wg = WaitGroup::new();
    wg.add(1);

    let producer = spawn_pipeline_producer(
        tx,
        config.pipeline_items(),
        interval,
        Arc::clone(&reporter),
        wg.done_guard(),
    );

    let mut received = Vec::with_capacity(config.pipeline_items());
    while let Some(value) = rx.recv().await {
        reporter.report_line(&value.to_string()).await;
        reporter.report_line(RECEIVED).await;
        received.push(value);
    }

    wg.wait().await;
    producer.await??;

    Ok(received)
}
