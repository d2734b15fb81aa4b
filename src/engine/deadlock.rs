// Mutual Block - 2本の容量0チャンネルで互いの受信を待ち続ける
//
// 相手タスクは A への送信で、呼び出し側は B への送信で止まり、どちらも2つ目の
// 操作に到達しない。このシナリオ自体はタイムアウトを持たない。

use crate::{
    core::{SandboxError, SandboxResult, ScenarioReporter},
    sync::{rendezvous, Receiver, Sender},
};
use std::sync::Arc;

/// 相手タスクが A に送る値
pub const PARTNER_VALUE: i64 = 1;

/// 呼び出し側が B に送る値
pub const INITIATOR_VALUE: i64 = 2;

/// 両方の値を受け渡せた場合にだけ出力される行
pub fn combined_line(from_partner: i64, from_initiator: i64) -> String {
    format!("{from_partner} {from_initiator}")
}

/// 相手タスク: A に送信してから B を受信する
pub fn spawn_partner(
    a_tx: Sender<i64>,
    mut b_rx: Receiver<i64>,
) -> tokio::task::JoinHandle<SandboxResult<i64>> {
    tokio::spawn(async move {
        a_tx.send(PARTNER_VALUE).await?;
        b_rx.recv()
            .await
            .ok_or_else(|| SandboxError::channel_closed("recv"))
    })
}

/// シナリオ本体 - 永久にブロックする
pub async fn run_deadlock<R>(reporter: Arc<R>) -> SandboxResult<()>
where
    R: ScenarioReporter + 'static,
{
    let (a_tx, mut a_rx) = rendezvous::<i64>();
    let (b_tx, b_rx) = rendezvous::<i64>();

    let partner = spawn_partner(a_tx, b_rx);

    // 相手は A の受信待ちで B を受信しないため、ここから先へ進まない
    b_tx.send(INITIATOR_VALUE).await?;
    let from_partner = a_rx
        .recv()
        .await
        .ok_or_else(|| SandboxError::channel_closed("recv"))?;

    reporter
        .report_line(&combined_line(from_partner, INITIATOR_VALUE))
        .await;
    partner.await??;

    Ok(())
}
