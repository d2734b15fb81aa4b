// 容量指定チャンネル - 容量0(ランデブー)と容量N(バッファ付き)を同じ型で扱う
//
// tokio の mpsc は容量0を受け付けないため、容量0の場合は oneshot の受領通知で
// 受信側が値を取り出すまで送信を完了させない。

use crate::core::{SandboxError, SandboxResult};
use tokio::sync::{mpsc, oneshot};

struct Envelope<T> {
    value: T,
    // 容量0のときだけ受信完了を送信側に返す
    ack: Option<oneshot::Sender<()>>,
}

/// 送信側ハンドル
pub struct Sender<T> {
    tx: mpsc::Sender<Envelope<T>>,
    capacity: usize,
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            capacity: self.capacity,
        }
    }
}

/// 受信側ハンドル
pub struct Receiver<T> {
    rx: mpsc::Receiver<Envelope<T>>,
}

/// 指定容量のチャンネルを作成
///
/// `capacity == 0` の場合、`send` は受信側が値を受け取るまで完了しない。
pub fn channel<T: Send>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (Sender { tx, capacity }, Receiver { rx })
}

/// 容量0のランデブーチャンネルを作成
pub fn rendezvous<T: Send>() -> (Sender<T>, Receiver<T>) {
    channel(0)
}

impl<T: Send> Sender<T> {
    /// 値を送信
    ///
    /// バッファに空きがなければ待機する。容量0なら受信されるまで待機する。
    /// 受信側が既に破棄されている場合は `ChannelClosed` を返す。
    pub async fn send(&self, value: T) -> SandboxResult<()> {
        if self.capacity > 0 {
            return self
                .tx
                .send(Envelope { value, ack: None })
                .await
                .map_err(|_| SandboxError::channel_closed("send"));
        }

        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                value,
                ack: Some(ack_tx),
            })
            .await
            .map_err(|_| SandboxError::channel_closed("send"))?;

        // 受信側が値を取り出すまでブロック
        ack_rx
            .await
            .map_err(|_| SandboxError::channel_closed("send"))
    }

    /// このハンドルを閉じる
    ///
    /// 全ての送信ハンドルが閉じられると、受信側は残りを取り出した後に `None` を受け取る。
    pub fn close(self) {
        drop(self);
    }
}

impl<T: Send> Receiver<T> {
    /// 値を受信
    ///
    /// チャンネルが閉じられ、かつバッファが空になった場合は `None` を返す。
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            let Envelope { value, ack } = self.rx.recv().await?;
            if let Some(ack) = ack {
                // 送信がキャンセル済みなら受け渡しは成立していないので捨てる
                if ack.send(()).is_err() {
                    continue;
                }
            }
            return Some(value);
        }
    }

    /// 閉じられて空になるまで全ての値を取り出す
    pub async fn drain(&mut self) -> Vec<T> {
        let mut values = Vec::new();
        while let Some(value) = self.recv().await {
            values.push(value);
        }
        values
    }
}
