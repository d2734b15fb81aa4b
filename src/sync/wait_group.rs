// 待機グループ - 起動したタスクの完了数を数え、0になるまで待機する

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    count: AtomicUsize,
    notify: Notify,
}

/// 完了待ちカウンター
#[derive(Debug, Clone, Default)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

impl WaitGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// 待機対象のタスク数を加算
    pub fn add(&self, n: usize) {
        self.inner.count.fetch_add(n, Ordering::AcqRel);
    }

    /// タスク1つの完了を通知
    ///
    /// カウンターは0未満にはならない。
    pub fn done(&self) {
        let previous = self
            .inner
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                count.checked_sub(1)
            });

        if previous == Ok(1) {
            self.inner.notify.notify_waiters();
        }
    }

    /// 破棄時に `done` を呼ぶガードを取得
    pub fn done_guard(&self) -> DoneGuard {
        DoneGuard {
            group: self.clone(),
        }
    }

    /// 残りのタスク数
    pub fn pending(&self) -> usize {
        self.inner.count.load(Ordering::Acquire)
    }

    /// カウンターが0になるまで待機
    pub async fn wait(&self) {
        loop {
            // 判定前に登録しておき、判定と通知の間の取りこぼしを防ぐ
            let notified = self.inner.notify.notified();
            if self.pending() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// スコープ終了時に完了を通知するガード
#[derive(Debug)]
pub struct DoneGuard {
    group: WaitGroup,
}

impl Drop for DoneGuard {
    fn drop(&mut self) {
        self.group.done();
    }
}
