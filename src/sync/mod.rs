// 同期プリミティブ層 - チャンネルと待機グループ
// 各シナリオの呼び出しごとに新しく作成される

pub mod channel;
pub mod wait_group;

// 公開API
pub use channel::{channel, rendezvous, Receiver, Sender};
pub use wait_group::{DoneGuard, WaitGroup};
