// シナリオの公開APIを通した統合テスト
use concurrency_sandbox::{
    engine::{combined_line, COMPLETED_SENDING, INITIATOR_VALUE, PARTNER_VALUE, RECEIVED, SENT},
    sync::{channel, rendezvous, WaitGroup},
    DefaultScenarioConfig, MemoryScenarioReporter, ScenarioKind, ScenarioRunner, ScenarioState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

fn runner_with_memory() -> (
    ScenarioRunner<DefaultScenarioConfig, MemoryScenarioReporter>,
    Arc<MemoryScenarioReporter>,
) {
    let reporter = Arc::new(MemoryScenarioReporter::new());
    let runner =
        ScenarioRunner::with_shared_reporter(DefaultScenarioConfig::fast(), Arc::clone(&reporter));
    (runner, reporter)
}

#[tokio::test]
async fn test_unbuffered_value_is_printed_before_completion_notice() {
    for _ in 0..5 {
        let (runner, reporter) = runner_with_memory();

        let outcome = runner.run(ScenarioKind::NoBuffer).await.unwrap();

        assert_eq!(outcome.state, ScenarioState::Completed);
        let value_at = reporter.position("1").unwrap();
        let completed_at = reporter.position(COMPLETED_SENDING).unwrap();
        assert!(value_at < completed_at);
    }
}

#[tokio::test]
async fn test_buffered_pipeline_receives_in_send_order_and_terminates() {
    let (runner, reporter) = runner_with_memory();

    let outcome = timeout(Duration::from_secs(5), runner.run(ScenarioKind::Buffer))
        .await
        .expect("buffered scenario must terminate after close")
        .unwrap();

    assert!(outcome.is_completed());
    let values: Vec<String> = reporter
        .lines()
        .into_iter()
        .filter(|line| line != SENT && line != RECEIVED)
        .collect();
    assert_eq!(values, vec!["1", "1", "1"]);
}

#[tokio::test]
async fn test_buffered_pipeline_sent_equals_received() {
    let (runner, reporter) = runner_with_memory();

    runner.run(ScenarioKind::Buffer).await.unwrap();

    assert_eq!(reporter.count(SENT), 3);
    assert_eq!(reporter.count(RECEIVED), 3);
}

#[tokio::test]
async fn test_deadlock_never_reaches_final_line() {
    let (runner, reporter) = runner_with_memory();

    let outcome = runner
        .run_with_watchdog(ScenarioKind::Deadlock, Duration::from_millis(300))
        .await
        .unwrap();

    assert_eq!(outcome.state, ScenarioState::BlockedForever);
    assert_eq!(reporter.position(&combined_line(PARTNER_VALUE, INITIATOR_VALUE)), None);
}

#[tokio::test]
async fn test_repeated_invocations_do_not_leak_state() {
    let (runner, reporter) = runner_with_memory();

    runner.run(ScenarioKind::NoBuffer).await.unwrap();
    let first_handoff = reporter.lines();
    reporter.clear();
    runner.run(ScenarioKind::NoBuffer).await.unwrap();
    assert_eq!(reporter.lines(), first_handoff);
    reporter.clear();

    runner.run(ScenarioKind::Buffer).await.unwrap();
    let first_counts = (reporter.count(SENT), reporter.count(RECEIVED));
    reporter.clear();
    runner.run(ScenarioKind::Buffer).await.unwrap();
    assert_eq!((reporter.count(SENT), reporter.count(RECEIVED)), first_counts);
}

#[tokio::test]
async fn test_zero_capacity_never_buffers_a_value() {
    let (tx, mut rx) = rendezvous::<i64>();

    // 受信側がいない間は送信が完了しない
    assert!(timeout(Duration::from_millis(100), tx.send(1)).await.is_err());

    let sender = tokio::spawn(async move { tx.send(42).await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!sender.is_finished());

    assert_eq!(rx.recv().await, Some(42));
    timeout(Duration::from_secs(1), sender)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_wait_group_with_buffered_channel() {
    let (tx, mut rx) = channel::<usize>(2);
    let wg = WaitGroup::new();
    wg.add(2);

    for worker in 0..2 {
        let tx = tx.clone();
        let done = wg.done_guard();
        tokio::spawn(async move {
            let _done = done;
            tx.send(worker).await.unwrap();
        });
    }
    tx.close();

    let mut received = rx.drain().await;
    timeout(Duration::from_secs(1), wg.wait()).await.unwrap();
    received.sort();
    assert_eq!(received, vec![0, 1]);
}

#[tokio::test]
async fn test_entry_point_runs_default_scenario_with_full_delay() {
    let result = timeout(Duration::from_secs(15), concurrency_sandbox::goroutine()).await;
    result.unwrap().unwrap();
}
