use crate::error_codes;
use crate::execution::ExecutionMonitor;
use crate::execution::MonitorState;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test(start_paused = true)]
async fn deadline_times_out_and_cancels_resolvers() {
    let caller = CancellationToken::new();
    let monitor = ExecutionMonitor::new(&caller, Some(Duration::from_millis(25)));
    let resolver_token = monitor.token();
    assert_eq!(monitor.state(), None);

    assert_eq!(monitor.done().await, MonitorState::TimedOut);
    assert!(resolver_token.is_cancelled());
    assert!(!caller.is_cancelled());
    assert_eq!(monitor.state(), Some(MonitorState::TimedOut));
}

#[tokio::test]
async fn caller_cancellation_is_reported() {
    let caller = CancellationToken::new();
    let monitor = ExecutionMonitor::new(&caller, Some(Duration::from_secs(60)));
    caller.cancel();

    assert_eq!(monitor.done().await, MonitorState::Cancelled);
    assert!(monitor.is_done());
    assert!(monitor.token().is_cancelled());
}

#[tokio::test]
async fn dropping_the_monitor_releases_resolvers() {
    let caller = CancellationToken::new();
    let monitor = ExecutionMonitor::new(&caller, None);
    let resolver_token = monitor.token();
    assert!(!resolver_token.is_cancelled());

    drop(monitor);
    assert!(resolver_token.is_cancelled());
    assert!(!caller.is_cancelled());
}

#[test]
fn interruptions_become_critical_messages() {
    let timed_out = MonitorState::TimedOut.to_message();
    assert_eq!(timed_out.code(), error_codes::REQUEST_TIMEOUT);
    assert!(timed_out.is_critical());

    let cancelled = MonitorState::Cancelled.to_message();
    assert_eq!(cancelled.code(), error_codes::OPERATION_CANCELED);
    assert!(cancelled.is_critical());
}

#[tokio::test]
async fn timeout_past_the_clock_range_never_fires() {
    let caller = CancellationToken::new();
    let monitor = ExecutionMonitor::new(&caller, Some(Duration::MAX));
    assert_eq!(monitor.state(), None);

    caller.cancel();
    assert_eq!(monitor.done().await, MonitorState::Cancelled);
}
