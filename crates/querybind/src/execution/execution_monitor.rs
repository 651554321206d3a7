use crate::error_codes;
use crate::messages::GraphMessage;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tokio_util::sync::DropGuard;

/// Why an [`ExecutionMonitor`] reported done.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MonitorState {
    Cancelled,
    TimedOut,
}
impl MonitorState {
    pub fn to_message(&self) -> GraphMessage {
        match self {
            Self::Cancelled => GraphMessage::critical(
                error_codes::OPERATION_CANCELED,
                "The operation was cancelled before it completed",
            ),
            Self::TimedOut => GraphMessage::critical(
                error_codes::REQUEST_TIMEOUT,
                "The operation did not complete within the configured timeout",
            ),
        }
    }
}

/// Merges a caller's cancellation signal with a wall-clock deadline into one
/// "done" signal for a batch of field executions.
///
/// Resolvers observe [`ExecutionMonitor::token`], which is cancelled when
/// either source fires and, at the latest, when the monitor is dropped.
#[derive(Debug)]
pub struct ExecutionMonitor {
    deadline: Option<Instant>,
    _guard: DropGuard,
    timed_out: AtomicBool,
    token: CancellationToken,
}
impl ExecutionMonitor {
    pub fn new(caller_token: &CancellationToken, timeout: Option<Duration>) -> Self {
        let token = caller_token.child_token();
        Self {
            deadline: timeout.and_then(|timeout| Instant::now().checked_add(timeout)),
            _guard: token.clone().drop_guard(),
            timed_out: AtomicBool::new(false),
            token,
        }
    }

    /// Completes once the caller cancels or the deadline passes.
    pub async fn done(&self) -> MonitorState {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };
        tokio::select! {
            biased;
            _ = self.token.cancelled() => self.state().unwrap_or(MonitorState::Cancelled),
            _ = deadline => {
                self.timed_out.store(true, Ordering::SeqCst);
                self.token.cancel();
                MonitorState::TimedOut
            },
        }
    }

    pub fn is_done(&self) -> bool {
        self.state().is_some()
    }

    /// `None` while neither source has fired.
    pub fn state(&self) -> Option<MonitorState> {
        if self.timed_out.load(Ordering::SeqCst)
            || self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            Some(MonitorState::TimedOut)
        } else if self.token.is_cancelled() {
            Some(MonitorState::Cancelled)
        } else {
            None
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}
