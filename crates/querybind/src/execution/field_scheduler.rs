use crate::document::OperationKind;
use crate::execution::ExecutionFault;
use crate::execution::ExecutionMonitor;
use crate::execution::ExecutionOutcome;
use crate::execution::FieldStatus;
use crate::execution::MonitorState;
use crate::execution::ResolvedVariables;
use crate::execution::ResolverRegistry;
use crate::execution::collected_field::CollectedField;
use crate::execution::field_executor::FieldExecutor;
use crate::plan::QueryPlan;
use crate::response_path::ResponsePath;
use futures::FutureExt;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

type FieldResult = Result<serde_json::Value, ExecutionFault>;

/// Executes the top-level fields of a plan's operation.
///
/// Mutations, and every operation in debug mode, run their top-level fields
/// one after another: each field (and everything beneath it) completes
/// before the next one starts, and a fault stops the fields after it from
/// starting. Other operations run every top-level field concurrently.
///
/// Either way, one [`ExecutionMonitor`] guards the batch. Once it reports
/// done, no further field starts. Fields that finished by then keep their
/// result; fields still running are recorded as [`FieldStatus::Cancelled`].
/// Those tasks are left to finish on their own and their results are
/// discarded.
///
/// Top-level selections sharing a response key run as one field.
#[derive(Clone, Debug)]
pub struct FieldScheduler {
    debug_mode: bool,
    resolvers: Arc<ResolverRegistry>,
    timeout: Option<Duration>,
}
impl FieldScheduler {
    pub fn new(resolvers: Arc<ResolverRegistry>) -> Self {
        Self {
            debug_mode: false,
            resolvers,
            timeout: None,
        }
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_sequential_for(&self, plan: &QueryPlan) -> bool {
        self.debug_mode || plan.operation_part().kind() == OperationKind::Mutation
    }

    pub async fn execute(
        &self,
        plan: &QueryPlan,
        variables: Arc<ResolvedVariables>,
        root_value: serde_json::Value,
        cancellation_token: &CancellationToken,
    ) -> ExecutionOutcome {
        let monitor = ExecutionMonitor::new(cancellation_token, self.timeout);
        let executor = FieldExecutor {
            cancellation_token: monitor.token(),
            document: plan.shared_document(),
            resolvers: self.resolvers.clone(),
            sequential: self.is_sequential_for(plan),
            variables,
        };
        let root_type_name = plan.operation_part().root_type().unwrap_or_default().to_string();
        let root_fields = plan.root_selection_set()
            .map(|root_set| CollectedField::collect(
                &executor.document,
                executor.document.executable_fields(root_set),
            ))
            .unwrap_or_default();

        tracing::debug!(
            fields = root_fields.len(),
            sequential = executor.sequential,
            timeout = ?self.timeout,
            "executing top-level fields",
        );

        let mut batch = TopLevelBatch {
            executor,
            faults: vec![],
            results: vec![None; root_fields.len()],
            root_fields,
            root_type_name,
            root_value: Arc::new(root_value),
            statuses: vec![],
        };
        batch.statuses = vec![FieldStatus::Pending; batch.root_fields.len()];

        let interruption = if batch.executor.sequential {
            batch.run_sequential(&monitor).await
        } else {
            batch.run_concurrent(&monitor).await
        };
        if let Some(state) = interruption {
            tracing::warn!(?state, "top-level field execution interrupted");
            for status in batch.statuses.iter_mut() {
                if *status == FieldStatus::Running {
                    *status = FieldStatus::Cancelled;
                }
            }
        }
        drop(monitor);

        batch.into_outcome(interruption)
    }
}

struct TopLevelBatch {
    executor: FieldExecutor,
    faults: Vec<ExecutionFault>,
    results: Vec<Option<serde_json::Value>>,
    root_fields: Vec<CollectedField>,
    root_type_name: String,
    root_value: Arc<serde_json::Value>,
    statuses: Vec<FieldStatus>,
}
impl TopLevelBatch {
    async fn run_sequential(&mut self, monitor: &ExecutionMonitor) -> Option<MonitorState> {
        for idx in 0..self.root_fields.len() {
            if let Some(state) = monitor.state() {
                return Some(state);
            }
            let mut task = self.spawn_field(idx);
            let interrupted = tokio::select! {
                biased;
                state = monitor.done() => Some(state),
                joined = &mut task => {
                    self.record(idx, joined);
                    None
                },
            };
            if let Some(state) = interrupted {
                tokio::task::yield_now().await;
                if task.is_finished() {
                    self.record(idx, task.await);
                }
                return Some(state);
            }
            if self.statuses[idx] == FieldStatus::Faulted {
                tracing::debug!(field = idx, "stopping sequential execution after a fault");
                return None;
            }
        }
        None
    }

    async fn run_concurrent(&mut self, monitor: &ExecutionMonitor) -> Option<MonitorState> {
        if let Some(state) = monitor.state() {
            return Some(state);
        }
        let mut running = FuturesUnordered::new();
        for idx in 0..self.root_fields.len() {
            let task = self.spawn_field(idx);
            running.push(async move { (idx, task.await) });
        }

        let state = loop {
            tokio::select! {
                biased;
                state = monitor.done() => break state,
                next = running.next() => match next {
                    Some((idx, joined)) => self.record(idx, joined),
                    None => return None,
                },
            }
        };

        // Fields that finished alongside the interruption still count.
        tokio::task::yield_now().await;
        while let Some(Some((idx, joined))) = running.next().now_or_never() {
            self.record(idx, joined);
        }
        Some(state)
    }

    fn spawn_field(&mut self, idx: usize) -> JoinHandle<FieldResult> {
        self.statuses[idx] = FieldStatus::Running;
        let executor = self.executor.clone();
        let collected = self.root_fields[idx].clone();
        let root_type_name = self.root_type_name.to_string();
        let root_value = self.root_value.clone();
        tokio::spawn(async move {
            let path = ResponsePath::root().child(collected.response_key.as_str());
            executor.execute_field(&collected, &root_type_name, &root_value, path).await
        })
    }

    fn record(&mut self, idx: usize, joined: Result<FieldResult, JoinError>) {
        match joined {
            Ok(Ok(value)) => {
                self.statuses[idx] = FieldStatus::Complete;
                self.results[idx] = Some(value);
            },
            Ok(Err(fault)) => {
                self.statuses[idx] = FieldStatus::Faulted;
                self.faults.push(fault);
            },
            Err(join_err) => {
                let response_key = self.root_fields[idx].response_key.clone();
                self.statuses[idx] = FieldStatus::Faulted;
                self.faults.push(ExecutionFault::new(
                    format!("{}.{response_key}", self.root_type_name),
                    ResponsePath::root().child(response_key),
                    join_err,
                ));
            },
        }
    }

    fn into_outcome(self, interruption: Option<MonitorState>) -> ExecutionOutcome {
        let statuses: Vec<(String, FieldStatus)> = self.root_fields.iter()
            .zip(self.statuses.iter())
            .map(|(collected, status)| (collected.response_key.clone(), *status))
            .collect();

        let data = if !statuses.is_empty() && !self.statuses.iter().any(FieldStatus::is_complete) {
            None
        } else {
            let data: serde_json::Map<String, serde_json::Value> = self.root_fields.iter()
                .zip(self.results)
                .filter_map(|(collected, result)| Some((collected.response_key.clone(), result?)))
                .collect();
            Some(data)
        };

        ExecutionOutcome {
            data,
            faults: self.faults,
            interruption,
            statuses,
        }
    }
}
