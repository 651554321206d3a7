use crate::execution::ExecutionFault;

/// How a pipeline run failed unexpectedly.
///
/// Expected failures (bad documents, invalid variables, denied access,
/// timeouts) are not errors: they are recorded as messages on the
/// [`QueryExecutionContext`](crate::pipeline::QueryExecutionContext) and
/// end up in the response.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{} fields failed to resolve", .faults.len())]
    AggregateFaults {
        faults: Vec<ExecutionFault>,
    },

    /// The one field that faulted, unwrapped.
    #[error(transparent)]
    Fault(#[from] ExecutionFault),
}
impl PipelineError {
    /// `None` for no faults, the fault itself for one, an aggregate for more.
    pub fn from_faults(mut faults: Vec<ExecutionFault>) -> Option<Self> {
        match faults.len() {
            0 => None,
            1 => faults.pop().map(Self::Fault),
            _ => Some(Self::AggregateFaults { faults }),
        }
    }

    pub fn faults(&self) -> Vec<&ExecutionFault> {
        match self {
            Self::AggregateFaults { faults } => faults.iter().collect(),
            Self::Fault(fault) => vec![fault],
        }
    }
}
