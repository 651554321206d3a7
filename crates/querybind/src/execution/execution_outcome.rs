use crate::execution::ExecutionFault;
use crate::execution::FieldStatus;
use crate::execution::MonitorState;
use crate::messages::GraphMessage;

/// What executing an operation's top-level fields produced.
#[derive(Debug)]
pub struct ExecutionOutcome {
    pub(crate) data: Option<serde_json::Map<String, serde_json::Value>>,
    pub(crate) faults: Vec<ExecutionFault>,
    pub(crate) interruption: Option<MonitorState>,
    pub(crate) statuses: Vec<(String, FieldStatus)>,
}
impl ExecutionOutcome {
    /// Values of the fields that completed, in declaration order. `None`
    /// when there were fields to execute and none of them completed.
    pub fn data(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.data.as_ref()
    }

    pub fn faults(&self) -> &[ExecutionFault] {
        &self.faults
    }

    pub(crate) fn take_faults(&mut self) -> Vec<ExecutionFault> {
        std::mem::take(&mut self.faults)
    }

    pub fn interruption(&self) -> Option<MonitorState> {
        self.interruption
    }

    /// Every top-level field's response key with its final status.
    pub fn statuses(&self) -> &[(String, FieldStatus)] {
        &self.statuses
    }

    pub fn status_of(&self, response_key: &str) -> Option<FieldStatus> {
        self.statuses.iter()
            .find(|(key, _)| key == response_key)
            .map(|(_, status)| *status)
    }

    /// The user-facing messages for every fault plus the interruption (if
    /// any).
    pub fn messages(&self) -> Vec<GraphMessage> {
        self.faults.iter()
            .map(ExecutionFault::to_message)
            .chain(self.interruption.iter().map(MonitorState::to_message))
            .collect()
    }
}
