/// Lifecycle of one top-level field execution.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldStatus {
    /// Never started.
    Pending,
    Running,
    Complete,
    Faulted,
    /// Was still running when execution was cancelled or timed out.
    Cancelled,
}
impl FieldStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
