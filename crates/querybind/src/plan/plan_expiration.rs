use std::time::Duration;

/// How long a cached [`QueryPlan`](crate::plan::QueryPlan) stays cached.
/// An entry has exactly one policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlanExpiration {
    /// Expire a fixed duration after insertion.
    AbsoluteFromNow(Duration),

    /// Expire once the entry goes unread for the given duration.
    Sliding(Duration),
}
impl PlanExpiration {
    pub fn duration(&self) -> Duration {
        match self {
            Self::AbsoluteFromNow(duration) | Self::Sliding(duration) => *duration,
        }
    }
}
