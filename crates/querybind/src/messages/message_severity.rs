/// How severe a [`GraphMessage`](crate::messages::GraphMessage) is.
///
/// Ordered from least to most severe so that the worst message of a
/// collection can be found with `max()`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageSeverity {
    Trace,
    Debug,
    Info,
    Warning,
    Critical,
}
impl MessageSeverity {
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}
