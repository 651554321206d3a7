use crate::messages::GraphMessage;
use crate::messages::MessageSeverity;
use parking_lot::Mutex;

/// Append-only, thread-safe list of [`GraphMessage`]s.
///
/// Authorization checks and field tasks run concurrently and all report into
/// the same collection, so appends go through a lock. Messages are never
/// removed once added.
#[derive(Debug, Default)]
pub struct MessageCollection {
    messages: Mutex<Vec<GraphMessage>>,
}
impl MessageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, message: GraphMessage) {
        self.messages.lock().push(message);
    }

    pub fn extend(&self, messages: impl IntoIterator<Item = GraphMessage>) {
        self.messages.lock().extend(messages);
    }

    pub fn has_critical(&self) -> bool {
        self.messages.lock().iter().any(GraphMessage::is_critical)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.messages.lock().iter().any(|msg| msg.code() == code)
    }

    /// The most severe level found in this collection (if any messages were
    /// recorded at all).
    pub fn max_severity(&self) -> Option<MessageSeverity> {
        self.messages.lock().iter().map(GraphMessage::severity).max()
    }

    /// A point-in-time copy of every message recorded so far, in the order
    /// they were added.
    pub fn snapshot(&self) -> Vec<GraphMessage> {
        self.messages.lock().clone()
    }
}
