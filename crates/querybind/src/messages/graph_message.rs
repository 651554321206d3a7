use crate::loc::SourceLocation;
use crate::messages::MessageSeverity;
use crate::response_path::ResponsePath;
use std::fmt;

/// A user-facing diagnostic produced anywhere between parsing a document and
/// packaging its response.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphMessage {
    code: String,
    location: Option<SourceLocation>,
    message: String,
    path: Option<ResponsePath>,
    severity: MessageSeverity,
}
impl GraphMessage {
    pub fn new(
        severity: MessageSeverity,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            location: None,
            message: message.into(),
            path: None,
            severity,
        }
    }

    pub fn critical(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(MessageSeverity::Critical, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(MessageSeverity::Warning, code, message)
    }

    pub fn with_location(mut self, location: Option<SourceLocation>) -> Self {
        self.location = location;
        self
    }

    pub fn with_path(mut self, path: ResponsePath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn path(&self) -> Option<&ResponsePath> {
        self.path.as_ref()
    }

    pub fn severity(&self) -> MessageSeverity {
        self.severity
    }

    pub fn is_critical(&self) -> bool {
        self.severity.is_critical()
    }
}
impl fmt::Display for GraphMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {location})")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }
        Ok(())
    }
}
