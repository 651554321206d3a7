use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{}`: {message}", .path.display())]
    FileReadError {
        path: PathBuf,
        message: String,
    },

    #[error("Failed to parse engine config{}: {message}", .path.as_ref().map(|path| format!(" `{}`", path.display())).unwrap_or_default())]
    ParseError {
        path: Option<PathBuf>,
        message: String,
    },
}
