//! Error types for the shell.

use thiserror::Error;

/// Errors a command can return. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{cmd}: {target}: No such file or directory")]
    NotFound { cmd: &'static str, target: String },

    #[error("{cmd}: {target}: Not a directory")]
    NotADirectory { cmd: &'static str, target: String },

    /// The cursor no longer resolves (only reachable with a hand-built context).
    #[error("No such directory")]
    NoSuchDirectory,

    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("help: no help topics match '{0}'")]
    NoHelpTopic(String),

    #[error("{0}: unable to access command registry")]
    NoRegistry(&'static str),

    #[error("theme: {0}: theme not found")]
    UnknownTheme(String),

    #[error("{cmd}: no {what} configured")]
    NotConfigured { cmd: &'static str, what: &'static str },
}

impl ShellError {
    pub fn not_found(cmd: &'static str, target: &str) -> Self {
        Self::NotFound { cmd, target: target.to_string() }
    }

    pub fn not_a_directory(cmd: &'static str, target: &str) -> Self {
        Self::NotADirectory { cmd, target: target.to_string() }
    }
}

/// Errors raised while loading embedded data or configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub fn json(what: &'static str, source: serde_json::Error) -> Self {
        Self::Json { what, source }
    }
}
