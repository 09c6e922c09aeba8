use miette::Diagnostic;
use thiserror::Error;

/// Main error type for svg2res operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    #[diagnostic(code(svg2res::io))]
    IoError(#[from] std::io::Error),

    #[error("Usage error: {message}")]
    #[diagnostic(code(svg2res::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Environment error: '{tool}' was not found on PATH")]
    #[diagnostic(code(svg2res::environment))]
    Environment {
        tool: String,
        #[help]
        help: Option<String>,
    },

    #[error("Filesystem error with {path}: {message}")]
    #[diagnostic(code(svg2res::filesystem))]
    Filesystem {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Execution error: {message}")]
    #[diagnostic(code(svg2res::execution))]
    Execution {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    pub fn usage_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        ExportError::Usage {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    pub fn environment(tool: impl Into<String>, help: impl Into<String>) -> Self {
        ExportError::Environment {
            tool: tool.into(),
            help: Some(help.into()),
        }
    }
}
