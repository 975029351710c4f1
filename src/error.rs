//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate, or that certain
//! utilities convert their errors to.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For configuration errors, for
/// instance, the context string is populated with the offending configuration input, while
/// transformation errors may carry the path of the AST node that failed to fold.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The stage of the manifest pipeline an [Error] originated from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// A folder failed while rewriting a document.
    Transform,
    /// The manifest could not be encoded as JSON.
    Serialize,
    /// The plugin configuration passed by the host was malformed.
    Config,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            context: None,
            error_type: error_type.unwrap_or(ErrorType::Transform),
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        context: S,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::Transform),
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the pipeline stage this error was raised in.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::Transform => format!("Transform Error: {}", self.message),
            ErrorType::Serialize => format!("Serialize Error: {}", self.message),
            ErrorType::Config => format!("Config Error: {}", self.message),
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(err.to_string(), Some(ErrorType::Serialize))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_with_context() {
        let err = Error::new_with_context(
            "invalid value for `output`",
            "\"yaml\"",
            Some(ErrorType::Config),
        );
        assert_eq!(err.print(false), "Config Error: invalid value for `output`");
        assert_eq!(
            err.print(true),
            "Config Error: invalid value for `output`\n\"yaml\""
        );
        assert_eq!(err.to_string(), err.print(true));
    }

    #[test]
    fn defaults_to_transform() {
        let err = Error::new("folder gave up", None);
        assert_eq!(err.error_type(), ErrorType::Transform);
        assert_eq!(err.message(), "folder gave up");
        assert_eq!(err.print(true), "Transform Error: folder gave up");
    }
}
