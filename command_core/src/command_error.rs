use std::any::Any;

use thiserror::Error;

/// Failure raised by a command's handler.
///
/// `IllegalArgument` and `IllegalUsage` are reported back to the sender; every other
/// variant is only logged.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Incorrect argument type for, {argument}. Required type: {expected}")]
    IllegalArgument {
        argument: String,
        expected: &'static str,
    },
    #[error("Incorrect command usage")]
    IllegalUsage,
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CommandError {
    pub fn illegal_argument(argument: impl Into<String>, expected: &'static str) -> Self {
        CommandError::IllegalArgument {
            argument: argument.into(),
            expected,
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Could not construct the command, {entry}: {reason}")]
    Construction { entry: &'static str, reason: String },
}

/// Text of a caught panic payload, for logging.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
