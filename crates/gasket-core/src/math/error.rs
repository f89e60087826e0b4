use std::fmt;

/// Error returned when vector text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVecError {
    message: String,
}

impl ParseVecError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector parse error: {}", self.message)
    }
}

impl std::error::Error for ParseVecError {}
