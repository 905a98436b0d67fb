use crate::client::HttpError;
use crate::syntax::InflationError;
use std::fmt;

/// Everything that can go wrong while running one item of one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    ItemNotFound(String),
    InvalidTarget(String),
    RequestBuild(String),
    Transport(HttpError),
    Inflation(InflationError),
    Assertion(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::ItemNotFound(name) => write!(f, "item with name {name} doesn't exist"),
            HarnessError::InvalidTarget(msg) => write!(f, "invalid target host: {msg}"),
            HarnessError::RequestBuild(name) => {
                write!(f, "failed to build HTTP request for item {name}")
            }
            HarnessError::Transport(err) => write!(f, "{err}"),
            HarnessError::Inflation(err) => write!(f, "{err}"),
            HarnessError::Assertion(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Transport(err) => Some(err),
            HarnessError::Inflation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HttpError> for HarnessError {
    fn from(err: HttpError) -> Self {
        HarnessError::Transport(err)
    }
}

impl From<InflationError> for HarnessError {
    fn from(err: InflationError) -> Self {
        HarnessError::Inflation(err)
    }
}

impl From<String> for HarnessError {
    fn from(msg: String) -> Self {
        HarnessError::Assertion(msg)
    }
}

impl From<&str> for HarnessError {
    fn from(msg: &str) -> Self {
        HarnessError::Assertion(msg.to_string())
    }
}

/// A [`HarnessError`] tagged with the collection and test it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedError {
    pub collection: String,
    pub test: String,
    pub error: HarnessError,
}

impl fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(collection {}, request {}): {}",
            self.collection, self.test, self.error
        )
    }
}

impl std::error::Error for AnnotatedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
