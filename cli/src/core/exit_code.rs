use courier_lib::{CourierError, HttpError};

/// Process exit codes for the courier CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    GeneralError = 1,
    /// Fixture could not be decoded or an argument was rejected
    ConfigError = 3,
    /// Fixture file missing or unreadable
    FileError = 4,
    /// HTTP client could not be built
    NetworkError = 6,
    /// At least one named test reported an error
    TestFailure = 9,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(err) = error.downcast_ref::<CourierError>() {
            match err {
                CourierError::Io(_) | CourierError::FileNotFound(_) => ExitCode::FileError,
                CourierError::Decode(..) | CourierError::Validation(_) => ExitCode::ConfigError,
                CourierError::Http(_) => ExitCode::NetworkError,
                CourierError::TestsFailed(_) => ExitCode::TestFailure,
                CourierError::Generic(_) => ExitCode::GeneralError,
            }
        } else if error.downcast_ref::<HttpError>().is_some() {
            ExitCode::NetworkError
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
