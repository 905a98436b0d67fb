use crate::client::HttpError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CourierError {
    Io(io::Error),
    Decode(String, serde_json::Error),
    Http(HttpError),
    Validation(String),
    FileNotFound(String),
    TestsFailed(usize),
    Generic(String),
}

impl fmt::Display for CourierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourierError::Io(err) => write!(f, "IO error: {err}"),
            CourierError::Decode(source, err) => {
                write!(f, "Failed to decode fixture {source}: {err}")
            }
            CourierError::Http(err) => write!(f, "{err}"),
            CourierError::Validation(msg) => write!(f, "Validation error: {msg}"),
            CourierError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CourierError::TestsFailed(count) => {
                let noun = if *count == 1 { "test" } else { "tests" };
                write!(f, "{count} {noun} failed")
            }
            CourierError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CourierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CourierError::Io(err) => Some(err),
            CourierError::Decode(_, err) => Some(err),
            CourierError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CourierError {
    fn from(err: io::Error) -> Self {
        CourierError::Io(err)
    }
}

impl From<HttpError> for CourierError {
    fn from(err: HttpError) -> Self {
        CourierError::Http(err)
    }
}

impl From<String> for CourierError {
    fn from(msg: String) -> Self {
        CourierError::Generic(msg)
    }
}

impl From<&str> for CourierError {
    fn from(msg: &str) -> Self {
        CourierError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tests_failed_pluralization() {
        assert_eq!(CourierError::TestsFailed(1).to_string(), "1 test failed");
        assert_eq!(CourierError::TestsFailed(3).to_string(), "3 tests failed");
    }

    #[test]
    fn test_decode_error_names_source() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let wrapped = CourierError::Decode("env.json".to_string(), err);
        assert!(wrapped.to_string().starts_with("Failed to decode fixture env.json"));
        assert!(std::error::Error::source(&wrapped).is_some());
    }
}
