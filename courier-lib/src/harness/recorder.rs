use super::error::{AnnotatedError, HarnessError};
use crate::core::logger::Logger;
use std::fmt::Debug;

/// Collects the errors raised while one collection runs one test.
///
/// Handed to the comparison callback so it can report assertion failures.
#[derive(Debug, Default)]
pub struct TestRecorder {
    errors: Vec<HarnessError>,
}

impl TestRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, err: impl Into<HarnessError>) {
        self.errors.push(err.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[HarnessError] {
        &self.errors
    }

    pub fn log(&self, message: &str) {
        Logger::debug(message);
    }

    /// Records an assertion error when `expected != actual`. Returns whether
    /// the values matched.
    pub fn expect_eq<T: PartialEq + Debug>(&mut self, label: &str, expected: T, actual: T) -> bool {
        if expected == actual {
            return true;
        }
        self.error(format!(
            "{label} mismatch: expected {expected:?}, got {actual:?}"
        ));
        false
    }

    pub fn annotate(self, collection: &str, test: &str) -> Vec<AnnotatedError> {
        self.errors
            .into_iter()
            .map(|error| AnnotatedError {
                collection: collection.to_string(),
                test: test.to_string(),
                error,
            })
            .collect()
    }
}

/// Panics listing every error when `errors` is non-empty. Meant for use at
/// the end of a `#[test]` that drove the harness.
#[track_caller]
pub fn assert_errors(errors: &[AnnotatedError]) {
    if errors.is_empty() {
        return;
    }
    let listing = errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n");
    panic!("{} harness error(s):\n{listing}", errors.len());
}
