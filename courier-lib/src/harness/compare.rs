//! Stock comparison for callers that have no assertions of their own.

use super::recorder::TestRecorder;
use crate::core::json::{is_json_content, json_subset};
use crate::fixtures::Response;
use serde_json::Value;

/// Compares a live response with the expected one.
///
/// With an expected response the status codes must be equal and the body
/// must match (see [`body_matches`]); an empty expected body is not checked.
/// Without one, any 2xx status passes.
pub fn assert_response(recorder: &mut TestRecorder, expected: Option<&Response>, actual: &Response) {
    let Some(expected) = expected else {
        if !(200..300).contains(&actual.status_code) {
            recorder.error(format!(
                "expected a successful status, got {}",
                actual.status_code
            ));
        }
        return;
    };

    recorder.expect_eq("status code", expected.status_code, actual.status_code);

    if !expected.raw.trim().is_empty() && !body_matches(&expected.raw, &actual.raw) {
        recorder.error(format!(
            "body mismatch\nexpected:\n{}\nactual:\n{}",
            expected.raw.trim(),
            actual.raw.trim()
        ));
    }
}

/// JSON bodies match when the expected document is a subset of the actual
/// one. Anything else is compared as text, ignoring surrounding whitespace.
pub fn body_matches(expected: &str, actual: &str) -> bool {
    if is_json_content(expected) && is_json_content(actual) {
        if let (Ok(exp), Ok(act)) = (
            serde_json::from_str::<Value>(expected),
            serde_json::from_str::<Value>(actual),
        ) {
            return json_subset(&exp, &act);
        }
    }
    expected.trim() == actual.trim()
}
