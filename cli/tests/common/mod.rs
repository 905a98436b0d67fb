#![allow(dead_code)]
use serde_json::Value;
use std::process::{Command, Output};

pub const FIXTURES: &str = "tests/fixtures";

pub fn courier_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_courier"))
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Objects match when every expected key matches; arrays match element-wise.
pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => exp_map
            .iter()
            .all(|(k, v)| act_map.get(k).is_some_and(|a| json_subset(v, a))),
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr.iter().zip(act_arr).all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            regex::Regex::new(pattern).is_ok_and(|re| re.is_match(a))
        }
        _ => expected == actual,
    }
}

pub fn validate_pure_json_response(stdout: &str, expected: &Value) -> Result<(), String> {
    let actual: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("Failed to parse actual JSON response: {e}\n{stdout}"))?;

    if !json_subset(expected, &actual) {
        return Err(format!(
            "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
            serde_json::to_string_pretty(expected).unwrap(),
            serde_json::to_string_pretty(&actual).unwrap()
        ));
    }
    Ok(())
}
