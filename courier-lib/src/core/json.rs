use serde_json::Value;

pub fn is_json_content(content: &str) -> bool {
    let trimmed = content.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// Returns true when every key of `expected` is present in `actual` with a
/// matching value. Arrays must have the same length and match element-wise.
pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => exp_map.iter().all(|(k, v)| {
            act_map
                .get(k)
                .is_some_and(|act_v| json_subset(v, act_v))
        }),
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr
                    .iter()
                    .zip(act_arr.iter())
                    .all(|(e, a)| json_subset(e, a))
        }
        _ => expected == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_json_content_object() {
        assert!(is_json_content(r#"{"key": "value"}"#));
        assert!(is_json_content(r#"  {"key": "value"}  "#));
        assert!(is_json_content("{}"));
    }

    #[test]
    fn test_is_json_content_array() {
        assert!(is_json_content(r#"["item1", "item2"]"#));
        assert!(is_json_content("[]"));
    }

    #[test]
    fn test_is_json_content_not_json() {
        assert!(!is_json_content("plain text"));
        assert!(!is_json_content("{not closed"));
        assert!(!is_json_content("closed]"));
    }

    #[test]
    fn test_json_subset_ignores_extra_keys() {
        let expected = json!({"id": 1, "tags": ["a"]});
        let actual = json!({"id": 1, "tags": ["a"], "created": "today"});
        assert!(json_subset(&expected, &actual));
        assert!(!json_subset(&actual, &expected));
    }

    #[test]
    fn test_json_subset_arrays_must_match_length() {
        assert!(!json_subset(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(json_subset(&json!([{"a": 1}]), &json!([{"a": 1, "b": 2}])));
    }
}
