use super::error::TemplateError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Enabled environment variables keyed by name.
pub type VariableMap = HashMap<String, String>;

/// Rendered in place of a placeholder whose variable is not in the map.
pub const NO_VALUE: &str = "<no value>";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

lazy_static! {
    static ref PLACEHOLDER_BODY: Regex =
        Regex::new(r"^\s*\.([\p{L}_][\p{L}\p{N}_]*)\s*$").unwrap();
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find(OPEN) {
        let open = cursor + offset;
        if open > cursor {
            segments.push(Segment::Literal(&template[cursor..open]));
        }

        let body_start = open + OPEN.len();
        let close = template[body_start..]
            .find(CLOSE)
            .map(|i| body_start + i)
            .ok_or_else(|| {
                TemplateError::at(template, "unclosed placeholder", open..template.len())
            })?;
        let end = close + CLOSE.len();
        let body = &template[body_start..close];

        let name = PLACEHOLDER_BODY
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                TemplateError::at(
                    template,
                    format!(
                        "unsupported placeholder '{}', expected '{{{{ .Name }}}}'",
                        &template[open..end]
                    ),
                    open..end,
                )
            })?;

        segments.push(Segment::Placeholder(name));
        cursor = end;
    }

    if cursor < template.len() {
        segments.push(Segment::Literal(&template[cursor..]));
    }

    Ok(segments)
}

/// Renders `template`, replacing every `{{ .Name }}` with the value of `Name`.
///
/// Missing keys render as [`NO_VALUE`]. Values are inserted verbatim without
/// any escaping. Fails only when the template itself is malformed.
pub fn substitute(template: &str, variables: &VariableMap) -> Result<String, TemplateError> {
    let segments = parse(template)?;
    let mut rendered = String::with_capacity(template.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => rendered.push_str(text),
            Segment::Placeholder(name) => {
                rendered.push_str(variables.get(name).map(String::as_str).unwrap_or(NO_VALUE))
            }
        }
    }

    Ok(rendered)
}

/// Variable names referenced by `template`, in order of appearance.
pub fn placeholders(template: &str) -> Result<Vec<&str>, TemplateError> {
    Ok(parse(template)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect())
}
