use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Renders any serializable view as an indented, YAML-like outline.
fn render_outline<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    let mut out = String::new();
    write_value(&mut out, &value, 0);
    out
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn write_value(out: &mut String, value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        Value::Array(items) => {
            for item in items {
                match scalar(item) {
                    Some(text) => out.push_str(&format!("{pad}- {text}\n")),
                    None => {
                        out.push_str(&format!("{pad}-\n"));
                        write_value(out, item, indent + 2);
                    }
                }
            }
        }
        Value::Object(map) => {
            for (key, field) in map {
                match scalar(field) {
                    Some(text) if text.contains('\n') => {
                        out.push_str(&format!("{pad}{key}:\n"));
                        for line in text.lines() {
                            out.push_str(&format!("{pad}  {line}\n"));
                        }
                    }
                    Some(text) => out.push_str(&format!("{pad}{key}: {text}\n")),
                    None => {
                        out.push_str(&format!("{pad}{key}:\n"));
                        write_value(out, field, indent + 2);
                    }
                }
            }
        }
        Value::Null => {}
        other => {
            for line in scalar(other).unwrap_or_default().lines() {
                out.push_str(&format!("{pad}{line}\n"));
            }
        }
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_outline(model),
            OutputFormat::Json => serde_json::to_string_pretty(model).unwrap_or_default(),
        }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text if list.is_empty() => empty_msg.to_string(),
            OutputFormat::Text => format!("{title}\n{}", render_outline(list)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string())
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
