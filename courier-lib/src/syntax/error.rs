#[derive(Debug, Clone, PartialEq)]
pub struct TemplateError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub span: std::ops::Range<usize>,
}
impl TemplateError {
    pub fn new(message: String, line: usize, column: usize, span: std::ops::Range<usize>) -> Self {
        Self {
            message,
            line,
            column,
            span,
        }
    }

    /// Builds an error for `span`, deriving the 1-based line and column from
    /// the template text that precedes it.
    pub fn at(template: &str, message: impl Into<String>, span: std::ops::Range<usize>) -> Self {
        let prefix = &template[..span.start.min(template.len())];
        let line = prefix.matches('\n').count() + 1;
        let last_line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = prefix[last_line_start..].chars().count() + 1;
        Self::new(message.into(), line, column, span)
    }
}
impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Template error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}
impl std::error::Error for TemplateError {}

/// A stored response could not be rendered against the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct InflationError {
    pub field: &'static str,
    pub source: TemplateError,
}
impl InflationError {
    pub fn new(field: &'static str, source: TemplateError) -> Self {
        Self { field, source }
    }
}
impl std::fmt::Display for InflationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unable to inflate response {}: {}",
            self.field, self.source
        )
    }
}
impl std::error::Error for InflationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
