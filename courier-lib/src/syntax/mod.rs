pub mod error;
pub mod template;

pub use error::{InflationError, TemplateError};
pub use template::{placeholders, substitute, VariableMap, NO_VALUE};
