pub mod compare;
pub mod config;
pub mod error;
pub mod recorder;
pub mod runner;

pub use config::HarnessConfig;
pub use error::{AnnotatedError, HarnessError};
pub use recorder::{assert_errors, TestRecorder};
pub use runner::Harness;
