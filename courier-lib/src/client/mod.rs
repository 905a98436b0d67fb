pub mod http;
pub mod request;
pub mod response;

pub use http::{build_client, HttpError, Transport};
pub use request::ExecutableRequest;
