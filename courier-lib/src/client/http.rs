use super::request::ExecutableRequest;
use crate::debug_log;
use crate::fixtures::Response;
use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    pub message: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP Error: {}", self.message)
    }
}

impl Error for HttpError {}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        HttpError {
            message: error.to_string(),
        }
    }
}

/// Sends a request and waits for the complete response.
pub trait Transport {
    fn execute(&self, request: &ExecutableRequest) -> Result<Response, HttpError>;
}

impl Transport for reqwest::blocking::Client {
    fn execute(&self, request: &ExecutableRequest) -> Result<Response, HttpError> {
        debug_log!("Executing {} request to URL: {}", request.method, request.url);

        let mut req_builder = self.request(request.method.clone(), request.url.clone());

        for (key, value) in &request.headers {
            debug_log!("Adding header: {key}: {value}");
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send()?;
        let status = response.status().as_u16();
        // Consumes the response, returning the connection on every path.
        let body = response.text()?;

        debug_log!("Response status: {status}");
        Ok(Response::raw(body, status))
    }
}

/// Blocking client with the courier user agent and an optional overall
/// request timeout. Without a timeout the transport defaults apply.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::blocking::Client, HttpError> {
    let mut builder = reqwest::blocking::Client::builder()
        .user_agent(format!("courier/{}", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
