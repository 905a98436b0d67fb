pub mod collection;
pub mod environment;

pub use collection::{
    Body, Collection, CollectionAuth, CollectionBearerAuth, CollectionInfo, Header, Item,
    Request, RequestUrl, Response, POSTMAN_SCHEMA,
};
pub use environment::{Environment, Variable};

use crate::core::error::CourierError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn decode_slice<T: DeserializeOwned>(bytes: &[u8], source: &str) -> Result<T, CourierError> {
    serde_json::from_slice(bytes).map_err(|e| CourierError::Decode(source.to_string(), e))
}

pub(crate) fn decode_path<T: DeserializeOwned>(path: &Path) -> Result<T, CourierError> {
    if !path.exists() {
        return Err(CourierError::FileNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    decode_slice(&bytes, &path.display().to_string())
}
