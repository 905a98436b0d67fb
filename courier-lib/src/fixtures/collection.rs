use crate::core::error::CourierError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

pub const POSTMAN_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// A named set of request templates. Field aliases accept Postman exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub info: CollectionInfo,
    #[serde(default, alias = "item")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<CollectionAuth>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(default, alias = "_postman_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "schemaVersion", alias = "schema", default)]
    pub schema_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAuth {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(
        rename = "bearerToken",
        alias = "bearer",
        default,
        deserialize_with = "deserialize_bearer",
        skip_serializing_if = "Option::is_none"
    )]
    pub bearer_token: Option<CollectionBearerAuth>,
}

/// Postman exports `bearer` as a list of key/value entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum BearerDocument {
    Entries(Vec<CollectionBearerAuth>),
    Single(CollectionBearerAuth),
}

/// Picks the `token` entry from a list, else the first one.
fn deserialize_bearer<'de, D>(deserializer: D) -> Result<Option<CollectionBearerAuth>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BearerDocument>::deserialize(deserializer)? {
        None => None,
        Some(BearerDocument::Single(auth)) => Some(auth),
        Some(BearerDocument::Entries(entries)) => {
            let token = entries.iter().position(|e| e.key == "token").unwrap_or(0);
            entries.into_iter().nth(token)
        }
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionBearerAuth {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A single test case. Only the first response is compared against; the
/// rest are documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
    #[serde(default, alias = "response")]
    pub responses: Vec<Response>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub method: String,
    #[serde(default, alias = "header")]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(default)]
    pub url: RequestUrl,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub mode: String,
    #[serde(default, alias = "body")]
    pub raw: String,
    #[serde(rename = "statusCode", alias = "code", default)]
    pub status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct UrlParts {
    #[serde(default)]
    raw: String,
    #[serde(rename = "hostSegments", alias = "host", default)]
    host_segments: Vec<String>,
    #[serde(default)]
    port: String,
    #[serde(rename = "pathSegments", alias = "path", default)]
    path_segments: Vec<String>,
}

/// Postman allows `url` to be either the raw string or the parsed object.
#[derive(Deserialize)]
#[serde(untagged)]
enum UrlDocument {
    Raw(String),
    Parts(UrlParts),
}

impl From<UrlDocument> for RequestUrl {
    fn from(doc: UrlDocument) -> Self {
        match doc {
            UrlDocument::Raw(raw) => RequestUrl {
                raw,
                ..RequestUrl::default()
            },
            UrlDocument::Parts(parts) => RequestUrl {
                raw: parts.raw,
                host_segments: parts.host_segments,
                port: parts.port,
                path_segments: parts.path_segments,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UrlDocument")]
pub struct RequestUrl {
    pub raw: String,
    #[serde(rename = "hostSegments")]
    pub host_segments: Vec<String>,
    pub port: String,
    #[serde(rename = "pathSegments")]
    pub path_segments: Vec<String>,
}

impl Collection {
    pub fn new(name: impl Into<String>, items: Vec<Item>, auth: Option<CollectionAuth>) -> Self {
        Collection {
            info: CollectionInfo {
                id: String::new(),
                name: name.into(),
                schema_version: POSTMAN_SCHEMA.to_string(),
            },
            items,
            auth,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, CourierError> {
        super::decode_slice(bytes, "<collection>")
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, CourierError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_slice(&bytes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CourierError> {
        super::decode_path(path.as_ref())
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// First item whose name matches exactly. Matching is case-sensitive.
    pub fn item_with_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

impl Response {
    /// A response as received off the wire.
    pub fn raw(body: impl Into<String>, status_code: u16) -> Self {
        Response {
            mode: "raw".to_string(),
            raw: body.into(),
            status_code,
        }
    }

    /// Decodes the raw body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.raw)
    }
}
