use serde::Deserialize;
use url::Url;

use crate::app::{PawfeedError, Result};

/// Location of a dog picture, as returned by the metadata endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogImageRef {
    pub url: Url,
}

impl DogImageRef {
    /// Decode the metadata envelope and parse `message` as an absolute URL.
    pub fn from_response(body: &[u8]) -> Result<Self> {
        let response: DogResponse = serde_json::from_slice(body)?;
        let message = response
            .message
            .ok_or(PawfeedError::MissingField("message"))?;
        let url = Url::parse(&message)?;
        Ok(Self { url })
    }
}

#[derive(Debug, Deserialize)]
struct DogResponse {
    message: Option<String>,
}

/// Raw image payload. May be empty when the download failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBytes(Vec<u8>);

impl ImageBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
