use serde::Deserialize;

use crate::app::{PawfeedError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub text: String,
}

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode the body of the cat endpoint. Only `fact` is read.
    pub fn from_response(body: &[u8]) -> Result<Self> {
        let response: FactResponse = serde_json::from_slice(body)?;
        response
            .fact
            .map(Self::new)
            .ok_or(PawfeedError::MissingField("fact"))
    }
}

#[derive(Debug, Deserialize)]
struct FactResponse {
    fact: Option<String>,
}
