//! Response envelope decoding and error mapping.
//!
//! Every endpoint answers with a JSON object holding a `response` envelope
//! next to its payload key:
//!
//! ```json
//! {"bundle": {"file": "export/p1.zip"}, "response": {"status": "ok"}}
//! ```
//!
//! Failures are reported either through the HTTP status or through
//! `response.status == "error"`. [`decode`] folds both into one [`Error`]:
//!
//! 1. a parseable error envelope wins, whatever the HTTP status;
//! 2. otherwise a non-200 status is `Custom` / `unexpected status <n>`;
//! 3. otherwise an unparseable body is a decode error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{Error, ErrorCode, Result};

/// The `response` object common to all endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub code: Option<ErrorCode>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ResponseEnvelope {
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    /// The API error this envelope reports, if any.
    pub fn error(&self) -> Option<Error> {
        self.is_error().then(|| Error::Api {
            code: self.code.clone().unwrap_or(ErrorCode::Custom),
            message: self.message.clone().unwrap_or_default(),
        })
    }
}

/// Extracts the envelope from a parsed body, if it has a well-formed one.
pub fn envelope(body: &Value) -> Option<ResponseEnvelope> {
    body.get("response")
        .and_then(|response| ResponseEnvelope::deserialize(response).ok())
}

/// Decodes a response body into the payload type `T`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let parsed = serde_json::from_str::<Value>(body);

    if let Ok(value) = &parsed
        && let Some(err) = envelope(value).and_then(|envelope| envelope.error())
    {
        return Err(err);
    }
    if status != 200 {
        return Err(Error::unexpected_status(status));
    }

    let value = parsed.map_err(Error::Decode)?;
    T::deserialize(value).map_err(Error::Decode)
}
