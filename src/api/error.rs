//! Error model for API operations.
//!
//! Every failure an operation can hit ends up as one [`Error`]: bad option
//! values are caught before sending, local file problems surface as `Io`,
//! network problems as `Transport`, unreadable bodies as `Decode`, and
//! failures reported by the server (through the HTTP status or the in-body
//! `response.status` field) as `Api`.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::api::Client`] operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An option value is outside the closed set the API accepts.
    #[error("{field}: allowed values '{}': value '{got}' not allowed", .allowed.join("', '"))]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
        got: String,
    },

    /// A required argument is empty, an option is unknown, or a value has the wrong kind.
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// A local file could not be read or written.
    #[error("cannot access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    /// The response body is not the JSON the operation expects.
    #[error("malformed response")]
    Decode(#[source] serde_json::Error),

    /// The server reported a failure.
    #[error("lokalise: {code} {message}")]
    Api { code: ErrorCode, message: String },
}

impl Error {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unexpected_status(status: u16) -> Self {
        Self::Api {
            code: ErrorCode::Custom,
            message: format!("unexpected status {status}"),
        }
    }

    /// Returns `true` for errors detected before any request was sent.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::NotAllowed { .. } | Self::InvalidArgument { .. })
    }

    /// The server-reported code, if this is an `Api` error.
    pub const fn code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Error codes reported in `response.code`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingApiToken,
    InvalidApiToken,
    NoData,
    AccessDenied,
    InvalidCall,
    /// Unclassified failure; the message carries the details.
    Custom,
    NotJson,
    WrongLanguageCode,
    LanguageNotAvailable,
    LanguageNotSpecified,
    InvalidFile,
    InvalidExportType,
    RateLimit,
    MissingRequestParameter,
    LanguageExists,
    /// A code this client does not know about.
    Other(String),
}

impl ErrorCode {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "401" => Self::MissingApiToken,
            "4011" => Self::InvalidApiToken,
            "4012" => Self::NoData,
            "403" => Self::AccessDenied,
            "404" => Self::InvalidCall,
            "4040" => Self::Custom,
            "4042" => Self::NotJson,
            "4043" => Self::WrongLanguageCode,
            "4044" => Self::LanguageNotAvailable,
            "4045" => Self::LanguageNotSpecified,
            "4046" => Self::InvalidFile,
            "4047" => Self::InvalidExportType,
            "4048" => Self::RateLimit,
            "4049" => Self::MissingRequestParameter,
            "4050" => Self::LanguageExists,
            other => Self::Other(other.to_string()),
        }
    }

    /// The code as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MissingApiToken => "401",
            Self::InvalidApiToken => "4011",
            Self::NoData => "4012",
            Self::AccessDenied => "403",
            Self::InvalidCall => "404",
            Self::Custom => "4040",
            Self::NotJson => "4042",
            Self::WrongLanguageCode => "4043",
            Self::LanguageNotAvailable => "4044",
            Self::LanguageNotSpecified => "4045",
            Self::InvalidFile => "4046",
            Self::InvalidExportType => "4047",
            Self::RateLimit => "4048",
            Self::MissingRequestParameter => "4049",
            Self::LanguageExists => "4050",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The API is not consistent about quoting codes, so accept both forms.
impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(code) => Self::from_code(&code),
            Raw::Number(code) => Self::from_code(&code.to_string()),
        })
    }
}
