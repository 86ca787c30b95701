//! Records decoded from API payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A project visible to the API token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default, with = "api_time")]
    pub created: Option<NaiveDateTime>,
    /// `"1"` when the token owner administers the project.
    #[serde(default)]
    pub owner: String,
}

impl Project {
    pub fn is_admin(&self) -> bool {
        self.owner == "1"
    }
}

/// Locations of an export bundle.
///
/// `full_file` is empty when the export was requested with a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub full_file: String,
}

/// Key counts reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub inserted: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub skipped: u64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListPayload {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExportPayload {
    #[serde(default)]
    pub bundle: Bundle,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImportPayload {
    #[serde(default)]
    pub result: ImportResult,
}

/// Timestamps in the API's `YYYY-MM-DD HH:MM:SS` format.
mod api_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDateTime::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}
