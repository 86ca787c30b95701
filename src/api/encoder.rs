//! Request body encoding.
//!
//! Required fields come first, in the order the caller passes them, then the
//! set options in table order. Unset options are never written.

use reqwest::multipart::{Form, Part};
use std::fs;
use std::path::Path;

use super::error::{Error, Result};
use super::options::OptionSet;

/// Field name of the uploaded file in multipart bodies.
pub const FILE_FIELD: &str = "file";

/// The binary part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// An encoded request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
    /// `multipart/form-data` text fields plus one file.
    Multipart {
        fields: Vec<(String, String)>,
        file: FilePart,
    },
}

impl RequestBody {
    pub fn fields(&self) -> &[(String, String)] {
        match self {
            Self::Form(fields) | Self::Multipart { fields, .. } => fields,
        }
    }

    /// Value of the first field named `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub const fn file(&self) -> Option<&FilePart> {
        match self {
            Self::Form(_) => None,
            Self::Multipart { file, .. } => Some(file),
        }
    }

    /// Converts the body into a reqwest multipart form.
    ///
    /// Text parts keep their order; the file part goes last.
    pub fn into_multipart(self) -> Form {
        let (fields, file) = match self {
            Self::Form(fields) => (fields, None),
            Self::Multipart { fields, file } => (fields, Some(file)),
        };
        let form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        match file {
            Some(file) => form.part(FILE_FIELD, Part::bytes(file.bytes).file_name(file.filename)),
            None => form,
        }
    }
}

fn collect_fields(required: &[(&str, &str)], options: &OptionSet) -> Vec<(String, String)> {
    required
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .chain(
            options
                .pairs()
                .map(|(name, value)| (name.to_string(), value)),
        )
        .collect()
}

/// Encodes a URL-encoded form body.
pub fn encode_form(required: &[(&str, &str)], options: &OptionSet) -> RequestBody {
    RequestBody::Form(collect_fields(required, options))
}

/// Encodes a multipart body carrying the file at `path`.
///
/// The file is read before anything else happens; if it cannot be read the
/// whole operation fails with [`Error::Io`].
pub fn encode_multipart(
    required: &[(&str, &str)],
    options: &OptionSet,
    path: &Path,
) -> Result<RequestBody> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(RequestBody::Multipart {
        fields: collect_fields(required, options),
        file: FilePart { filename, bytes },
    })
}
