//! Client for the Lokalise project API.
//!
//! ```no_run
//! use lokalise_cli::api::{Client, ExportOptions};
//!
//! # async fn run() -> lokalise_cli::api::Result<()> {
//! let client = Client::new()?;
//! let options = ExportOptions::new().languages(["en", "de"])?.use_original(true);
//! let bundle = client.export("token", "123.abc", "json", &options).await?;
//! println!("{}", bundle.full_file);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod encoder;
pub mod envelope;
mod error;
pub mod export;
pub mod import;
pub mod options;
mod types;

pub use client::{Client, DEFAULT_ASSET_URL, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use encoder::{FilePart, RequestBody};
pub use envelope::ResponseEnvelope;
pub use error::{Error, ErrorCode, Result};
pub use export::{EXPORT_OPTIONS, ExportOptions};
pub use import::{IMPORT_OPTIONS, ImportOptions};
pub use options::{OptionKind, OptionSet, OptionSpec, OptionValue};
pub use types::{Bundle, ImportResult, Project};
