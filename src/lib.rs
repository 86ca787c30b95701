//! # lokalise - Lokalise translation file CLI
//!
//! `lokalise` lists projects, downloads language-file bundles and uploads
//! translation files through the Lokalise v1 API. The [`api`] module is usable
//! on its own as an async client.
//!
//! ## Quick Start
//!
//! ```bash
//! # List projects you have access to
//! lokalise --token <TOKEN> list
//!
//! # Download all languages as JSON into ./locale
//! lokalise export 123456789.abcdef --type json --dest locale
//!
//! # Upload every English file
//! lokalise import 123456789.abcdef --file 'locale/en/*.json' --lang_iso en
//! ```
//!
//! ## Configuration
//!
//! `--token` and the project ID can be stored in `~/.lokalise/lokalise.cfg`
//! (or `/etc/lokalise.cfg`):
//!
//! ```toml
//! token = "0123456789abcdef"
//! project = "123456789.abcdef"
//! ```

/// Async client for the Lokalise project API.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and settings resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Config file locations.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
