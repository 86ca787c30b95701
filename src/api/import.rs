//! Options accepted by `project/import`.

use super::error::Result;
use super::options::{OptionSet, OptionSpec, OptionValue};

/// Import option slots, in the order they are written to the request body.
pub const IMPORT_OPTIONS: &[OptionSpec] = &[
    OptionSpec::bool("replace"),
    OptionSpec::bool("convert_placeholders"),
    OptionSpec::bool("icu_plurals"),
    OptionSpec::bool("fill_empty"),
    OptionSpec::bool("distinguish"),
    OptionSpec::bool("hidden"),
    OptionSpec::bool("use_trans_mem"),
    OptionSpec::list("tags"),
    OptionSpec::bool("replace_breaks"),
    OptionSpec::bool("cleanup_mode"),
    OptionSpec::string("filename"),
];

/// Optional parameters for [`crate::api::Client::import`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    set: OptionSet,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self {
            set: OptionSet::new(IMPORT_OPTIONS),
        }
    }

    pub const fn as_set(&self) -> &OptionSet {
        &self.set
    }

    /// Sets an option by wire name.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
        self.set.set(name, value)
    }

    /// Sets an option by wire name from a raw flag string.
    pub fn set_raw(&mut self, name: &str, raw: &str) -> Result<()> {
        self.set.set_raw(name, raw)
    }

    // Only for bool and string slots, which accept every value of their
    // kind. `tags` is checked by `tags` itself.
    fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        let result = self.set.set(name, value);
        debug_assert!(result.is_ok(), "{name} rejected a value: {result:?}");
        self
    }

    /// Replace existing translations of the imported keys.
    #[must_use]
    pub fn replace(self, enabled: bool) -> Self {
        self.with("replace", enabled)
    }

    /// Convert placeholders to universal ones. The server enables this by default.
    #[must_use]
    pub fn convert_placeholders(self, enabled: bool) -> Self {
        self.with("convert_placeholders", enabled)
    }

    /// Detect and parse ICU formatted plurals.
    #[must_use]
    pub fn icu_plurals(self, enabled: bool) -> Self {
        self.with("icu_plurals", enabled)
    }

    /// Copy keys into empty values.
    #[must_use]
    pub fn fill_empty(self, enabled: bool) -> Self {
        self.with("fill_empty", enabled)
    }

    /// Keep similar keys in different files apart.
    #[must_use]
    pub fn distinguish(self, enabled: bool) -> Self {
        self.with("distinguish", enabled)
    }

    /// Hide newly added keys from contributors.
    #[must_use]
    pub fn hidden(self, enabled: bool) -> Self {
        self.with("hidden", enabled)
    }

    /// Fill 100% translation memory matches.
    #[must_use]
    pub fn translation_memory(self, enabled: bool) -> Self {
        self.with("use_trans_mem", enabled)
    }

    /// Tags for newly added keys.
    pub fn tags<I, S>(mut self, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        self.set.set("tags", tags)?;
        Ok(self)
    }

    /// Replace `\n` with real line breaks.
    #[must_use]
    pub fn replace_breaks(self, enabled: bool) -> Self {
        self.with("replace_breaks", enabled)
    }

    /// Delete keys that are missing from the uploaded file.
    #[must_use]
    pub fn cleanup_mode(self, enabled: bool) -> Self {
        self.with("cleanup_mode", enabled)
    }

    /// Name the file is stored under, instead of the uploaded file's own name.
    #[must_use]
    pub fn filename(self, filename: impl Into<String>) -> Self {
        self.with("filename", filename.into())
    }
}
