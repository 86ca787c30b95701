//! Options accepted by `project/export`.

use super::error::Result;
use super::options::{OptionSet, OptionSpec, OptionValue};

pub const FILTERS: &[&str] = &["translated", "nonfuzzy", "nonhidden", "reviewed", "proofread"];
pub const EMPTY_MODES: &[&str] = &["empty", "base", "skip"];
pub const SORT_ORDERS: &[&str] = &["first_added", "last_added", "last_updated", "a_z", "z_a"];
pub const JAVA_PROPERTIES_SEPARATORS: &[&str] = &[":", "="];
pub const JAVA_PROPERTIES_ENCODINGS: &[&str] = &["utf-8", "latin-1"];
pub const TRIGGERS: &[&str] = &["amazons3", "gcs", "github", "gitlab", "bitbucket"];
pub const PLURAL_FORMATS: &[&str] = &["json_string", "icu", "array", "generic", "symfony"];
pub const INDENTATIONS: &[&str] = &[
    "1sp", "2sp", "3sp", "4sp", "5sp", "6sp", "7sp", "8sp", "tab",
];
pub const PLACEHOLDER_FORMATS: &[&str] = &["printf", "ios", "icu", "net", "symfony"];

/// Export option slots, in the order they are written to the request body.
pub const EXPORT_OPTIONS: &[OptionSpec] = &[
    OptionSpec::list("langs"),
    OptionSpec::bool("use_original"),
    OptionSpec::list("filter").restricted(FILTERS),
    OptionSpec::string("bundle_structure"),
    OptionSpec::string("directory_prefix"),
    OptionSpec::string("webhook_url"),
    OptionSpec::bool("export_all"),
    OptionSpec::string("export_empty").restricted(EMPTY_MODES),
    OptionSpec::bool("include_comments"),
    OptionSpec::bool("include_description"),
    OptionSpec::list("include_pids"),
    OptionSpec::list("include_tags"),
    OptionSpec::list("exclude_tags"),
    OptionSpec::string("export_sort").restricted(SORT_ORDERS),
    OptionSpec::string("java_properties_separator").restricted(JAVA_PROPERTIES_SEPARATORS),
    OptionSpec::string("java_properties_encoding").restricted(JAVA_PROPERTIES_ENCODINGS),
    OptionSpec::bool("replace_breaks"),
    OptionSpec::bool("yaml_include_root"),
    OptionSpec::bool("json_unescaped_slashes"),
    OptionSpec::bool("no_language_folders"),
    OptionSpec::list("triggers").restricted(TRIGGERS),
    OptionSpec::list("repos"),
    OptionSpec::string("plural_format").restricted(PLURAL_FORMATS),
    OptionSpec::bool("icu_numeric"),
    OptionSpec::bool("escape_percent"),
    OptionSpec::string("indentation").restricted(INDENTATIONS),
    OptionSpec::string("placeholder_format").restricted(PLACEHOLDER_FORMATS),
];

/// Optional parameters for [`crate::api::Client::export`].
///
/// Builder methods for list options and options with a closed value set
/// return `Result`; the rest cannot fail.
///
/// ```
/// use lokalise_cli::api::ExportOptions;
///
/// let options = ExportOptions::new()
///     .languages(["en", "fr"])?
///     .use_original(false)
///     .sort_order("a_z")?;
/// # Ok::<(), lokalise_cli::api::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    set: OptionSet,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self {
            set: OptionSet::new(EXPORT_OPTIONS),
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

    /// The webhook URL, if one was set.
    pub fn webhook_url(&self) -> Option<&str> {
        match self.set.get("webhook_url") {
            Some(OptionValue::Str(url)) if !url.is_empty() => Some(url),
            _ => None,
        }
    }

    fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Result<Self> {
        self.set.set(name, value)?;
        Ok(self)
    }

    // Only for bool and unrestricted string slots, which accept every value
    // of their kind. List slots go through `with`.
    fn with_any(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        let result = self.set.set(name, value);
        debug_assert!(result.is_ok(), "{name} rejected a value: {result:?}");
        self
    }

    /// Languages to export. All languages are exported when omitted.
    pub fn languages<I, S>(self, languages: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with("langs", collect(languages))
    }

    /// Use the original filenames and formats.
    #[must_use]
    pub fn use_original(self, enabled: bool) -> Self {
        self.with_any("use_original", enabled)
    }

    /// Restrict the exported range. See [`FILTERS`].
    pub fn filter<I, S>(self, filters: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with("filter", collect(filters))
    }

    /// Bundle layout when `use_original` is off, e.g. `locale/%LANG_ISO%.%FORMAT%`.
    #[must_use]
    pub fn bundle_structure(self, structure: impl Into<String>) -> Self {
        self.with_any("bundle_structure", structure.into())
    }

    /// Directory prefix when `use_original` is on, e.g. `%LANG_ISO%/`.
    #[must_use]
    pub fn directory_prefix(self, prefix: impl Into<String>) -> Self {
        self.with_any("directory_prefix", prefix.into())
    }

    /// URL the server POSTs `file=<bundle path>` to once the export is ready.
    ///
    /// When set, the returned [`crate::api::Bundle`] has an empty `full_file`.
    #[must_use]
    pub fn webhook(self, url: impl Into<String>) -> Self {
        self.with_any("webhook_url", url.into())
    }

    /// Include keys of all platforms.
    #[must_use]
    pub fn export_all(self, enabled: bool) -> Self {
        self.with_any("export_all", enabled)
    }

    /// How empty translations are exported. See [`EMPTY_MODES`].
    pub fn empty(self, mode: impl Into<String>) -> Result<Self> {
        self.with("export_empty", mode.into())
    }

    /// Include key comments and descriptions, where the format supports them.
    #[must_use]
    pub fn comments(self, enabled: bool) -> Self {
        self.with_any("include_comments", enabled)
    }

    /// Include key descriptions only.
    #[must_use]
    pub fn description(self, enabled: bool) -> Self {
        self.with_any("include_description", enabled)
    }

    /// Other project IDs whose keys are included in this export.
    pub fn project_ids<I, S>(self, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with("include_pids", collect(ids))
    }

    /// Only export keys carrying one of these tags.
    pub fn include_tags<I, S>(self, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with("include_tags", collect(tags))
    }

    /// Skip keys carrying one of these tags.
    pub fn exclude_tags<I, S>(self, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with("exclude_tags", collect(tags))
    }

    /// Key sort order. See [`SORT_ORDERS`].
    pub fn sort_order(self, order: impl Into<String>) -> Result<Self> {
        self.with("export_sort", order.into())
    }

    /// Key/value separator for `.properties` files.
    pub fn java_properties_separator(self, separator: impl Into<String>) -> Result<Self> {
        self.with("java_properties_separator", separator.into())
    }

    /// Encoding for `.properties` files.
    pub fn java_properties_encoding(self, encoding: impl Into<String>) -> Result<Self> {
        self.with("java_properties_encoding", encoding.into())
    }

    /// Replace `\n` with real line breaks.
    #[must_use]
    pub fn replace_breaks(self, enabled: bool) -> Self {
        self.with_any("replace_breaks", enabled)
    }

    /// Use the language code as root key (YAML only).
    #[must_use]
    pub fn yaml_root(self, enabled: bool) -> Self {
        self.with_any("yaml_include_root", enabled)
    }

    /// Leave forward slashes unescaped (JSON only).
    #[must_use]
    pub fn json_unescaped_slashes(self, enabled: bool) -> Self {
        self.with_any("json_unescaped_slashes", enabled)
    }

    /// Legacy switch for dropping language folders; prefer an empty `directory_prefix`.
    #[must_use]
    pub fn no_language_folders(self, enabled: bool) -> Self {
        self.with_any("no_language_folders", enabled)
    }

    /// Integration exports to trigger. See [`TRIGGERS`].
    pub fn triggers<I, S>(self, triggers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with("triggers", collect(triggers))
    }

    /// Repositories that receive pull requests from triggered integrations.
    pub fn repos<I, S>(self, repos: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with("repos", collect(repos))
    }

    /// Override the plural format of the file type.
    pub fn plural_format(self, format: impl Into<String>) -> Result<Self> {
        self.with("plural_format", format.into())
    }

    /// Write `=0`, `=1`, `=2` instead of `zero`, `one`, `two` (ICU plurals only).
    #[must_use]
    pub fn icu_numeric(self, enabled: bool) -> Self {
        self.with_any("icu_numeric", enabled)
    }

    /// Always write universal percent placeholders as `%%` (printf only).
    #[must_use]
    pub fn escape_percent(self, enabled: bool) -> Self {
        self.with_any("escape_percent", enabled)
    }

    /// Override the indentation of supported formats.
    pub fn indentation(self, indentation: impl Into<String>) -> Result<Self> {
        self.with("indentation", indentation.into())
    }

    /// Override the placeholder format of the file type.
    pub fn placeholder_format(self, format: impl Into<String>) -> Result<Self> {
        self.with("placeholder_format", format.into())
    }
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::Error;
    use crate::api::options::OptionKind;

    fn pairs(options: &ExportOptions) -> Vec<(&'static str, String)> {
        options.as_set().pairs().collect()
    }

    #[test]
    fn test_default_has_no_fields() {
        assert!(pairs(&ExportOptions::new()).is_empty());
        assert!(ExportOptions::default().webhook_url().is_none());
    }

    #[test]
    fn test_every_bool_slot_encodes_one_and_zero() {
        for spec in EXPORT_OPTIONS.iter().filter(|s| s.kind == OptionKind::Bool) {
            let mut options = ExportOptions::new();
            options.set(spec.name, true).unwrap();
            assert_eq!(pairs(&options), vec![(spec.name, "1".to_string())]);
            options.set(spec.name, false).unwrap();
            assert_eq!(pairs(&options), vec![(spec.name, "0".to_string())]);
        }
    }

    #[test]
    fn test_every_restricted_slot_rejects_unknown_value() {
        for spec in EXPORT_OPTIONS.iter().filter(|s| s.allowed.is_some()) {
            let mut options = ExportOptions::new();
            let value = match spec.kind {
                OptionKind::List => OptionValue::List(vec!["not-a-value".to_string()]),
                _ => OptionValue::Str("not-a-value".to_string()),
            };
            let err = options.set(spec.name, value).unwrap_err();
            assert!(matches!(err, Error::NotAllowed { .. }), "{}", spec.name);
            assert!(pairs(&options).is_empty(), "{}", spec.name);
        }
    }

    #[test]
    fn test_every_restricted_slot_accepts_its_values() {
        for spec in EXPORT_OPTIONS.iter().filter(|s| s.allowed.is_some()) {
            for allowed in spec.allowed.unwrap() {
                let mut options = ExportOptions::new();
                let value = match spec.kind {
                    OptionKind::List => OptionValue::List(vec![(*allowed).to_string()]),
                    _ => OptionValue::Str((*allowed).to_string()),
                };
                options.set(spec.name, value).unwrap();
            }
        }
    }

    #[test]
    fn test_builder_emits_in_table_order() {
        let options = ExportOptions::new()
            .placeholder_format("icu")
            .unwrap()
            .use_original(false)
            .languages(["en", " fr "])
            .unwrap()
            .filter(["translated", "reviewed"])
            .unwrap();

        assert_eq!(
            pairs(&options),
            vec![
                ("langs", "['en','fr']".to_string()),
                ("use_original", "0".to_string()),
                ("filter", "['translated','reviewed']".to_string()),
                ("placeholder_format", "icu".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_triggers_are_rejected() {
        let err = ExportOptions::new()
            .triggers(["github", "svn"])
            .unwrap_err();
        assert!(err.to_string().contains("'svn' not allowed"));
    }

    #[test]
    fn test_webhook_is_exposed() {
        let options = ExportOptions::new().webhook("https://example.com/hook");
        assert_eq!(options.webhook_url(), Some("https://example.com/hook"));

        let blank = ExportOptions::new().webhook("   ");
        assert!(blank.webhook_url().is_none());
    }

    #[test]
    fn test_blank_webhook_is_not_sent() {
        let options = ExportOptions::new().webhook("   ");

        assert!(options.webhook_url().is_none());
        assert!(!options.as_set().is_set("webhook_url"));
        assert!(pairs(&options).is_empty());
    }

    #[test]
    fn test_list_builder_rejects_quote() {
        let err = ExportOptions::new().include_tags(["it's"]).unwrap_err();
        assert!(matches!(err, crate::api::Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_set_raw_from_flags() {
        let mut options = ExportOptions::new();
        options.set_raw("include_tags", "ios,release").unwrap();
        options.set_raw("export_all", "1").unwrap();
        assert_eq!(
            pairs(&options),
            vec![
                ("export_all", "1".to_string()),
                ("include_tags", "['ios','release']".to_string()),
            ]
        );
    }
}
