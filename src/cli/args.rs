use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lokalise")]
#[command(about = "Upload and download Lokalise language files")]
#[command(version)]
pub struct Args {
    /// API token, available on your Lokalise account page
    #[arg(long, global = true, env = "LOKALISE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Load configuration from FILE (default: ~/.lokalise/lokalise.cfg, then /etc/lokalise.cfg)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// API base URL
    #[arg(long, global = true, env = "LOKALISE_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Base URL export bundles are downloaded from
    #[arg(long, global = true, env = "LOKALISE_ASSET_URL", hide = true)]
    pub asset_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List your projects
    #[command(visible_alias = "l")]
    List,

    /// Download language files
    #[command(visible_alias = "d")]
    Export(ExportArgs),

    /// Upload language files
    #[command(visible_alias = "u")]
    Import(ImportArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct ExportArgs {
    /// Project ID (default: 'project' from the config file)
    #[arg(env = "LOKALISE_PROJECT")]
    pub project: Option<String>,

    /// File format to export, e.g. json, yaml, strings, xml
    #[arg(long = "type", value_name = "TYPE")]
    pub file_type: Option<String>,

    /// Directory the .zip bundle is saved to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,

    /// Unzip the bundle into this directory and remove the .zip
    #[arg(long = "unzip_to", value_name = "DIR")]
    pub unzip_to: Option<PathBuf>,

    /// Keep the .zip after --unzip_to (0/1)
    #[arg(long = "keep_zip", value_name = "0/1")]
    pub keep_zip: Option<String>,

    /// Languages to include, comma separated (default: all)
    #[arg(long)]
    pub langs: Option<String>,

    /// Use original filenames/formats (0/1)
    #[arg(long = "use_original", value_name = "0/1")]
    pub use_original: Option<String>,

    /// Filter: translated, nonfuzzy, nonhidden, reviewed, proofread (comma separated)
    #[arg(long)]
    pub filter: Option<String>,

    /// Bundle file structure, used with --use_original=0
    #[arg(long = "bundle_structure")]
    pub bundle_structure: Option<String>,

    /// Directory prefix in the bundle, used with --use_original=1
    #[arg(long = "directory_prefix")]
    pub directory_prefix: Option<String>,

    /// URL that receives POST['file'] when the export is ready
    #[arg(long = "webhook_url", value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Include all platform keys (0/1)
    #[arg(long = "export_all", value_name = "0/1")]
    pub export_all: Option<String>,

    /// How to export empty strings: empty, base, skip
    #[arg(long = "export_empty")]
    pub export_empty: Option<String>,

    /// Include key comments and descriptions (0/1)
    #[arg(long = "include_comments", value_name = "0/1")]
    pub include_comments: Option<String>,

    /// Include key descriptions only (0/1)
    #[arg(long = "include_description", value_name = "0/1")]
    pub include_description: Option<String>,

    /// Other project IDs whose keys are included, comma separated
    #[arg(long = "include_pids")]
    pub include_pids: Option<String>,

    /// Deprecated, use --include_tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Only include keys with these tags, comma separated
    #[arg(long = "include_tags")]
    pub include_tags: Option<String>,

    /// Exclude keys with these tags, comma separated
    #[arg(long = "exclude_tags")]
    pub exclude_tags: Option<String>,

    /// Key sort order: first_added, last_added, last_updated, a_z, z_a
    #[arg(long = "export_sort")]
    pub export_sort: Option<String>,

    /// Separator for .properties files: '=' or ':'
    #[arg(long = "java_properties_separator")]
    pub java_properties_separator: Option<String>,

    /// Encoding for .properties files: utf-8, latin-1
    #[arg(long = "java_properties_encoding")]
    pub java_properties_encoding: Option<String>,

    /// Replace \n with line breaks (0/1)
    #[arg(long = "replace_breaks", value_name = "0/1")]
    pub replace_breaks: Option<String>,

    /// Include the language code as root key in YAML exports (0/1)
    #[arg(long = "yaml_include_root", value_name = "0/1")]
    pub yaml_include_root: Option<String>,

    /// Leave forward slashes unescaped in JSON exports (0/1)
    #[arg(long = "json_unescaped_slashes", value_name = "0/1")]
    pub json_unescaped_slashes: Option<String>,

    /// Don't use language folders (0/1)
    #[arg(long = "no_language_folders", value_name = "0/1")]
    pub no_language_folders: Option<String>,

    /// Integration exports to trigger: amazons3, gcs, github, gitlab, bitbucket (comma separated)
    #[arg(long)]
    pub triggers: Option<String>,

    /// Repositories for triggered integrations, comma separated (default: all)
    #[arg(long)]
    pub repos: Option<String>,

    /// Plural format: json_string, icu, array, generic, symfony
    #[arg(long = "plural_format")]
    pub plural_format: Option<String>,

    /// Use =0, =1, =2 instead of zero, one, two in ICU plurals (0/1)
    #[arg(long = "icu_numeric", value_name = "0/1")]
    pub icu_numeric: Option<String>,

    /// Always export universal percent placeholders as %% (0/1)
    #[arg(long = "escape_percent", value_name = "0/1")]
    pub escape_percent: Option<String>,

    /// Indentation: 1sp..8sp, tab
    #[arg(long)]
    pub indentation: Option<String>,

    /// Placeholder format: printf, ios, icu, net, symfony
    #[arg(long = "placeholder_format")]
    pub placeholder_format: Option<String>,
}

impl ExportArgs {
    /// Option flags keyed by wire name, in declaration order.
    pub fn option_flags(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("langs", self.langs.as_deref()),
            ("use_original", self.use_original.as_deref()),
            ("filter", self.filter.as_deref()),
            ("bundle_structure", self.bundle_structure.as_deref()),
            ("directory_prefix", self.directory_prefix.as_deref()),
            ("webhook_url", self.webhook_url.as_deref()),
            ("export_all", self.export_all.as_deref()),
            ("export_empty", self.export_empty.as_deref()),
            ("include_comments", self.include_comments.as_deref()),
            ("include_description", self.include_description.as_deref()),
            ("include_pids", self.include_pids.as_deref()),
            ("include_tags", self.include_tags.as_deref()),
            ("exclude_tags", self.exclude_tags.as_deref()),
            ("export_sort", self.export_sort.as_deref()),
            (
                "java_properties_separator",
                self.java_properties_separator.as_deref(),
            ),
            (
                "java_properties_encoding",
                self.java_properties_encoding.as_deref(),
            ),
            ("replace_breaks", self.replace_breaks.as_deref()),
            ("yaml_include_root", self.yaml_include_root.as_deref()),
            ("json_unescaped_slashes", self.json_unescaped_slashes.as_deref()),
            ("no_language_folders", self.no_language_folders.as_deref()),
            ("triggers", self.triggers.as_deref()),
            ("repos", self.repos.as_deref()),
            ("plural_format", self.plural_format.as_deref()),
            ("icu_numeric", self.icu_numeric.as_deref()),
            ("escape_percent", self.escape_percent.as_deref()),
            ("indentation", self.indentation.as_deref()),
            ("placeholder_format", self.placeholder_format.as_deref()),
        ]
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct ImportArgs {
    /// Project ID (default: 'project' from the config file)
    #[arg(env = "LOKALISE_PROJECT")]
    pub project: Option<String>,

    /// File, or comma-separated files and masks, to upload (quote masks: 'locale/*.json')
    #[arg(long)]
    pub file: Option<String>,

    /// Language of the translations in the uploaded files
    #[arg(long = "lang_iso", value_name = "ISO")]
    pub lang_iso: Option<String>,

    /// Replace existing translations (0/1)
    #[arg(long, value_name = "0/1")]
    pub replace: Option<String>,

    /// Convert placeholders to universal ones (0/1)
    #[arg(long = "convert_placeholders", value_name = "0/1")]
    pub convert_placeholders: Option<String>,

    /// Detect and parse ICU formatted plurals (0/1)
    #[arg(long = "icu_plurals", value_name = "0/1")]
    pub icu_plurals: Option<String>,

    /// Copy keys into empty values (0/1)
    #[arg(long = "fill_empty", value_name = "0/1")]
    pub fill_empty: Option<String>,

    /// Distinguish similar keys in different files (0/1)
    #[arg(long, value_name = "0/1")]
    pub distinguish: Option<String>,

    /// Hide imported keys from contributors (0/1)
    #[arg(long, value_name = "0/1")]
    pub hidden: Option<String>,

    /// Use translation memory to fill 100% matches (0/1)
    #[arg(long = "use_trans_mem", value_name = "0/1")]
    pub use_trans_mem: Option<String>,

    /// Tags for newly imported keys, comma separated
    #[arg(long)]
    pub tags: Option<String>,

    /// Replace \n with line breaks (0/1)
    #[arg(long = "replace_breaks", value_name = "0/1")]
    pub replace_breaks: Option<String>,

    /// Delete keys missing from the uploaded files (0/1)
    #[arg(long = "cleanup_mode", value_name = "0/1")]
    pub cleanup_mode: Option<String>,

    /// Send each file's relative path as its filename (0/1)
    #[arg(long = "include_path", value_name = "0/1")]
    pub include_path: Option<String>,
}

impl ImportArgs {
    /// Option flags keyed by wire name, in declaration order.
    pub fn option_flags(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("replace", self.replace.as_deref()),
            ("convert_placeholders", self.convert_placeholders.as_deref()),
            ("icu_plurals", self.icu_plurals.as_deref()),
            ("fill_empty", self.fill_empty.as_deref()),
            ("distinguish", self.distinguish.as_deref()),
            ("hidden", self.hidden.as_deref()),
            ("use_trans_mem", self.use_trans_mem.as_deref()),
            ("tags", self.tags.as_deref()),
            ("replace_breaks", self.replace_breaks.as_deref()),
            ("cleanup_mode", self.cleanup_mode.as_deref()),
        ]
    }
}
