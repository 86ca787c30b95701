use anyhow::Result;
use std::path::Path;

use super::{GlobalOptions, Session};
use crate::api::{ImportOptions, OptionKind, OptionValue};
use crate::cli::{ImportArgs, UsageError};
use crate::fs::expand_masks;
use crate::ui::{Spinner, Style};

pub async fn run_import(global: &GlobalOptions, args: ImportArgs) -> Result<()> {
    let options = import_options(&args)?;
    let include_path = include_path_flag(&args)?;
    let masks = required(args.file.as_deref(), "--file is required, e.g. --file 'locale/*.json'")?;
    let lang_iso = required(args.lang_iso.as_deref(), "--lang_iso is required, e.g. --lang_iso en")?;

    let files = expand_masks(masks).map_err(|err| UsageError::new(format!("{err:#}")))?;
    if files.is_empty() {
        return Err(UsageError::new(format!("no files matched '{masks}'")).into());
    }

    let session = Session::connect(global, args.project.clone())?;
    let project = session.config.project()?;

    for path in &files {
        let file_opts = file_options(&options, path, include_path);
        let spinner = Spinner::new(format!("Uploading {}...", path.display()));
        let result = session
            .client
            .import(&session.config.token, project, path, lang_iso, &file_opts)
            .await?;
        spinner.stop();

        crate::status!("{}", Style::header(path.display()));
        println!(
            "{} {}  {} {}  {} {}",
            Style::label("inserted"),
            Style::success(result.inserted),
            Style::label("updated"),
            Style::success(result.updated),
            Style::label("skipped"),
            Style::success(result.skipped),
        );
    }
    Ok(())
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| UsageError::new(message).into())
}

/// Builds import options from the flags that were given.
fn import_options(args: &ImportArgs) -> Result<ImportOptions> {
    let mut options = ImportOptions::new();
    for (name, raw) in args.option_flags() {
        if let Some(raw) = raw {
            options.set_raw(name, raw)?;
        }
    }
    Ok(options)
}

fn include_path_flag(args: &ImportArgs) -> Result<bool> {
    let Some(raw) = args.include_path.as_deref() else {
        return Ok(false);
    };
    let value = OptionValue::parse("include_path", OptionKind::Bool, raw)?;
    Ok(value == OptionValue::Bool(true))
}

/// Per-file options: with `include_path`, the path is sent as `filename`.
fn file_options(options: &ImportOptions, path: &Path, include_path: bool) -> ImportOptions {
    if include_path {
        options
            .clone()
            .filename(path.to_string_lossy().replace('\\', "/"))
    } else {
        options.clone()
    }
}
