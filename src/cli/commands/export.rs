use anyhow::{Context, Result};
use std::fs;

use super::{GlobalOptions, Session};
use crate::api::{ExportOptions, OptionKind, OptionValue};
use crate::cli::{ExportArgs, UsageError};
use crate::ui::{Spinner, Style};

pub async fn run_export(global: &GlobalOptions, args: ExportArgs) -> Result<()> {
    let options = export_options(&args)?;
    let keep_zip = keep_zip_flag(&args)?;
    let file_type = args
        .file_type
        .as_deref()
        .map(str::trim)
        .filter(|file_type| !file_type.is_empty())
        .ok_or_else(|| UsageError::new("--type is required, e.g. --type json"))?;

    let session = Session::connect(global, args.project.clone())?;
    let project = session.config.project()?;

    let spinner = Spinner::new(format!("Exporting {project} as {file_type}..."));
    let bundle = session
        .client
        .export(&session.config.token, project, file_type, &options)
        .await?;

    if let Some(webhook) = options.webhook_url() {
        spinner.stop();
        crate::status!(
            "{} {} will receive the bundle when it is ready",
            Style::success("Export queued:"),
            Style::value(webhook)
        );
        return Ok(());
    }
    if bundle.full_file.is_empty() {
        spinner.stop();
        crate::warning!("export finished but the server returned no bundle location");
        return Ok(());
    }

    spinner.set_message("Downloading bundle...");
    fs::create_dir_all(&args.dest)
        .with_context(|| format!("Failed to create directory: {}", args.dest.display()))?;
    let path = session.client.download(&bundle.full_file, &args.dest).await?;
    spinner.stop();

    crate::status!("{} {}", Style::success("Saved"), Style::value(path.display()));

    let Some(unzip_to) = &args.unzip_to else {
        return Ok(());
    };
    let files = crate::fs::unzip(&path, unzip_to).context("Error unzipping files")?;
    let names: Vec<_> = files.iter().map(|file| file.display().to_string()).collect();
    crate::status!("{} {}", Style::success("Unzipped"), Style::value(names.join(", ")));
    if !keep_zip {
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove bundle: {}", path.display()))?;
    }
    Ok(())
}

fn keep_zip_flag(args: &ExportArgs) -> Result<bool> {
    let Some(raw) = args.keep_zip.as_deref() else {
        return Ok(false);
    };
    let value = OptionValue::parse("keep_zip", OptionKind::Bool, raw)?;
    Ok(value == OptionValue::Bool(true))
}

/// Builds export options from the flags that were given.
fn export_options(args: &ExportArgs) -> Result<ExportOptions> {
    let mut options = ExportOptions::new();

    if let Some(tags) = &args.tags {
        crate::warning!("--tags is deprecated, use --include_tags");
        if args.include_tags.is_none() {
            options.set_raw("include_tags", tags)?;
        }
    }
    for (name, raw) in args.option_flags() {
        if let Some(raw) = raw {
            options.set_raw(name, raw)?;
        }
    }
    Ok(options)
}
