use clap::Parser;

use lokalise_cli::cli::commands::{GlobalOptions, export, import, list};
use lokalise_cli::cli::{Args, Command, exit_code};
use lokalise_cli::logging;
use lokalise_cli::output::{self, OutputConfig};
use lokalise_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    if let Err(err) = run(args).await {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let global = GlobalOptions {
        token: args.token,
        config: args.config,
        api_url: args.api_url,
        asset_url: args.asset_url,
    };

    match args.command {
        Command::List => list::run_list(&global).await,
        Command::Export(export_args) => export::run_export(&global, export_args).await,
        Command::Import(import_args) => import::run_import(&global, import_args).await,
    }
}
