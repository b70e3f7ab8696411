mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_coverage=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config = cli::load_config(cli.config.as_deref(), cli.source, cli.docs_dir)?;

    let passed = match cli.command {
        Commands::Check { all, format } => cli::run_checks(config, all, &format)?,
        Commands::Facts { format } => {
            cli::show_facts(config, &format)?;
            true
        }
        Commands::Scan { file, components } => {
            cli::scan_document(&file, components)?;
            true
        }
        Commands::Candidate { name } => {
            cli::check_candidate(config, &name)?;
            true
        }
        Commands::Coverage { format } => cli::show_coverage(config, &format)?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
