mod commands;

use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use samship_core::Environment;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "samship",
    about = "Deploy packaged applications to AWS Lambda with the SAM CLI"
)]
#[command(version)]
struct Cli {
    /// Path to the application artifacts (must contain dist/manifest.json)
    #[arg(long)]
    artifact_path: PathBuf,
    /// Target environment
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(Environment::ALL.map(|e| e.as_str()))
            .try_map(|s| s.parse::<Environment>())
    )]
    environment: Environment,
    /// Deploy without change set confirmation
    #[arg(long)]
    no_confirm: bool,
    /// Show the resolved parameters and sam commands without running them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();

    let options = commands::DeployOptions {
        artifact_path: cli.artifact_path,
        environment: cli.environment,
        confirm_changeset: !cli.no_confirm,
        dry_run: cli.dry_run,
    };

    match commands::deploy(&options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
