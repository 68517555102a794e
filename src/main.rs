use anyhow::{Context, Result};
use clap::Parser;
use rxiv_search::config::load_config;
use rxiv_search::sources::BiorxivSource;
use rxiv_search::ui::Console;
use rxiv_search::utils::{HttpClient, SystemBrowser};
use rxiv_search::RunOutcome;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// rxiv-search - find and open recent bioRxiv/medRxiv preprints
///
/// Prompts for a server, a number of days back (at most 3) and a search term,
/// lists the matching preprints and opens the chosen ones in your browser.
#[derive(Parser, Debug)]
#[command(name = "rxiv-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search recent bioRxiv/medRxiv preprints and open them in a browser", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file path (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn log_filter(&self) -> String {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        format!("rxiv_search={}", level)
    }
}

fn init_tracing(cli: &Cli) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_filter()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn try_main(cli: &Cli) -> Result<RunOutcome> {
    let config = load_config(cli.config.as_deref()).context("loading configuration")?;
    if let Some(path) = &cli.config {
        tracing::info!("Using config file: {}", path.display());
    }

    let client =
        HttpClient::with_timeout(config.api.timeout()).context("creating HTTP client")?;
    let source = BiorxivSource::with_base_url(client, &config.api.base_url);

    let color = config.display.color && std::io::stdout().is_terminal();
    let mut console = Console::stdio(color);
    let today = chrono::Local::now().date_naive();

    let outcome = rxiv_search::run(&mut console, &source, &SystemBrowser, today).await?;
    tracing::debug!(?outcome, "session finished");
    Ok(outcome)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match try_main(&cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["rxiv-search"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert_eq!(cli.log_filter(), "rxiv_search=warn");
    }

    #[test]
    fn test_cli_verbosity() {
        let cli = Cli::parse_from(["rxiv-search", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_filter(), "rxiv_search=debug");

        let cli = Cli::parse_from(["rxiv-search", "-vvvv"]);
        assert_eq!(cli.log_filter(), "rxiv_search=trace");

        let cli = Cli::parse_from(["rxiv-search", "--quiet"]);
        assert_eq!(cli.log_filter(), "rxiv_search=error");
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::parse_from(["rxiv-search", "--config", "rxiv.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("rxiv.toml")));
    }

    #[test]
    fn test_cli_rejects_subcommands_and_conflicts() {
        assert!(Cli::try_parse_from(["rxiv-search", "search", "cancer"]).is_err());
        assert!(Cli::try_parse_from(["rxiv-search", "-v", "-q"]).is_err());
    }
}
