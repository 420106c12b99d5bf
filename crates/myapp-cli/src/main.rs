use std::io;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use myapp::Greeter;

#[derive(Parser)]
#[command(name = "myapp", version, about = "Say hello, at length")]
struct Cli {
    /// Who to greet
    #[arg(default_value = "World")]
    name: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the greeting
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    let greeter = Greeter::new();
    info!(library = %greeter.library(), "starting");

    let stdout = io::stdout();
    let ok = greeter
        .write_to(&mut stdout.lock(), &cli.name)
        .context("failed to print greeting")?;
    info!(ok, "done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        let cli = Cli::try_parse_from(["myapp"]).unwrap();
        assert_eq!(cli.name, "World");
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_name_and_verbosity() {
        let cli = Cli::try_parse_from(["myapp", "-vv", "Ada"]).unwrap();
        assert_eq!(cli.name, "Ada");
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let cli = Cli::try_parse_from(["myapp", ""]).unwrap();
        assert_eq!(cli.name, "");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
