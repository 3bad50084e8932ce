//! `factmatrix`: replay recorded stake sequences and inspect the result.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "factmatrix")]
#[command(author, version, about = "Fact Matrix staking engine")]
struct Cli {
    /// Engine configuration (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scenario and print every stored fact.
    Replay {
        scenario: PathBuf,
        /// Check the scenario's expectations; exit non-zero on mismatch.
        #[arg(long)]
        verify: bool,
        #[arg(long)]
        json: bool,
    },
    /// Details of one fact after replay.
    Details(FactArgs),
    /// Legacy trust estimate for a fact, stored or not.
    Trust(FactArgs),
    /// Competitors, contradictions, and support paths for a fact.
    Analyze(FactArgs),
}

#[derive(Args)]
struct FactArgs {
    scenario: PathBuf,
    category1: String,
    value1: String,
    category2: String,
    value2: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = commands::load_config(cli.config.as_deref())?;
    factmatrix_observability::init_tracing(&config.observability);

    match cli.command {
        Commands::Replay {
            scenario,
            verify,
            json,
        } => commands::replay(config, &scenario, verify, json),
        Commands::Details(args) => {
            commands::details(config, &args.scenario, args.quad())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Trust(args) => {
            commands::trust(config, &args.scenario, args.quad())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Analyze(args) => {
            commands::analyze(config, &args.scenario, args.quad())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

impl FactArgs {
    fn quad(&self) -> factmatrix_core::FactQuad {
        factmatrix_core::FactQuad::new(
            self.category1.as_str(),
            self.value1.as_str(),
            self.category2.as_str(),
            self.value2.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_replay_flags() {
        let cli = Cli::try_parse_from([
            "factmatrix",
            "--config",
            "engine.toml",
            "replay",
            "s.json",
            "--verify",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("engine.toml")));
        match cli.command {
            Commands::Replay { verify, json, .. } => {
                assert!(verify);
                assert!(!json);
            }
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn fact_commands_take_four_parts() {
        let cli =
            Cli::try_parse_from(["factmatrix", "trust", "s.json", "Name", "Alex", "House", "Blue"])
                .unwrap();
        match cli.command {
            Commands::Trust(args) => assert_eq!(
                args.quad(),
                factmatrix_core::FactQuad::from(["Name", "Alex", "House", "Blue"])
            ),
            _ => panic!("expected trust"),
        }
        assert!(Cli::try_parse_from(["factmatrix", "details", "s.json", "Name"]).is_err());
    }
}
