//! domsplit command-line entry point

use clap::Parser;
use domsplit_cli::{commands::Commands, CliResult};

/// Split domain names into words and camel-case them
#[derive(Debug, Parser)]
#[command(name = "domsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process() {
        let cli = Cli::try_parse_from([
            "domsplit", "process", "-d", "bestpizza.com", "-d", "aiapp.io", "-f", "json", "-vv",
        ])
        .unwrap();
        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.domains, vec!["bestpizza.com", "aiapp.io"]);
                assert_eq!(args.verbose, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_lexicon_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "domsplit",
            "process",
            "-d",
            "a.com",
            "--lexicon",
            "en",
            "--lexicon-config",
            "x.toml",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_min_confidence_range() {
        let parsed =
            Cli::try_parse_from(["domsplit", "process", "-d", "a.com", "--min-confidence", "101"]);
        assert!(parsed.is_err());
    }
}
