//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment domain lists into camel-cased names with statistics
    Process(process::ProcessArgs),

    /// Show how a single SLD or domain is segmented
    Segment(segment::SegmentArgs),

    /// Validate a lexicon configuration file
    Validate(validate::ValidateArgs),

    /// Write a lexicon configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded lexicons
    Lexicons,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Segment(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.listing());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed by `list`
    pub fn listing(&self) -> String {
        match self {
            ListCommands::Lexicons => {
                let mut text = String::from("Embedded lexicons:\n");
                for (code, aliases) in domsplit_core::available_lexicons() {
                    if aliases.is_empty() {
                        text.push_str(&format!("  {code}\n"));
                    } else {
                        text.push_str(&format!("  {code} ({})\n", aliases.join(", ")));
                    }
                }
                text
            }
            ListCommands::Formats => "Output formats:\n  \
                 text      tab-separated line per domain\n  \
                 json      results and statistics as one JSON document\n  \
                 markdown  results and statistics as tables\n"
                .to_string(),
        }
    }
}
