//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub lexicon_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        use domsplit_core::Lexicon;

        println!(
            "Validating lexicon configuration: {}",
            self.lexicon_config.display()
        );

        match domsplit_core::load_lexicon_file(&self.lexicon_config) {
            Ok(lexicon) => {
                println!("✓ Configuration is valid!");
                println!("  Lexicon code: {}", lexicon.code());
                println!("  Lexicon name: {}", lexicon.name());
                println!("  Entries: {}", lexicon.entry_count());
                println!("  Acronyms: {}", lexicon.acronym_count());
                println!("  Stop words: {}", lexicon.stop_word_count());
                println!("  Compound suffixes: {}", lexicon.compound_suffixes().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
