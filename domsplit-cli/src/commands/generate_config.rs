//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Lexicon code for the new configuration
    #[arg(short = 'c', long, value_name = "CODE", required = true)]
    pub lexicon_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon configuration template...");
        println!("  Lexicon code: {}", self.lexicon_code);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add your words, acronyms and suffixes");
        println!("2. Validate your configuration:");
        println!(
            "   domsplit validate --lexicon-config {}",
            self.output.display()
        );
        println!("3. Use it for processing:");
        println!(
            "   domsplit process -i domains.txt --lexicon-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Lexicon configuration for {code}
#
# Entries are lower-case ASCII letters; digit runs always stay literal.

[metadata]
code = "{code}"
name = "Custom Lexicon"

# Rendered upper-case wherever they appear: seotools -> seoTools -> SEOTools
[acronyms]
entries = ["seo", "gpt", "api"]

# Added to the built-in stop words (a, the, and, of, ...) that are left out
# of word statistics and the word cloud
[stop_words]
entries = ["via", "per"]

# Multi-label public suffixes; anything else uses the last label as TLD
[suffixes]
compound = ["co.uk", "com.au"]

# Tiers list words most common first. A word's rank is its position across
# all tiers, and lower ranks win when two splits are otherwise equal.
[[tiers]]
name = "core"
words = ["best", "shop", "cloud", "app"]

[[tiers]]
name = "extended"
words = ["pizza", "fitness", "hour"]
"#,
            code = self.lexicon_code
        )
    }
}
