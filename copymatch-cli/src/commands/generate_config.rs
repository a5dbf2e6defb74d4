//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust matching and output settings");
        println!("2. Validate it:");
        println!("   copymatch validate -c {}", self.output.display());
        println!("3. Use it:");
        println!(
            "   copymatch match essay.txt 'sources/*.txt' --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    fn template() -> &'static str {
        r#"# copymatch configuration
#
# Command-line flags take precedence over every value here.

[matching]
# Minimum number of consecutive words a passage must share (-l/--length)
window_size = 8
# Edit distance tolerated between two words, 0 = exact (-d/--distance)
distance = 0

[text]
# Rejoin words split by a hyphen at a line end when the joined word
# appears in the vocabulary; without a vocabulary no words are merged
merge_hyphenated = true
# Newline-separated word list; blank lines and # comments are ignored
# vocabulary = "words.txt"

[output]
# text, json or markdown (-f/--format)
default_format = "text"
pretty_json = true
# Longest excerpt printed by the text format, 0 = no limit
context_chars = 80

[performance]
# Worker threads, 0 = one per CPU (-t/--threads)
worker_threads = 0
# Always scan sources in parallel (-p/--parallel)
parallel = false
"#
    }
}
