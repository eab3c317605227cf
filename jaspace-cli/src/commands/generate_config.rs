//! Generate config command implementation

use crate::config::DEFAULT_CONFIG_FILE;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
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
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the paths, exclusions and extensions to match your project");
        println!("2. Preview the changes:");
        println!(
            "   jaspace fix --dry-run --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# jaspace configuration

[discovery]
# Files, directories (walked recursively) or glob patterns
paths = ["."]

# Skip any file whose path contains one of these substrings
exclude = ["externals"]

# Extensions to process, without the dot
extensions = ["cpp", "h"]

[output]
# "text" or "json"
format = "text"

# Print per-line diffs even when writing changes
show_diff = false

[performance]
# Worker threads (0 = number of CPUs)
worker_threads = 0
"#
    }
}
