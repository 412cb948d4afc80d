//! Validate command implementation

use anyhow::Result;
use clap::Args;
use gendex_core::{ConfigurableLanguageRules, LanguageRules};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to segmentation rules file to validate
    #[arg(short = 'l', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match ConfigurableLanguageRules::from_file(&self.language_config) {
            Ok(rules) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", rules.code());
                println!("  Language name: {}", rules.language_name());
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
