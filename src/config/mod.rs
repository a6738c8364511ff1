pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vero-convert")]
#[command(about = "Convert Finnish tax statistics JSON exports to CSV")]
pub struct CliConfig {
    #[arg(long, default_value = "./data/full-finland-rest.json")]
    pub input_path: String,

    #[arg(long, default_value = "./output-rest.csv")]
    pub output_path: String,

    /// Path to a TOML configuration file. Overrides the path flags.
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system resource monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_file_extension("input_path", &self.input_path, "json")?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_file_extension("output_path", &self.output_path, "csv")?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn config(input: &str, output: &str) -> CliConfig {
        CliConfig {
            input_path: input.to_string(),
            output_path: output.to_string(),
            config: None,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_default_paths_validate() {
        assert!(config("./data/full-finland-rest.json", "./output-rest.csv")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_wrong_extensions_rejected() {
        assert!(config("./data/records.csv", "./out.csv").validate().is_err());
        assert!(config("./data/records.json", "./out.json")
            .validate()
            .is_err());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(config("", "./out.csv").validate().is_err());
    }
}
