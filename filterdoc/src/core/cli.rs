use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::config::OutputFormat;
use super::constants::{ENV_CONFIG, ENV_FILTERS, ENV_FORMAT, ENV_SEPARATOR};

#[derive(Parser)]
#[command(name = "filterdoc")]
#[command(
    version,
    about = "Document the query parameters accepted by filter trees",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Path to the filter definitions file
    #[arg(long, short = 'f', global = true, env = ENV_FILTERS)]
    pub filters: Option<PathBuf>,

    /// Separator between segments of a parameter name
    #[arg(long, short = 's', global = true, env = ENV_SEPARATOR)]
    pub separator: Option<String>,

    /// Output format (json, text or openapi)
    #[arg(long, global = true, env = ENV_FORMAT, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,
}

/// Parse output format from CLI/env string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        "openapi" => Ok(OutputFormat::Openapi),
        _ => Err(format!(
            "Invalid output format '{}'. Valid options: json, text, openapi",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the query parameters of declared endpoints (default command)
    Fields {
        /// Only document this endpoint
        #[arg(long, short = 'e')]
        endpoint: Option<String>,
    },
    /// Print an OpenAPI document with the query parameters of every endpoint
    Openapi,
    /// List known lookups and their descriptions
    Lookups,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Fields { endpoint: None }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub filters: Option<PathBuf>,
    pub separator: Option<String>,
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Split parsed arguments into config overrides and the command to run
    pub fn into_parts(self) -> (CliConfig, Commands) {
        let config = CliConfig {
            config: self.config,
            filters: self.filters,
            separator: self.separator,
            format: self.format,
        };
        (config, self.command.unwrap_or_default())
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Commands) {
    Cli::parse().into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> (CliConfig, Commands) {
        Cli::try_parse_from(args).unwrap().into_parts()
    }

    #[test]
    fn test_default_command_is_fields() {
        let (config, command) = parse_from(&["filterdoc"]);
        assert_eq!(command, Commands::Fields { endpoint: None });
        assert!(config.config.is_none());
        assert!(config.format.is_none());
    }

    #[test]
    fn test_fields_endpoint_and_global_flags() {
        let (config, command) = parse_from(&[
            "filterdoc",
            "fields",
            "--endpoint",
            "/books",
            "--separator",
            ".",
            "--format",
            "TEXT",
            "-f",
            "defs.json",
        ]);
        assert_eq!(
            command,
            Commands::Fields {
                endpoint: Some("/books".to_string())
            }
        );
        assert_eq!(config.separator.as_deref(), Some("."));
        assert_eq!(config.format, Some(OutputFormat::Text));
        assert_eq!(config.filters, Some(PathBuf::from("defs.json")));
    }

    #[test]
    fn test_openapi_and_lookups_commands() {
        assert_eq!(parse_from(&["filterdoc", "openapi"]).1, Commands::Openapi);
        assert_eq!(parse_from(&["filterdoc", "lookups"]).1, Commands::Lookups);
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Cli::try_parse_from(["filterdoc", "--format", "yaml"]).is_err());
    }
}
