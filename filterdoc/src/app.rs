//! Core application

use anyhow::{Context, Result};

use crate::api::{registry_document, render_fields, render_lookups};
use crate::core::cli::{self, Commands};
use crate::core::config::{AppConfig, OutputFormat};
use crate::core::constants::{APP_NAME, ENV_LOG};
use crate::domain::filters::FilterRegistry;

pub struct CoreApp {
    pub config: AppConfig,
    pub registry: FilterRegistry,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let config = AppConfig::load(&cli_config)?;
        let output = Self::execute(config, command)?;
        println!("{}", output.trim_end());
        Ok(())
    }

    /// Run one command and return what it prints.
    ///
    /// Filter definitions are only loaded by commands that document them.
    pub fn execute(config: AppConfig, command: Commands) -> Result<String> {
        match command {
            Commands::Fields { endpoint } => Self::init(config)?.fields(endpoint.as_deref()),
            Commands::Openapi => Self::init(config)?.openapi(),
            Commands::Lookups => render_lookups(config.format),
        }
    }

    pub fn init(config: AppConfig) -> Result<Self> {
        let registry = FilterRegistry::load(&config.filters, &config.separator)
            .with_context(|| {
                format!(
                    "Failed to load filter definitions: {}",
                    config.filters.display()
                )
            })?;
        tracing::info!(
            endpoints = registry.len(),
            path = %config.filters.display(),
            "Filter definitions ready"
        );
        Ok(Self { config, registry })
    }

    pub fn fields(&self, endpoint: Option<&str>) -> Result<String> {
        if let Some(endpoint) = endpoint
            && self.registry.get(endpoint).is_none()
        {
            tracing::warn!(endpoint, "Endpoint has no declared filters");
        }
        render_fields(
            &self.registry,
            endpoint,
            self.config.format,
            &self.config.openapi,
        )
    }

    pub fn openapi(&self) -> Result<String> {
        if self.config.format != OutputFormat::Openapi {
            tracing::debug!(
                format = %self.config.format,
                "Ignoring output format for openapi command"
            );
        }
        let document = registry_document(&self.config.openapi, &self.registry);
        Ok(document.to_pretty_json()?)
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }
}
