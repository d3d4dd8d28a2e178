//! CLI Tooling
//!
//! Command-line interface for the contact book. Every invocation starts from
//! an empty directory, seeded from configuration; nothing is persisted.

use crate::config::{ConfigLoader, ContactBookConfig};
use crate::error::ApiError;
use crate::session::{ContactBook, SearchOutcome};
use crate::tooling::format::{
    format_contacts_text, format_search_text, format_visualization_text,
};
use crate::tooling::shell;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Contactbook CLI - in-memory contact book backed by a linked list
#[derive(Parser)]
#[command(name = "contactbook")]
#[command(about = "In-memory contact book backed by a singly linked list")]
pub struct Cli {
    /// Command to run (default: interactive shell)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty book instead of the configured example contacts
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Enable verbose logging (sets log level to debug)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive form-driven shell
    Shell,
    /// List all contacts in insertion order
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Search contacts by name or phone
    Search {
        /// Name fragment or phone fragment
        term: String,
        /// Match whole names only (phone still matches by substring)
        #[arg(long)]
        exact: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the chain order of the linked list
    Viz,
    /// Print the effective configuration as TOML
    Config,
}

/// Output format for non-interactive commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// CLI context holding the loaded configuration and the session
pub struct CliContext {
    book: ContactBook,
    config: ContactBookConfig,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from `config_path` or the standard sources
    pub fn new(config_path: Option<PathBuf>, no_seed: bool) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::from_config(config, no_seed))
    }

    /// Create a context from an already loaded configuration
    pub fn from_config(config: ContactBookConfig, no_seed: bool) -> Self {
        let mut book = ContactBook::new();
        if config.seed.enabled && !no_seed {
            book.seed(config.seed.contacts.iter().cloned());
        }
        Self { book, config }
    }

    /// Effective configuration after all sources were merged
    pub fn config(&self) -> &ContactBookConfig {
        &self.config
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        info!(?command, "executing command");
        match command {
            Commands::Shell => shell::run(&mut self.book, &self.config.display),
            Commands::List { format } => self.handle_list(parse_format(format)?),
            Commands::Search {
                term,
                exact,
                format,
            } => self.handle_search(term, !exact, parse_format(format)?),
            Commands::Viz => Ok(format_visualization_text(
                &self.book.visualization(),
                &self.config.display,
            )),
            Commands::Config => Ok(toml::to_string_pretty(&self.config)?),
        }
    }

    fn handle_list(&self, format: OutputFormat) -> Result<String, ApiError> {
        let contacts = self.book.contacts();
        match format {
            OutputFormat::Text => Ok(format_contacts_text(&contacts, &self.config.display)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "count": self.book.count(),
                "contacts": contacts,
            }))?),
        }
    }

    fn handle_search(
        &self,
        term: &str,
        include_similar: bool,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let hits = match self.book.search(term, include_similar) {
            SearchOutcome::Cleared => Vec::new(),
            SearchOutcome::Hits(hits) => hits,
        };
        match format {
            OutputFormat::Text => Ok(format_search_text(&hits, &self.config.display)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "term": term.trim(),
                "include_similar": include_similar,
                "results": hits,
            }))?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from(["contactbook", "search", "juan", "--exact", "--no-seed"]);
        assert!(cli.no_seed);
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                term: "juan".to_string(),
                exact: true,
                format: "text".to_string(),
            })
        );

        let cli = Cli::parse_from(["contactbook"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_from_config_respects_no_seed() {
        let ctx = CliContext::from_config(ContactBookConfig::default(), true);
        assert_eq!(ctx.book().count(), 0);

        let ctx = CliContext::from_config(ContactBookConfig::default(), false);
        assert_eq!(ctx.book().count(), 5);
    }
}
