//! CLI command definitions and dispatch.

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod share;

use clap::{Parser, Subcommand};

use cardlink_core::config::AppConfig;
use cardlink_core::error::AppError;
use cardlink_entity::ShareableCardPayload;

use crate::output::OutputFormat;

/// CardLink — digital business card share links
#[derive(Debug, Parser)]
#[command(name = "cardlink", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment to load (config/<env>.toml overlay)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode a card payload file into a share token and URL
    Encode(encode::EncodeArgs),
    /// Decode a share token or URL back into a payload
    Decode(decode::DecodeArgs),
    /// Plan and deliver a share for a card payload file
    Share(share::ShareArgs),
    /// Show size and headroom details for a token
    Inspect(inspect::InspectArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Encode(args) => encode::execute(args, config, self.format).await,
            Commands::Decode(args) => decode::execute(args, config, self.format).await,
            Commands::Share(args) => share::execute(args, config, self.format).await,
            Commands::Inspect(args) => inspect::execute(args, config, self.format).await,
        }
    }
}

/// Helper: read and parse a payload JSON file
pub async fn read_payload(path: &str) -> Result<ShareableCardPayload, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::validation(format!("Cannot read '{path}': {e}")))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::validation(format!("'{path}' is not a valid card payload: {e}")))
}
