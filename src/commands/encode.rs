//! Encode a card payload file into a share token and URL.

use clap::Args;
use serde::Serialize;

use cardlink_core::config::AppConfig;
use cardlink_core::error::AppError;
use cardlink_service::share::{SharePlan, ShareService};

use crate::output::{self, OutputFormat};

/// Arguments for the encode command
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Path to a payload JSON file ({"cardData": ..., "theme": ...})
    pub payload: String,
}

/// Encode command output
#[derive(Debug, Serialize)]
struct EncodeReport {
    /// The URL-safe token.
    token: String,
    /// The planned share.
    plan: SharePlan,
}

/// Execute the encode command
pub async fn execute(
    args: &EncodeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let payload = super::read_payload(&args.payload).await?;
    let token = cardlink_codec::encode(&payload).map_err(AppError::from)?;

    let service = ShareService::new(config.share.clone());
    let plan = service.plan_for_payload(&payload)?;

    match format {
        OutputFormat::Text => {
            output::print_kv("Token", &token);
            match &plan {
                SharePlan::DirectLink { url, .. } => {
                    output::print_kv("URL", url);
                    output::print_success("Link fits within the URL length budget");
                }
                SharePlan::FallbackText { url, text, .. } => {
                    output::print_kv("Base URL", url);
                    output::print_kv("Fallback text", text);
                    output::print_warning(
                        "Full link exceeds the URL length budget; share the fallback text instead",
                    );
                }
            }
        }
        OutputFormat::Json => {
            output::print_item(&EncodeReport { token, plan }, format);
        }
    }

    Ok(())
}
