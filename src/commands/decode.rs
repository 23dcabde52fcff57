//! Decode a share token or URL back into a payload.

use clap::Args;

use cardlink_core::config::AppConfig;
use cardlink_core::error::AppError;
use cardlink_service::inbound::{InboundLinkHandler, InboundOutcome};

use crate::output::{self, OutputFormat};

/// Arguments for the decode command
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// A bare share token, or a full share URL with a card parameter
    pub input: String,
}

/// Execute the decode command
pub async fn execute(
    args: &DecodeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    // Full URLs go through the inbound handler so the output mirrors what
    // a recipient's page load would do.
    if args.input.contains("://") {
        let handler = InboundLinkHandler::new(&config.share);
        match handler.handle(&args.input).await? {
            InboundOutcome::NoToken => {
                output::print_warning("URL carries no card parameter");
            }
            InboundOutcome::Presented {
                payload,
                cleaned_url,
            } => {
                output::print_item(&payload, format);
                output::print_kv("Cleaned URL", &cleaned_url);
            }
            InboundOutcome::Invalid {
                notice,
                cleaned_url,
            } => {
                output::print_error(&notice);
                output::print_kv("Cleaned URL", &cleaned_url);
                return Err(AppError::validation("Malformed share link"));
            }
        }
        return Ok(());
    }

    let payload = cardlink_codec::decode(&args.input).map_err(AppError::from)?;
    output::print_item(&payload, format);
    Ok(())
}
