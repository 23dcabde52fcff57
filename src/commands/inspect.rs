//! Show size and headroom details for a token.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use clap::Args;
use serde::Serialize;

use cardlink_core::config::AppConfig;
use cardlink_core::error::AppError;
use cardlink_service::share::ShareUrlBuilder;

use crate::output::{self, OutputFormat};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// A bare share token
    pub token: String,
}

/// Inspection report for a token
#[derive(Debug, Serialize)]
struct InspectReport {
    /// Token length in characters.
    token_length: usize,
    /// Compressed payload size in bytes.
    compressed_bytes: usize,
    /// Decompressed JSON size in bytes.
    json_bytes: usize,
    /// Length of the assembled share URL.
    url_length: usize,
    /// Characters remaining under the URL length budget (negative means
    /// the fallback path would be taken).
    headroom: i64,
}

/// Execute the inspect command
pub async fn execute(
    args: &InspectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    // Decode first; inspecting a malformed token is meaningless.
    let payload = cardlink_codec::decode(&args.token).map_err(AppError::from)?;
    let json_bytes = serde_json::to_vec(&payload)?.len();

    let compressed_bytes = URL_SAFE_NO_PAD
        .decode(args.token.trim().trim_end_matches('='))
        .map_err(|e| AppError::validation(format!("Invalid token: {e}")))?
        .len();

    let url = ShareUrlBuilder::new(&config.share).build(&args.token)?;
    let report = InspectReport {
        token_length: args.token.len(),
        compressed_bytes,
        json_bytes,
        url_length: url.len(),
        headroom: config.share.max_url_length as i64 - url.len() as i64,
    };

    match format {
        OutputFormat::Text => {
            output::print_kv("Token length", &report.token_length.to_string());
            output::print_kv("Compressed bytes", &report.compressed_bytes.to_string());
            output::print_kv("JSON bytes", &report.json_bytes.to_string());
            output::print_kv("URL length", &report.url_length.to_string());
            output::print_kv("Headroom", &report.headroom.to_string());
            if report.headroom < 0 {
                output::print_warning("URL exceeds the length budget; sharing would fall back");
            }
        }
        OutputFormat::Json => output::print_item(&report, format),
    }

    Ok(())
}
