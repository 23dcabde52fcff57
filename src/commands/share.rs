//! Plan and deliver a share for a card payload file.

use async_trait::async_trait;
use clap::Args;

use cardlink_core::config::AppConfig;
use cardlink_core::error::AppError;
use cardlink_core::result::AppResult;
use cardlink_core::traits::presenter::{SharePresenter, ShareRequest};
use cardlink_service::share::ShareService;

use crate::output::{self, OutputFormat};

/// Arguments for the share command
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Path to a payload JSON file ({"cardData": ..., "theme": ...})
    pub payload: String,
}

/// Presenter that prints the share triple instead of opening a share
/// sheet. Stands in for the platform facility on a terminal.
#[derive(Debug)]
struct StdoutPresenter;

#[async_trait]
impl SharePresenter for StdoutPresenter {
    async fn present(&self, request: &ShareRequest) -> AppResult<bool> {
        output::print_kv("Title", &request.title);
        output::print_kv("Text", &request.text);
        output::print_kv("URL", &request.url);
        Ok(true)
    }
}

/// Execute the share command
pub async fn execute(
    args: &ShareArgs,
    config: &AppConfig,
    _format: OutputFormat,
) -> Result<(), AppError> {
    let payload = super::read_payload(&args.payload).await?;

    let service = ShareService::new(config.share.clone());
    let plan = service.plan_for_payload(&payload)?;

    if plan.is_direct() {
        output::print_success("Sharing full card link");
    } else {
        output::print_warning("Link too long for reliable sharing; sending fallback text");
    }

    service.deliver(&plan, &StdoutPresenter).await?;
    Ok(())
}
