//! Outbound share planning service.

use tracing::{info, warn};

use cardlink_codec::encode;
use cardlink_core::config::share::ShareConfig;
use cardlink_core::events::share::ShareEvent;
use cardlink_core::result::AppResult;
use cardlink_core::traits::presenter::SharePresenter;
use cardlink_core::traits::service::Service;
use cardlink_entity::{BusinessCard, ShareableCardPayload};

use super::link::ShareUrlBuilder;
use super::plan::SharePlan;
use crate::context::RequestContext;

/// Plans and delivers card shares, applying the URL-length fallback
/// policy.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share configuration.
    config: ShareConfig,
    /// URL assembly for tokens.
    url_builder: ShareUrlBuilder,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(config: ShareConfig) -> Self {
        let url_builder = ShareUrlBuilder::new(&config);
        Self {
            config,
            url_builder,
        }
    }

    /// Plans a share for a stored card.
    ///
    /// Projects the card to its shareable payload (media is dropped),
    /// encodes it, and assembles the URL. Returns the fallback plan when
    /// the URL would exceed the configured length budget. Encoding
    /// failures propagate; the caller aborts the share action.
    pub async fn plan_share(
        &self,
        ctx: &RequestContext,
        card: &BusinessCard,
    ) -> AppResult<SharePlan> {
        let payload = ShareableCardPayload::from_card(card);
        let (plan, full_url_length) = self.plan_with_length(&payload)?;

        match &plan {
            SharePlan::DirectLink { .. } => {
                let event = ShareEvent::LinkPlanned {
                    card_id: card.id,
                    url_length: full_url_length,
                };
                info!(user_id = ?ctx.user_id, event = ?event, "Share link planned");
            }
            SharePlan::FallbackText { .. } => {
                let event = ShareEvent::LinkFellBack {
                    card_id: card.id,
                    url_length: full_url_length,
                    max_url_length: self.config.max_url_length,
                };
                warn!(
                    user_id = ?ctx.user_id,
                    event = ?event,
                    "Share link exceeded length budget, using text fallback"
                );
            }
        }

        Ok(plan)
    }

    /// Plans a share for a bare payload.
    pub fn plan_for_payload(&self, payload: &ShareableCardPayload) -> AppResult<SharePlan> {
        Ok(self.plan_with_length(payload)?.0)
    }

    /// Plans a share and also reports the length the full URL has (or
    /// would have had, on the fallback path).
    fn plan_with_length(&self, payload: &ShareableCardPayload) -> AppResult<(SharePlan, usize)> {
        let token = encode(payload)?;
        let url = self.url_builder.build(&token)?;
        let full_url_length = url.len();
        let title = share_title(payload);

        let plan = if full_url_length > self.config.max_url_length {
            SharePlan::FallbackText {
                title,
                text: self.config.fallback_message.clone(),
                url: self.url_builder.base_url()?,
            }
        } else {
            SharePlan::DirectLink {
                title,
                text: self.config.fallback_message.clone(),
                url,
            }
        };

        Ok((plan, full_url_length))
    }

    /// Hands a plan to the platform share facility.
    ///
    /// Returns whether the share action completed. The service never
    /// performs the platform share itself.
    pub async fn deliver(
        &self,
        plan: &SharePlan,
        presenter: &dyn SharePresenter,
    ) -> AppResult<bool> {
        presenter.present(&plan.to_share_request()).await
    }
}

impl Service for ShareService {}

/// Share sheet title derived from the card holder's name.
fn share_title(payload: &ShareableCardPayload) -> String {
    let name = payload.card_data.name.trim();
    if name.is_empty() {
        "Digital business card".to_string()
    } else {
        format!("{name}'s digital business card")
    }
}
