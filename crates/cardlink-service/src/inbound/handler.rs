//! Inbound share link handling.

use tracing::{info, warn};
use url::Url;

use cardlink_codec::decode;
use cardlink_core::config::share::ShareConfig;
use cardlink_core::error::AppError;
use cardlink_core::events::share::ShareEvent;
use cardlink_core::result::AppResult;
use cardlink_entity::ShareableCardPayload;

/// User-facing notice shown when a link cannot be decoded.
const INVALID_LINK_NOTICE: &str =
    "This share link is invalid or damaged. Ask the sender for a new one.";

/// Outcome of handling a page-load URL.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundOutcome {
    /// The URL carried no card parameter; nothing to do.
    NoToken,
    /// The payload was reconstructed and can be presented.
    Presented {
        /// The decoded card payload.
        payload: ShareableCardPayload,
        /// Address without the card parameter, for history rewriting.
        cleaned_url: String,
    },
    /// The token was malformed. No partial payload escapes; the caller
    /// shows the notice and rewrites the address to `cleaned_url` so a
    /// reload does not repeat the failed decode.
    Invalid {
        /// User-facing notice text.
        notice: String,
        /// Address without the card parameter.
        cleaned_url: String,
    },
}

/// Reads and decodes the card parameter from a page-load URL.
#[derive(Debug, Clone)]
pub struct InboundLinkHandler {
    /// Query parameter name carrying the token.
    param_name: String,
}

impl InboundLinkHandler {
    /// Creates a handler from share configuration.
    pub fn new(config: &ShareConfig) -> Self {
        Self {
            param_name: config.param_name.clone(),
        }
    }

    /// Handles a page-load URL.
    ///
    /// Each call is independent and touches no shared state; dropping the
    /// returned future mid-decode leaves nothing to clean up.
    pub async fn handle(&self, page_url: &str) -> AppResult<InboundOutcome> {
        let url = Url::parse(page_url)
            .map_err(|e| AppError::validation(format!("Unparseable page URL: {e}")))?;

        let Some(token) = url
            .query_pairs()
            .find(|(key, _)| key == self.param_name.as_str())
            .map(|(_, value)| value.into_owned())
        else {
            return Ok(InboundOutcome::NoToken);
        };

        let cleaned_url = strip_param(&url, &self.param_name);

        match decode(&token) {
            Ok(payload) => {
                let event = ShareEvent::LinkOpened {
                    token_length: token.len(),
                };
                info!(event = ?event, "Share link decoded");
                Ok(InboundOutcome::Presented {
                    payload,
                    cleaned_url,
                })
            }
            Err(e) => {
                let event = ShareEvent::LinkRejected {
                    reason: e.to_string(),
                };
                warn!(event = ?event, "Rejected malformed share link");
                Ok(InboundOutcome::Invalid {
                    notice: INVALID_LINK_NOTICE.to_string(),
                    cleaned_url,
                })
            }
        }
    }
}

/// Returns `url` with the given query parameter removed and all other
/// parameters preserved in order.
fn strip_param(url: &Url, param: &str) -> String {
    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut cleaned = url.clone();
    if remaining.is_empty() {
        cleaned.set_query(None);
    } else {
        cleaned
            .query_pairs_mut()
            .clear()
            .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    cleaned.to_string()
}
