//! Share plan selection.

use serde::{Deserialize, Serialize};

use cardlink_core::traits::presenter::ShareRequest;

/// The outcome of planning a share: either the full payload-bearing link
/// or the plain-text fallback used when that link would be too long.
///
/// Falling back is a policy decision, not a failure. Very long URLs get
/// truncated or rejected by email clients, chat apps, and some browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SharePlan {
    /// The assembled URL fits within the configured length budget.
    DirectLink {
        /// Share sheet title.
        title: String,
        /// Message body.
        text: String,
        /// Full URL carrying the encoded payload.
        url: String,
    },
    /// The URL exceeded the budget; share text plus the bare base URL.
    FallbackText {
        /// Share sheet title.
        title: String,
        /// Message body inviting the recipient to the app.
        text: String,
        /// Bare base URL without the payload.
        url: String,
    },
}

impl SharePlan {
    /// Returns whether this plan carries the full payload link.
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::DirectLink { .. })
    }

    /// Returns the URL this plan would share.
    pub fn url(&self) -> &str {
        match self {
            Self::DirectLink { url, .. } | Self::FallbackText { url, .. } => url,
        }
    }

    /// Converts the plan into the triple handed to the share facility.
    pub fn to_share_request(&self) -> ShareRequest {
        match self {
            Self::DirectLink { title, text, url } | Self::FallbackText { title, text, url } => {
                ShareRequest {
                    title: title.clone(),
                    text: text.clone(),
                    url: url.clone(),
                }
            }
        }
    }
}
