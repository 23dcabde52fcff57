//! Share-link domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to share link operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShareEvent {
    /// A share link was assembled and fits within the URL length budget.
    LinkPlanned {
        /// The card being shared.
        card_id: Uuid,
        /// Length of the assembled URL.
        url_length: usize,
    },
    /// A share link exceeded the URL length budget and fell back to a
    /// plain-text share.
    LinkFellBack {
        /// The card being shared.
        card_id: Uuid,
        /// Length the full URL would have had.
        url_length: usize,
        /// The configured budget it exceeded.
        max_url_length: usize,
    },
    /// An inbound share link was decoded and presented.
    LinkOpened {
        /// Length of the received token.
        token_length: usize,
    },
    /// An inbound share link could not be decoded.
    LinkRejected {
        /// Human-readable rejection reason.
        reason: String,
    },
    /// A decoded payload was imported as a new card.
    CardImported {
        /// The newly created card.
        card_id: Uuid,
        /// The importing user.
        owner_id: Uuid,
    },
}
