//! Contact and social link value objects.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single contact method on a card.
///
/// Entries keep their authored order; the order is part of the card's
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
pub struct ContactEntry {
    /// Contact channel, e.g. `"email"`, `"phone"`, `"website"`.
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 32))]
    pub contact_type: String,
    /// The address or number for the channel.
    #[validate(length(max = 512))]
    pub value: String,
}

/// A link to a social profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
pub struct SocialLink {
    /// Platform name, e.g. `"linkedin"`.
    #[validate(length(min = 1, max = 64))]
    pub platform: String,
    /// Profile URL.
    #[validate(length(max = 2048))]
    pub url: String,
}
