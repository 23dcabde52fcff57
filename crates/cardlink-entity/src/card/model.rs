//! Business card entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::career::CareerEntry;
use super::contact::{ContactEntry, SocialLink};
use super::theme::ThemePalette;

/// The textual content of a business card.
///
/// This is the exact field set that travels inside a share link. Every
/// field tolerates absence on deserialization, so reduced or older
/// payloads decode to empty values instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CardData {
    /// Holder's display name.
    #[validate(length(max = 200))]
    pub name: String,
    /// Job title.
    #[validate(length(max = 200))]
    pub title: String,
    /// Company or organization.
    #[validate(length(max = 200))]
    pub company: String,
    /// Short biography.
    #[validate(length(max = 20000))]
    pub bio: String,
    /// Ordered contact methods.
    #[validate(nested)]
    pub contact_info: Vec<ContactEntry>,
    /// Ordered social profile links.
    #[validate(nested)]
    pub social_links: Vec<SocialLink>,
    /// Ordered career history.
    #[validate(nested)]
    pub career_history: Vec<CareerEntry>,
}

/// A stored business card.
///
/// `profile_picture` and `banner_image` hold object-store references or
/// data URLs. They are never carried by a share link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessCard {
    /// Unique card identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// Card text content.
    pub card_data: CardData,
    /// Theme palette.
    pub theme: ThemePalette,
    /// Profile picture reference (optional).
    pub profile_picture: Option<String>,
    /// Banner image reference (optional).
    pub banner_image: Option<String>,
    /// Whether the card is publicly listed.
    pub is_public: bool,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// When the card was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new card.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCard {
    /// Owning user.
    pub owner_id: Uuid,
    /// Card text content.
    #[validate(nested)]
    pub card_data: CardData,
    /// Theme palette.
    #[validate(nested)]
    pub theme: ThemePalette,
    /// Profile picture reference (optional).
    pub profile_picture: Option<String>,
    /// Banner image reference (optional).
    pub banner_image: Option<String>,
    /// Whether the card is publicly listed.
    pub is_public: bool,
}

/// Data for updating an existing card. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateCard {
    /// Replacement card content.
    #[validate(nested)]
    pub card_data: Option<CardData>,
    /// Replacement theme.
    #[validate(nested)]
    pub theme: Option<ThemePalette>,
    /// New profile picture reference.
    pub profile_picture: Option<String>,
    /// New banner image reference.
    pub banner_image: Option<String>,
    /// New visibility flag.
    pub is_public: Option<bool>,
}
