//! The reduced card projection embedded in share links.

use serde::{Deserialize, Serialize};

use crate::card::model::{BusinessCard, CardData};
use crate::card::theme::ThemePalette;

/// The reduced card representation a share link carries.
///
/// Binary media (profile picture, banner) and server metadata (IDs,
/// timestamps, visibility) are stripped by the projection: a link must
/// stay small enough to travel as a URL query parameter. The payload is
/// built transiently at share time and reconstructed transiently when a
/// recipient opens the link; it is never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareableCardPayload {
    /// Card text content.
    pub card_data: CardData,
    /// Theme palette.
    pub theme: ThemePalette,
}

impl ShareableCardPayload {
    /// Build a payload from a stored card, dropping media and metadata.
    pub fn from_card(card: &BusinessCard) -> Self {
        Self {
            card_data: card.card_data.clone(),
            theme: card.theme.clone(),
        }
    }
}

impl From<&BusinessCard> for ShareableCardPayload {
    fn from(card: &BusinessCard) -> Self {
        Self::from_card(card)
    }
}
