//! In-memory card store used by the CLI and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use cardlink_core::error::AppError;
use cardlink_core::result::AppResult;
use cardlink_core::types::pagination::{PageRequest, PageResponse};
use cardlink_entity::{BusinessCard, CreateCard, UpdateCard};

use super::CardStore;

/// HashMap-backed [`CardStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCardStore {
    /// Stored cards keyed by ID.
    cards: Arc<RwLock<HashMap<Uuid, BusinessCard>>>,
}

impl MemoryCardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn create(&self, card: &CreateCard) -> AppResult<BusinessCard> {
        let now = Utc::now();
        let stored = BusinessCard {
            id: Uuid::new_v4(),
            owner_id: card.owner_id,
            card_data: card.card_data.clone(),
            theme: card.theme.clone(),
            profile_picture: card.profile_picture.clone(),
            banner_image: card.banner_image.clone(),
            is_public: card.is_public,
            created_at: now,
            updated_at: now,
        };
        self.cards.write().await.insert(stored.id, stored.clone());
        debug!(card_id = %stored.id, "Card stored");
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<BusinessCard>> {
        Ok(self.cards.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, update: &UpdateCard) -> AppResult<BusinessCard> {
        let mut cards = self.cards.write().await;
        let card = cards
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Card not found"))?;

        if let Some(card_data) = &update.card_data {
            card.card_data = card_data.clone();
        }
        if let Some(theme) = &update.theme {
            card.theme = theme.clone();
        }
        if let Some(profile_picture) = &update.profile_picture {
            card.profile_picture = Some(profile_picture.clone());
        }
        if let Some(banner_image) = &update.banner_image {
            card.banner_image = Some(banner_image.clone());
        }
        if let Some(is_public) = update.is_public {
            card.is_public = is_public;
        }
        card.updated_at = Utc::now();

        Ok(card.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.cards.write().await.remove(&id).is_some())
    }

    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<BusinessCard>> {
        let cards = self.cards.read().await;
        let mut owned: Vec<BusinessCard> = cards
            .values()
            .filter(|card| card.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = owned.len() as u64;
        let items: Vec<BusinessCard> = owned
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }
}
