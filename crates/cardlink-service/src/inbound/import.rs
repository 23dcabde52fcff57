//! Import a decoded payload as a new card.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use cardlink_core::error::AppError;
use cardlink_core::events::share::ShareEvent;
use cardlink_core::result::AppResult;
use cardlink_core::traits::service::Service;
use cardlink_entity::{BusinessCard, CreateCard, ShareableCardPayload};

use crate::context::RequestContext;
use crate::store::CardStore;

/// Materializes decoded payloads as cards owned by the importing viewer.
#[derive(Debug, Clone)]
pub struct ImportService {
    /// Card store collaborator.
    store: Arc<dyn CardStore>,
}

impl ImportService {
    /// Creates a new import service.
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    /// Imports a decoded payload as a new card for the viewer.
    ///
    /// Requires authentication. Imported cards start private and carry no
    /// media; a share link never contains any. The payload is validated
    /// before anything is written, so a rejected import applies nothing.
    pub async fn import(
        &self,
        ctx: &RequestContext,
        payload: ShareableCardPayload,
    ) -> AppResult<BusinessCard> {
        let Some(user_id) = ctx.user_id else {
            return Err(AppError::authentication("Sign in to save this card"));
        };

        let create = CreateCard {
            owner_id: user_id.into_uuid(),
            card_data: payload.card_data,
            theme: payload.theme,
            profile_picture: None,
            banner_image: None,
            is_public: false,
        };
        create
            .validate()
            .map_err(|e| AppError::validation(format!("Imported card failed validation: {e}")))?;

        let card = self.store.create(&create).await?;

        let event = ShareEvent::CardImported {
            card_id: card.id,
            owner_id: card.owner_id,
        };
        info!(event = ?event, "Imported shared card");

        Ok(card)
    }
}

impl Service for ImportService {}
