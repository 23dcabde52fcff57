//! Card store interface and in-memory implementation.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use cardlink_core::result::AppResult;
use cardlink_core::types::pagination::{PageRequest, PageResponse};
use cardlink_entity::{BusinessCard, CreateCard, UpdateCard};

pub use memory::MemoryCardStore;

/// Persistent store collaborator for business cards.
///
/// The production deployment backs this with a managed database service;
/// the share flow depends only on this interface. Record identifiers and
/// timestamps are assigned by the store.
#[async_trait]
pub trait CardStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create a card and return the stored record.
    async fn create(&self, card: &CreateCard) -> AppResult<BusinessCard>;

    /// Fetch a card by ID.
    async fn get(&self, id: Uuid) -> AppResult<Option<BusinessCard>>;

    /// Apply an update to an existing card and return the new record.
    async fn update(&self, id: Uuid, update: &UpdateCard) -> AppResult<BusinessCard>;

    /// Delete a card. Returns `true` if it existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// List cards owned by a user, newest first.
    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<BusinessCard>>;
}
