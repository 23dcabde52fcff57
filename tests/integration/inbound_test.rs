//! Integration tests for inbound link consumption and import.

mod helpers;

use std::sync::Arc;

use uuid::Uuid;

use cardlink_core::config::share::ShareConfig;
use cardlink_core::error::ErrorKind;
use cardlink_core::types::id::UserId;
use cardlink_service::context::RequestContext;
use cardlink_service::inbound::{ImportService, InboundLinkHandler, InboundOutcome};
use cardlink_service::share::ShareService;
use cardlink_service::store::{CardStore, MemoryCardStore};

fn shared_url(payload: &cardlink_entity::ShareableCardPayload) -> String {
    let service = ShareService::new(ShareConfig::default());
    service
        .plan_for_payload(payload)
        .expect("plans")
        .url()
        .to_string()
}

#[tokio::test]
async fn test_valid_link_presents_payload_and_cleans_address() {
    let handler = InboundLinkHandler::new(&ShareConfig::default());
    let payload = helpers::jane_doe_payload();

    let outcome = handler.handle(&shared_url(&payload)).await.expect("handles");

    match outcome {
        InboundOutcome::Presented {
            payload: decoded,
            cleaned_url,
        } => {
            assert_eq!(decoded, payload);
            assert_eq!(cleaned_url, "https://cardlink.app/");
        }
        other => panic!("expected presented card, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_token_is_rejected_with_cleaned_address() {
    let handler = InboundLinkHandler::new(&ShareConfig::default());

    let outcome = handler
        .handle("https://cardlink.app/?lang=en&card=@@not-a-token@@")
        .await
        .expect("handles");

    match outcome {
        InboundOutcome::Invalid {
            notice,
            cleaned_url,
        } => {
            assert!(!notice.is_empty());
            // Other parameters survive; the card parameter does not.
            assert_eq!(cleaned_url, "https://cardlink.app/?lang=en");
        }
        other => panic!("expected invalid outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reload_of_cleaned_address_does_not_repeat_the_failure() {
    let handler = InboundLinkHandler::new(&ShareConfig::default());

    let outcome = handler
        .handle("https://cardlink.app/?card=@@not-a-token@@")
        .await
        .expect("handles");
    let InboundOutcome::Invalid { cleaned_url, .. } = outcome else {
        panic!("expected invalid outcome");
    };

    let reload = handler.handle(&cleaned_url).await.expect("handles reload");
    assert_eq!(reload, InboundOutcome::NoToken);
}

#[tokio::test]
async fn test_truncated_token_in_url_is_rejected() {
    let handler = InboundLinkHandler::new(&ShareConfig::default());
    let url = shared_url(&helpers::jane_doe_payload());
    let truncated = &url[..url.len() - 12];

    let outcome = handler.handle(truncated).await.expect("handles");
    assert!(matches!(outcome, InboundOutcome::Invalid { .. }));
}

#[tokio::test]
async fn test_import_requires_authentication() {
    let import = ImportService::new(Arc::new(MemoryCardStore::new()));

    let err = import
        .import(&RequestContext::anonymous(), helpers::jane_doe_payload())
        .await
        .expect_err("anonymous import must fail");
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_import_creates_private_card_owned_by_viewer() {
    let store = Arc::new(MemoryCardStore::new());
    let import = ImportService::new(store.clone());
    let user = UserId::new();
    let ctx = RequestContext::authenticated(user, "Sam Recipient");

    let card = import
        .import(&ctx, helpers::jane_doe_payload())
        .await
        .expect("imports");

    assert_eq!(card.owner_id, user.into_uuid());
    assert!(!card.is_public);
    assert_eq!(card.profile_picture, None);
    assert_eq!(card.banner_image, None);
    assert_eq!(card.card_data.name, "Jane Doe");

    let stored = store.get(card.id).await.expect("gets").expect("exists");
    assert_eq!(stored, card);
}

#[tokio::test]
async fn test_full_flow_share_open_import() {
    let store = Arc::new(MemoryCardStore::new());
    let import = ImportService::new(store.clone());
    let handler = InboundLinkHandler::new(&ShareConfig::default());

    let url = shared_url(&helpers::jane_doe_payload());
    let outcome = handler.handle(&url).await.expect("handles");
    let InboundOutcome::Presented { payload, .. } = outcome else {
        panic!("expected presented card");
    };

    let recipient = RequestContext::authenticated(UserId::new(), "Sam Recipient");
    let card = import.import(&recipient, payload).await.expect("imports");

    let page = store
        .list_for_owner(
            card.owner_id,
            &cardlink_core::types::pagination::PageRequest::default(),
        )
        .await
        .expect("lists");
    assert_eq!(page.total_items, 1);
}
