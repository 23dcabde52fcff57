//! Integration tests for outbound share planning.

mod helpers;

use uuid::Uuid;

use cardlink_core::config::share::ShareConfig;
use cardlink_service::context::RequestContext;
use cardlink_service::inbound::{InboundLinkHandler, InboundOutcome};
use cardlink_service::share::{SharePlan, ShareService};

#[tokio::test]
async fn test_plan_share_produces_url_safe_direct_link() {
    let service = ShareService::new(ShareConfig::default());
    let ctx = RequestContext::anonymous();
    let card = helpers::stored_card(helpers::jane_doe_payload(), Uuid::new_v4());

    let plan = service.plan_share(&ctx, &card).await.expect("plans");

    match plan {
        SharePlan::DirectLink { url, title, .. } => {
            assert!(url.starts_with("https://cardlink.app/?card="));
            assert!(url.len() <= 2000);
            assert_eq!(title, "Jane Doe's digital business card");

            let token = url.split("card=").nth(1).expect("token present");
            assert!(!token.contains('+'));
            assert!(!token.contains('/'));
            assert!(!token.contains('='));
        }
        other => panic!("expected direct link, got {other:?}"),
    }
}

#[tokio::test]
async fn test_shared_link_round_trips_through_inbound_handler() {
    let config = ShareConfig::default();
    let service = ShareService::new(config.clone());
    let handler = InboundLinkHandler::new(&config);

    let payload = helpers::jane_doe_payload();
    let card = helpers::stored_card(payload.clone(), Uuid::new_v4());
    let plan = service
        .plan_share(&RequestContext::anonymous(), &card)
        .await
        .expect("plans");

    let outcome = handler.handle(plan.url()).await.expect("handles");
    match outcome {
        InboundOutcome::Presented {
            payload: decoded, ..
        } => assert_eq!(decoded, payload),
        other => panic!("expected presented card, got {other:?}"),
    }
}

#[tokio::test]
async fn test_share_link_never_carries_media() {
    let service = ShareService::new(ShareConfig::default());
    let card = helpers::stored_card(helpers::jane_doe_payload(), Uuid::new_v4());
    let plan = service
        .plan_share(&RequestContext::anonymous(), &card)
        .await
        .expect("plans");

    let token = plan.url().split("card=").nth(1).expect("token present");
    let decoded = cardlink_codec::decode(token).expect("decodes");
    let json = serde_json::to_string(&decoded).expect("serializes");
    assert!(!json.contains("iVBORw0KGgo"));
    assert!(!json.contains("banners/header.png"));
}

#[tokio::test]
async fn test_oversized_card_takes_fallback_path() {
    let service = ShareService::new(ShareConfig::default());
    let card = helpers::stored_card(helpers::oversized_payload(), Uuid::new_v4());

    let plan = service
        .plan_share(&RequestContext::anonymous(), &card)
        .await
        .expect("plans");

    match plan {
        SharePlan::FallbackText { url, text, .. } => {
            assert_eq!(url, "https://cardlink.app/");
            assert!(!url.contains("card="));
            assert!(!text.is_empty());
        }
        other => panic!("expected fallback, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fallback_threshold_follows_configuration() {
    // A budget small enough that even the Jane Doe card exceeds it.
    let config = ShareConfig {
        max_url_length: 64,
        ..ShareConfig::default()
    };
    let service = ShareService::new(config);
    let card = helpers::stored_card(helpers::jane_doe_payload(), Uuid::new_v4());

    let plan = service
        .plan_share(&RequestContext::anonymous(), &card)
        .await
        .expect("plans");
    assert!(!plan.is_direct());
}
