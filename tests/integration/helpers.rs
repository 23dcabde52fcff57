//! Shared card builders for the integration tests.

use chrono::Utc;
use uuid::Uuid;

use cardlink_entity::{
    BusinessCard, CardData, CareerEntry, ContactEntry, ShareableCardPayload, ThemePalette,
};

/// The Jane Doe payload used across the share flow tests.
#[allow(dead_code)]
pub fn jane_doe_payload() -> ShareableCardPayload {
    ShareableCardPayload {
        card_data: CardData {
            name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            bio: "Builds things.".to_string(),
            contact_info: vec![ContactEntry {
                contact_type: "email".to_string(),
                value: "jane@acme.com".to_string(),
            }],
            social_links: vec![],
            career_history: vec![],
        },
        theme: ThemePalette {
            background: "#FFFFFF".to_string(),
            text: "#000000".to_string(),
            primary: "#111111".to_string(),
            accent: "#EEEEEE".to_string(),
        },
    }
}

/// A stored card wrapping the given payload, with media attached so the
/// tests can prove it never reaches a share link.
#[allow(dead_code)]
pub fn stored_card(payload: ShareableCardPayload, owner_id: Uuid) -> BusinessCard {
    BusinessCard {
        id: Uuid::new_v4(),
        owner_id,
        card_data: payload.card_data,
        theme: payload.theme,
        profile_picture: Some("data:image/png;base64,iVBORw0KGgo".to_string()),
        banner_image: Some("banners/header.png".to_string()),
        is_public: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A payload guaranteed to blow the 2000-character URL budget: a long
/// incompressible bio plus fifty career entries.
#[allow(dead_code)]
pub fn oversized_payload() -> ShareableCardPayload {
    let mut bio = String::new();
    let mut counter: u64 = 0;
    while bio.len() < 10_000 {
        bio.push_str(&format!(
            "{:016x}",
            counter.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ));
        counter += 1;
    }

    let career_history = (0..50)
        .map(|i| CareerEntry {
            title: format!("Senior Engineer {i}"),
            company: format!("Company number {i}"),
            start_date: format!("20{:02}", i % 30),
            end_date: format!("20{:02}", (i % 30) + 1),
            description: format!(
                "Led initiative {:x} shipping {} releases across {} teams.",
                i * 2_654_435_761_u64,
                i * 7,
                i + 2
            ),
        })
        .collect();

    let mut payload = jane_doe_payload();
    payload.card_data.bio = bio;
    payload.card_data.career_history = career_history;
    payload
}
