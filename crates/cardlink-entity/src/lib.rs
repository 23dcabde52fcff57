//! # cardlink-entity
//!
//! Domain entity models for CardLink. Every struct in this crate is a
//! stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`; content blocks additionally
//! derive `validator::Validate` for boundary validation.

pub mod card;
pub mod share;

pub use card::{
    BusinessCard, CardData, CareerEntry, ContactEntry, CreateCard, SocialLink, ThemePalette,
    UpdateCard,
};
pub use share::ShareableCardPayload;
