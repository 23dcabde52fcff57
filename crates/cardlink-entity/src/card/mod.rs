//! Business card domain entities.

pub mod career;
pub mod contact;
pub mod model;
pub mod theme;

pub use career::CareerEntry;
pub use contact::{ContactEntry, SocialLink};
pub use model::{BusinessCard, CardData, CreateCard, UpdateCard};
pub use theme::ThemePalette;
