//! Card theme palette.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// The four color slots a card theme is built from.
///
/// Colors are stored as authored CSS color strings (`"#1A2B3C"`, named
/// colors). No parsing happens here; rendering them is the consumer's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ThemePalette {
    /// Card background color.
    #[validate(length(min = 1, max = 64))]
    pub background: String,
    /// Body text color.
    #[validate(length(min = 1, max = 64))]
    pub text: String,
    /// Primary brand color.
    #[validate(length(min = 1, max = 64))]
    pub primary: String,
    /// Accent color for highlights.
    #[validate(length(min = 1, max = 64))]
    pub accent: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            text: "#000000".to_string(),
            primary: "#111111".to_string(),
            accent: "#EEEEEE".to_string(),
        }
    }
}
