//! Career history value object.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One position in a card's career history.
///
/// Dates are kept as authored free-form strings (`"2019"`, `"Mar 2019"`);
/// no parsing or ordering is imposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerEntry {
    /// Job title.
    #[validate(length(max = 200))]
    pub title: String,
    /// Employer name.
    #[validate(length(max = 200))]
    pub company: String,
    /// Start date as authored.
    #[validate(length(max = 64))]
    pub start_date: String,
    /// End date as authored; empty while the position is current.
    #[validate(length(max = 64))]
    pub end_date: String,
    /// Role description.
    #[validate(length(max = 4000))]
    pub description: String,
}
