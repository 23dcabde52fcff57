//! Request context for share and import operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cardlink_core::types::id::UserId;

/// Context for the current viewer.
///
/// Share links are consumable without signing in, so the user is
/// optional. Importing a decoded payload requires one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID, if any.
    pub user_id: Option<UserId>,
    /// Display name of the viewer (convenience field).
    pub display_name: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for an authenticated user.
    pub fn authenticated(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            display_name: Some(display_name.into()),
            request_time: Utc::now(),
        }
    }

    /// Creates a context for an anonymous viewer.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            display_name: None,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the viewer is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}
