//! Native share / clipboard facility trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// The title/text/URL triple handed to the platform share facility.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShareRequest {
    /// Share sheet title.
    pub title: String,
    /// Message body.
    pub text: String,
    /// Link to include.
    pub url: String,
}

/// Trait for the platform share sheet or clipboard.
///
/// The share flow only supplies the triple; performing the share action
/// (opening a sheet, copying to the clipboard) belongs to the
/// implementation.
#[async_trait]
pub trait SharePresenter: Send + Sync + 'static {
    /// Present the share payload to the user.
    ///
    /// Returns `true` when the share action completed and `false` when
    /// the user dismissed it.
    async fn present(&self, request: &ShareRequest) -> AppResult<bool>;
}
