//! Share URL assembly.

use url::Url;

use cardlink_core::config::share::ShareConfig;
use cardlink_core::error::AppError;

/// Assembles shareable URLs of the form `<base_url>?<param>=<token>`.
///
/// The base URL is the page's own origin and path with no query
/// parameters of its own.
#[derive(Debug, Clone)]
pub struct ShareUrlBuilder {
    base_url: String,
    param_name: String,
}

impl ShareUrlBuilder {
    /// Creates a builder from share configuration.
    pub fn new(config: &ShareConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            param_name: config.param_name.clone(),
        }
    }

    /// Returns the bare base URL, normalized, without the payload
    /// parameter. This is what the fallback share path sends.
    pub fn base_url(&self) -> Result<String, AppError> {
        Ok(self.parse_base()?.to_string())
    }

    /// Builds the full share URL carrying the token.
    pub fn build(&self, token: &str) -> Result<String, AppError> {
        let mut url = self.parse_base()?;
        url.query_pairs_mut().append_pair(&self.param_name, token);
        Ok(url.to_string())
    }

    fn parse_base(&self) -> Result<Url, AppError> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::configuration(format!("Invalid base URL '{}': {e}", self.base_url))
        })
    }
}
