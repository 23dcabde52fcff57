//! Outbound share planning.

pub mod link;
pub mod plan;
pub mod service;

pub use link::ShareUrlBuilder;
pub use plan::SharePlan;
pub use service::ShareService;
