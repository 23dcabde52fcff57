//! # cardlink-service
//!
//! Share-flow service layer for CardLink: outbound share planning with
//! the URL-length fallback policy, inbound link consumption, payload
//! import, and the card store interface with an in-memory implementation.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod inbound;
pub mod share;
pub mod store;

pub use context::RequestContext;
pub use inbound::{ImportService, InboundLinkHandler, InboundOutcome};
pub use share::{SharePlan, ShareService, ShareUrlBuilder};
pub use store::{CardStore, MemoryCardStore};
