//! Inbound share link consumption and import.

pub mod handler;
pub mod import;

pub use handler::{InboundLinkHandler, InboundOutcome};
pub use import::ImportService;
