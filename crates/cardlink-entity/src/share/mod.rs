//! Share payload domain entities.

pub mod payload;

pub use payload::ShareableCardPayload;
