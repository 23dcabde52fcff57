//! # cardlink-codec
//!
//! The share-link codec: a stateless, bidirectional transform between a
//! [`ShareableCardPayload`](cardlink_entity::ShareableCardPayload) and the
//! URL-safe token embedded in a share link's query parameter.
//!
//! Encoding is JSON → gzip → URL-safe base64 without padding. Decoding
//! reverses the chain and collapses every failure into
//! [`ShareLinkError::MalformedShareLink`]: a received token is untrusted
//! input and callers only need to know that it cannot be used.

pub mod codec;
pub mod error;

pub use codec::{decode, encode};
pub use error::ShareLinkError;
