//! Domain events emitted by CardLink operations.
//!
//! Events are recorded as structured tracing fields; the share flow
//! emits one per planned, opened, rejected, or imported link.

pub mod share;

pub use share::ShareEvent;
