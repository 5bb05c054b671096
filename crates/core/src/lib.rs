//! huxley_core - pure domain types for the advisor welcome page.
//!
//! Nothing in this crate performs I/O. The HTTP transport, the async
//! controller and the committee cache live in `huxley_client`.

pub mod committee;
pub mod welcome;
