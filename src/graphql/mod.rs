//! GraphQL boundary
//!
//! Everything that touches the managed GraphQL backend's wire format:
//! the operation documents, the typed request/response shapes, and the
//! client that performs the round trips.

pub mod client;
pub mod operations;
pub mod types;

pub use client::{GraphQlApi, HttpGraphQlClient};
