//! Network layer: wire types, error classification, and the REST client.

pub mod api;
pub mod error;
pub mod types;
