//! Shared client-side state modules.
//!
//! State is split by domain (`auth`, `filters`, `toast`) so individual
//! components can depend on small focused models. The structs here are
//! plain data; pages wrap them in `RwSignal`s provided via context.

pub mod auth;
pub mod filters;
pub mod toast;
