//! Browser utilities: session persistence, dialogs, display formatting.

pub mod dialog;
pub mod format;
pub mod session;
