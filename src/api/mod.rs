//! Clothes API Wrappers
//!
//! Frontend bindings to the HTTP endpoints, organized by resource.

mod http;
mod clothes;
mod categories;

// Re-export all public items
pub use clothes::*;
pub use categories::*;
