//! Data models
//!
//! Records exchanged with the persistence and transport collaborators,
//! plus the payload types the command handlers accept. All types are
//! serde-enabled; status and condition enums use SCREAMING_SNAKE_CASE
//! wire strings.

pub mod event;
pub mod order;

// Re-exports
pub use event::*;
pub use order::*;
