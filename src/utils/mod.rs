//! Utility functions for working with A2A types.
//!
//! Helpers for creating and inspecting messages and parts, and for the
//! header-level side of extension negotiation.

pub mod extensions;
pub mod message;
pub mod parts;

pub use extensions::*;
pub use message::*;
pub use parts::*;
