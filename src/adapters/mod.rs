//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - Posts persisted in a JSON file
//! - `memory/` - In-process post and session stores

pub mod json;
pub mod memory;

pub use json::JsonPostStore;
pub use memory::{MemoryPostStore, MemorySessionStore};
