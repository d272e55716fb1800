//! Core domain logic for blogo
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Post, Analysis, Session)
//! - `services/` - Text analysis and authentication
//! - `ports/` - Trait definitions for storage and spell checking

pub mod models;
pub mod ports;
pub mod services;
