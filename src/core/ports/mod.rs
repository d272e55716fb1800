//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (post storage, session storage, spell checking).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Tests swap in the in-memory adapters.

mod post_store;
mod session_store;
mod spell_checker;

pub use post_store::{PostStore, next_id};
pub use session_store::SessionStore;
pub use spell_checker::{NoSpellChecker, SpellChecker};
