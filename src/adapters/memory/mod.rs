//! In-memory stores
//!
//! Nothing here survives a restart. Used by tests and by `serve --ephemeral`.

mod posts;
mod sessions;

pub use posts::MemoryPostStore;
pub use sessions::MemorySessionStore;
