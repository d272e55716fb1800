//! Domain models for blogo
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Post`] - A published blog post
//! - [`NewPost`] - The payload used to create a post
//! - [`Analysis`] - Word counts and repetition score for a piece of text
//! - [`PostAnalysis`] - A post joined with its analysis
//! - [`Session`] - An authenticated admin session

mod analysis;
mod post;
mod session;

pub use analysis::{Analysis, MAX_SCORE, PostAnalysis};
pub use post::{NewPost, Post, PostError};
pub use session::Session;
