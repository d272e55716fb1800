//! Business logic services
//!
//! Pure logic that operates on domain models; I/O only happens behind
//! port traits.
//!
//! - [`tokenizer`] - Split text into lowercase word tokens
//! - [`frequency`] - Count occurrences per token
//! - [`scorer`] - Repetitions and the bounded score
//! - [`analyzer`] - The three above in one pass
//! - [`auth`] - Admin credentials and sessions

pub mod analyzer;
pub mod auth;
pub mod frequency;
pub mod scorer;
pub mod tokenizer;

pub use analyzer::{Analyzer, analyze};
pub use auth::{AdminCredentials, AuthError, Authenticator, hash_password};
pub use frequency::count_frequencies;
pub use scorer::{Score, ScoreInputs, score};
pub use tokenizer::tokenize;
