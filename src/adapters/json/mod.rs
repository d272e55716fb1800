//! JSON-file post store
//!
//! - [`file`] - Read and write the posts file
//! - [`repository`] - `PostStore` implementation

pub mod file;
pub mod repository;

pub use file::{PostsFile, load_file, save_file};
pub use repository::JsonPostStore;
