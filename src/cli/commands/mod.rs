//! Command implementations

mod analyze;
mod hash_password;
mod init;
mod post;
mod report;
mod serve;

pub use analyze::analyze;
pub use hash_password::hash_password;
pub use init::init;
pub use post::post;
pub use report::report;
pub use serve::serve;
