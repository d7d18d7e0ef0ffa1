//! link-follower: follow local links between markdown documents
//!
//! Given seed documents, this crate extracts their links, keeps the ones
//! that point at files or directories on the local filesystem, and follows
//! them recursively, returning every reached file once, in discovery order.

pub mod config;
pub mod error;
pub mod extract;
pub mod follow;

// Re-export commonly used types
pub use config::{AliasRule, Aliases};
pub use error::{ConfigError, FollowError};
pub use extract::{extract_links, Link};
pub use follow::{follow_all_local_links, Traversal};
