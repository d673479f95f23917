//! Storage-level operations for users, tags and bookmarks.
//!
//! Every function takes an explicit connection handle (a pooled connection or
//! an open transaction) and returns `DbErr`; mapping to HTTP-facing errors
//! happens in the service layer above.

pub mod bookmark_service;
pub mod tag_service;
pub mod user_service;

pub use bookmark_service::*;
pub use tag_service::*;
pub use user_service::*;
