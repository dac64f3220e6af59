//! Generic messages rendered for server-side failures.
//!
//! Internal error detail goes to the logs; clients only ever see these.

pub const INTERNAL_ERROR: &str = "An internal server error occurred";
pub const DATABASE_ERROR: &str = "A database error occurred";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
