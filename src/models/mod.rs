//! Request and Response models for the console
//!
//! Parses input lines into commands and defines the JSON replies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{Command, DEFAULT_PAGE_SIZE};
pub use responses::{ErrorResponse, GetResponse, PutResponse, StatsResponse};
