//! Console Module
//!
//! Line-oriented front-end over stdin/stdout for driving a shared cache.
//!
//! # Commands
//! - `PUT <key> <value>` - Store a key-value pair
//! - `GET <key>` - Retrieve a value by key
//! - `KEYS [page] [page_size]` - List stored keys, one page at a time
//! - `STATS` - Get cache statistics
//! - `QUIT` - End the session

pub mod handlers;
pub mod session;

pub use handlers::*;
pub use session::run_session;
