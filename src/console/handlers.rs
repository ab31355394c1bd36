//! Console Handlers
//!
//! One handler per console command, each rendering its reply as JSON.

use serde::Serialize;
use tracing::debug;

use crate::cache::SharedCache;
use crate::error::{CacheError, Result};
use crate::models::{Command, GetResponse, PutResponse, StatsResponse};
use crate::pagination::HyperPage;

/// Outcome of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A JSON line to write back
    Line(String),
    /// End the session
    Quit,
}

/// Serializes a reply as a single JSON line.
pub fn render<T: Serialize>(reply: &T) -> Result<String> {
    serde_json::to_string(reply).map_err(|e| CacheError::Internal(e.to_string()))
}

/// Routes a parsed command to its handler.
pub async fn dispatch(cache: &SharedCache, command: Command) -> Result<Reply> {
    debug!(?command, "handling command");

    let line = match command {
        Command::Put { key, value } => render(&put_handler(cache, key, value).await)?,
        Command::Get { key } => render(&get_handler(cache, key).await?)?,
        Command::Keys { page, page_size } => {
            render(&keys_handler(cache, page, page_size).await?)?
        }
        Command::Stats => render(&stats_handler(cache).await)?,
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Line(line))
}

/// Handler for `PUT <key> <value>`
///
/// A missing key or value still goes through the cache, which ignores it.
pub async fn put_handler(
    cache: &SharedCache,
    key: Option<String>,
    value: Option<String>,
) -> PutResponse {
    match (key, value) {
        (Some(key), Some(value)) => {
            let evicted = cache.put(Some(key.clone()), Some(value)).await;
            PutResponse::stored(key, evicted)
        }
        (key, value) => {
            cache.put(key.clone(), value).await;
            PutResponse::ignored(key)
        }
    }
}

/// Handler for `GET <key>`
pub async fn get_handler(cache: &SharedCache, key: String) -> Result<GetResponse> {
    let value = cache.get(&key).await?;
    Ok(GetResponse::new(key, value))
}

/// Handler for `KEYS [page] [page_size]`
pub async fn keys_handler(
    cache: &SharedCache,
    page: usize,
    page_size: usize,
) -> Result<HyperPage<String>> {
    let keys = cache.keys().await;
    HyperPage::new(&keys, page, page_size)
}

/// Handler for `STATS`
pub async fn stats_handler(cache: &SharedCache) -> StatsResponse {
    let (policy, capacity) = cache.describe().await;
    let stats = cache.stats().await;
    StatsResponse::new(policy, capacity, &stats)
}
