//! Request parsing for the console
//!
//! Turns one input line into a typed command.

use crate::error::{CacheError, Result};

/// Default page size for `KEYS`
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One console command.
///
/// `PUT` keeps missing arguments as `None` so the cache contract, not the
/// parser, decides what an absent key or value means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `PUT <key> <value>`
    Put {
        key: Option<String>,
        value: Option<String>,
    },
    /// `GET <key>`
    Get { key: String },
    /// `KEYS [page] [page_size]`
    Keys { page: usize, page_size: usize },
    /// `STATS`
    Stats,
    /// `QUIT`
    Quit,
}

impl Command {
    /// Parses a line. Returns `Ok(None)` for a blank line.
    ///
    /// The value of `PUT` is the rest of the line after the key, so it may
    /// contain spaces.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_uppercase().as_str() {
            "PUT" => {
                let (key, value) = match rest.split_once(char::is_whitespace) {
                    Some((key, value)) => (Some(key), Some(value.trim())),
                    None => ((!rest.is_empty()).then_some(rest), None),
                };
                Command::Put {
                    key: key.map(str::to_string),
                    value: value.map(str::to_string),
                }
            }
            "GET" => {
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err(CacheError::InvalidRequest(
                        "GET takes exactly one key".to_string(),
                    ));
                }
                Command::Get {
                    key: rest.to_string(),
                }
            }
            "KEYS" => {
                let mut args = rest.split_whitespace();
                let page = parse_number(args.next(), 1)?;
                let page_size = parse_number(args.next(), DEFAULT_PAGE_SIZE)?;
                Command::Keys { page, page_size }
            }
            "STATS" => Command::Stats,
            "QUIT" | "EXIT" => Command::Quit,
            other => {
                return Err(CacheError::InvalidRequest(format!(
                    "Unknown command: {}",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn parse_number(arg: Option<&str>, default: usize) -> Result<usize> {
    match arg {
        Some(raw) => raw
            .parse()
            .map_err(|_| CacheError::InvalidRequest(format!("Not a number: {}", raw))),
        None => Ok(default),
    }
}
