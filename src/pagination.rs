//! Pagination Module
//!
//! Page arithmetic and hypermedia page descriptors over any slice. The cache
//! itself never calls into this module; the console uses it to list keys.

use std::ops::Range;

use serde::Serialize;

use crate::error::{CacheError, Result};

// == Index Range ==
/// Returns the half-open index range covered by a 1-based `page`.
///
/// `index_range(1, 7)` is `0..7`, `index_range(3, 15)` is `30..45`. Page and
/// page size must both be at least 1. A start index past `usize::MAX` is
/// `InvalidPage`; the end saturates instead.
pub fn index_range(page: usize, page_size: usize) -> Result<Range<usize>> {
    validate(page, page_size)?;
    let start = (page - 1).checked_mul(page_size).ok_or_else(|| {
        CacheError::InvalidPage(format!(
            "page {} of size {} is out of range",
            page, page_size
        ))
    })?;
    Ok(start..start.saturating_add(page_size))
}

fn validate(page: usize, page_size: usize) -> Result<()> {
    if page == 0 {
        return Err(CacheError::InvalidPage(
            "page must be an integer greater than 0".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(CacheError::InvalidPage(
            "page_size must be an integer greater than 0".to_string(),
        ));
    }
    Ok(())
}

// == Get Page ==
/// Returns the items on `page`, or an empty slice past the end.
pub fn get_page<T>(items: &[T], page: usize, page_size: usize) -> Result<&[T]> {
    let range = index_range(page, page_size)?;
    if range.start >= items.len() {
        return Ok(&[]);
    }
    Ok(&items[range.start..range.end.min(items.len())])
}

// == Hyper Page ==
/// A page plus the links needed to walk the rest of the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperPage<T> {
    /// Number of items actually returned
    pub page_size: usize,
    pub page: usize,
    pub data: Vec<T>,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub total_pages: usize,
}

impl<T: Clone> HyperPage<T> {
    pub fn new(items: &[T], page: usize, page_size: usize) -> Result<Self> {
        let data = get_page(items, page, page_size)?.to_vec();
        let total_pages = items.len().div_ceil(page_size);

        Ok(Self {
            page_size: data.len(),
            page,
            data,
            next_page: (page < total_pages).then_some(page + 1),
            prev_page: (page > 1).then(|| page - 1),
            total_pages,
        })
    }
}

// == Hyper Index ==
/// A page addressed by start index, so removals between requests do not
/// make the caller skip items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperIndex<T> {
    pub index: usize,
    pub next_index: Option<usize>,
    /// Number of items actually returned
    pub page_size: usize,
    pub data: Vec<T>,
}

impl<T: Clone> HyperIndex<T> {
    pub fn new(items: &[T], index: usize, page_size: usize) -> Result<Self> {
        if index >= items.len() {
            return Err(CacheError::InvalidPage(format!(
                "index {} out of range for {} items",
                index,
                items.len()
            )));
        }
        validate(1, page_size)?;

        let end = index.saturating_add(page_size).min(items.len());
        let data = items[index..end].to_vec();
        let next_index = index
            .checked_add(page_size)
            .filter(|next| *next < items.len());

        Ok(Self {
            index,
            next_index,
            page_size: data.len(),
            data,
        })
    }
}
