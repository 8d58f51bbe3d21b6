//! In-memory chunked source
//!
//! Serves a fixed list of elements as a sequence of protocol pages. Useful for
//! results that are already materialized and for exercising the pager.

use super::types::ChunkedSource;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;

/// A result set held in memory and split into protocol pages
#[derive(Debug, Clone)]
pub struct MemoryPages<T> {
    current: Vec<T>,
    remaining: VecDeque<Vec<T>>,
    fetches: usize,
}

impl<T> MemoryPages<T> {
    /// Split `elements` into protocol pages of `fetch_size` elements (the last
    /// one may be shorter). An empty input yields a single empty page.
    pub fn new(elements: Vec<T>, fetch_size: usize) -> Result<Self> {
        if fetch_size == 0 {
            return Err(Error::invalid_argument("fetch_size", fetch_size));
        }

        let mut chunks: Vec<Vec<T>> = Vec::with_capacity(elements.len().div_ceil(fetch_size));
        let mut iter = elements.into_iter().peekable();
        while iter.peek().is_some() {
            chunks.push(iter.by_ref().take(fetch_size).collect());
        }
        Ok(Self::from_chunks(chunks))
    }

    /// Use the given protocol pages as-is, including empty ones
    pub fn from_chunks(chunks: impl IntoIterator<Item = Vec<T>>) -> Self {
        let mut remaining: VecDeque<Vec<T>> = chunks.into_iter().collect();
        let current = remaining.pop_front().unwrap_or_default();
        Self {
            current,
            remaining,
            fetches: 0,
        }
    }

    /// Number of protocol pages fetched so far
    pub fn fetches(&self) -> usize {
        self.fetches
    }
}

#[async_trait]
impl<T: Send> ChunkedSource for MemoryPages<T> {
    type Item = T;

    fn current_page(&self) -> &[T] {
        &self.current
    }

    fn take_current_page(&mut self) -> Vec<T> {
        std::mem::take(&mut self.current)
    }

    fn has_more_pages(&self) -> bool {
        !self.remaining.is_empty()
    }

    async fn fetch_next_page(mut self) -> Result<Self> {
        let next = self.remaining.pop_front().ok_or_else(|| {
            Error::fetch(format!(
                "no protocol page after fetch {} of in-memory result",
                self.fetches
            ))
        })?;
        self.current = next;
        self.fetches += 1;
        Ok(self)
    }
}
