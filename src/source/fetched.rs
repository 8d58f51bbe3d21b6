//! Paging-state driven source
//!
//! Adapts a [`PageFetcher`] into a [`ChunkedSource`]: each protocol page
//! carries the paging state needed to request the next one.

use super::types::{ChunkedSource, PageFetcher, PagingState, ProtocolPage};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use tracing::debug;

/// Result set fetched protocol page by protocol page from a [`PageFetcher`]
pub struct FetchedPages<F: PageFetcher> {
    fetcher: F,
    current: Vec<F::Item>,
    paging_state: Option<PagingState>,
    fetches: usize,
}

impl<F: PageFetcher> FetchedPages<F> {
    /// Run the initial request and position the source on the first protocol page
    pub async fn first(mut fetcher: F) -> Result<Self> {
        let page = fetcher.fetch(None).await?;
        Ok(Self::positioned(fetcher, page, 1))
    }

    /// Wrap a first protocol page that the caller already received
    pub fn from_first_page(fetcher: F, page: ProtocolPage<F::Item>) -> Self {
        Self::positioned(fetcher, page, 0)
    }

    fn positioned(fetcher: F, page: ProtocolPage<F::Item>, fetches: usize) -> Self {
        Self {
            fetcher,
            current: page.elements,
            paging_state: page.paging_state,
            fetches,
        }
    }

    /// Number of requests sent to the fetcher so far
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    /// Paging state of the next protocol page, if any
    pub fn paging_state(&self) -> Option<&PagingState> {
        self.paging_state.as_ref()
    }

    /// Release the underlying fetcher
    pub fn into_fetcher(self) -> F {
        self.fetcher
    }
}

impl<F: PageFetcher> fmt::Debug for FetchedPages<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedPages")
            .field("buffered", &self.current.len())
            .field("paging_state", &self.paging_state)
            .field("fetches", &self.fetches)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F: PageFetcher> ChunkedSource for FetchedPages<F> {
    type Item = F::Item;

    fn current_page(&self) -> &[F::Item] {
        &self.current
    }

    fn take_current_page(&mut self) -> Vec<F::Item> {
        std::mem::take(&mut self.current)
    }

    fn has_more_pages(&self) -> bool {
        self.paging_state.is_some()
    }

    async fn fetch_next_page(mut self) -> Result<Self> {
        // Without a paging state the fetcher would restart the query
        let Some(paging_state) = self.paging_state.take() else {
            return Err(Error::fetch(format!(
                "no protocol page after fetch {}",
                self.fetches
            )));
        };
        let page = self.fetcher.fetch(Some(paging_state)).await?;
        self.fetches += 1;
        debug!(
            "Fetched protocol page {} with {} elements (more: {})",
            self.fetches,
            page.elements.len(),
            page.has_next()
        );
        self.current = page.elements;
        self.paging_state = page.paging_state;
        Ok(self)
    }
}
