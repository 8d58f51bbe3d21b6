//! Source types and traits
//!
//! Defines the contracts a database client implements to feed the pager.

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A forward-only result set delivered in protocol pages.
///
/// `fetch_next_page` consumes the source and resolves to a new one positioned
/// at the next protocol page, so a source can only ever be traversed once.
#[async_trait]
pub trait ChunkedSource: Send + Sized {
    /// Element type of the result set
    type Item: Send;

    /// Elements already materialized for the active protocol page
    fn current_page(&self) -> &[Self::Item];

    /// Take ownership of the active protocol page's elements, leaving it empty
    fn take_current_page(&mut self) -> Vec<Self::Item>;

    /// Whether the server has more protocol pages after the active one
    fn has_more_pages(&self) -> bool;

    /// Fetch the next protocol page. Fails with `Error::Fetch` when
    /// [`has_more_pages`](Self::has_more_pages) is false.
    async fn fetch_next_page(self) -> Result<Self>;
}

/// Opaque server-side cursor identifying where the next protocol page starts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PagingState(Bytes);

impl PagingState {
    /// Wrap raw paging state bytes
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Raw bytes, to be sent back with the next request
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the underlying buffer
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl From<Vec<u8>> for PagingState {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&'static [u8]> for PagingState {
    fn from(bytes: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(bytes))
    }
}

/// One protocol page as returned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolPage<T> {
    /// Elements of this protocol page, possibly none
    pub elements: Vec<T>,
    /// Where the next protocol page starts, `None` if this is the final one
    pub paging_state: Option<PagingState>,
}

impl<T> ProtocolPage<T> {
    /// Create a protocol page followed by more pages
    pub fn with_next(elements: Vec<T>, paging_state: impl Into<PagingState>) -> Self {
        Self {
            elements,
            paging_state: Some(paging_state.into()),
        }
    }

    /// Create the final protocol page of a result set
    pub fn last(elements: Vec<T>) -> Self {
        Self {
            elements,
            paging_state: None,
        }
    }

    /// Check if more protocol pages follow
    pub fn has_next(&self) -> bool {
        self.paging_state.is_some()
    }
}

/// Executes a paged query, one protocol page per call
#[async_trait]
pub trait PageFetcher: Send {
    /// Element type of the result set
    type Item: Send;

    /// Fetch the protocol page starting at `paging_state`, or the first page
    /// if `None`
    async fn fetch(&mut self, paging_state: Option<PagingState>)
        -> Result<ProtocolPage<Self::Item>>;
}
