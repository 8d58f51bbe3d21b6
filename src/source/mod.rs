//! Source module
//!
//! Contracts for the result sets the pager consumes, plus ready-made sources.
//!
//! # Overview
//!
//! The source module provides:
//! - `ChunkedSource` - Forward-only result set delivered in protocol pages
//! - `PageFetcher` - One-request-per-protocol-page query execution
//! - `FetchedPages` - `ChunkedSource` driven by a `PageFetcher` and paging states
//! - `MemoryPages` - `ChunkedSource` over elements already in memory
//!
//! Blocking sources need no trait: any `IntoIterator` works with
//! [`Pager::get_page`](crate::Pager::get_page).

mod fetched;
mod memory;
mod types;

pub use fetched::FetchedPages;
pub use memory::MemoryPages;
pub use types::{ChunkedSource, PageFetcher, PagingState, ProtocolPage};

#[cfg(test)]
mod tests;
