// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Offset Pager
//!
//! Offset pagination for database result sets.
//!
//! Database servers return query results in protocol pages whose size the
//! caller does not control. This crate turns such a forward-only result set
//! into fixed-size logical pages addressed by a 1-based page number, without
//! rewinding or re-fetching anything.
//!
//! ## Features
//!
//! - **Blocking pagination** over any iterator, fallible or not
//! - **Async pagination** over chunked sources, one protocol page fetch at a time
//! - **Out of bounds strategies**: fail, return the last page, or return an empty page
//! - **Paging-state sources**: drive a paged query through a `PageFetcher`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use offset_pager::{MemoryPages, OutOfBoundsStrategy, Pager, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let pager = Pager::new(OutOfBoundsStrategy::ReturnLastPage);
//!
//!     // Blocking: any iterator
//!     let page = pager.get_page(1..=10, 2, 3)?;
//!     assert_eq!(page.elements(), &[4, 5, 6]);
//!
//!     // Async: protocol pages of 4 elements
//!     let source = MemoryPages::new((1..=10).collect(), 4)?;
//!     let page = pager.get_page_async(source, 4, 3)?.await?;
//!     assert_eq!(page.elements(), &[10]);
//!     assert!(page.is_last());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                            Pager                              │
//! │   get_page(iter)  try_get_page(iter)  get_page_async(source)  │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 │        PageCollector        │
//!                 │  counters + owned buffer    │
//!                 └──────────────┬──────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────────┬────────────────┐
//! │  Iterator    │         ChunkedSource         │   Strategy     │
//! ├──────────────┼───────────────────────────────┼────────────────┤
//! │ any source   │ MemoryPages                   │ Fail           │
//! │              │ FetchedPages<PageFetcher>     │ ReturnLastPage │
//! │              │                               │ ReturnEmptyPage│
//! └──────────────┴───────────────────────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Logical pages, strategies and the pagination algorithms
pub mod pager;

/// Result set sources
pub mod source;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::{load_config, load_config_from_str, PagerConfig};
pub use pager::{OutOfBoundsStrategy, Page, Pager};
pub use source::{
    ChunkedSource, FetchedPages, MemoryPages, PageFetcher, PagingState, ProtocolPage,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
