//! Pager module
//!
//! Converts a forward-only stream of result elements into fixed-size logical
//! pages addressed by a 1-based page number.
//!
//! # Overview
//!
//! The pager module provides:
//! - `Pager` - Stateless pagination entry points, configured with a strategy
//! - `Page` - Immutable result of a pagination call
//! - `OutOfBoundsStrategy` - Behavior when the requested page is past the end
//!
//! Two algorithms share one per-element core: a blocking one over any
//! iterator, and an asynchronous one over a [`ChunkedSource`](crate::source::ChunkedSource)
//! that delivers elements in server-controlled protocol pages.

mod blocking;
mod chunked;
mod collector;
mod types;

pub use types::{OutOfBoundsStrategy, Page};

use crate::error::{Error, Result};

/// Offset pager.
///
/// Holds only its [`OutOfBoundsStrategy`]. Every call keeps its counters and
/// buffer locally, so one instance can be shared freely across threads and
/// tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    strategy: OutOfBoundsStrategy,
}

impl Pager {
    /// Create a pager with the given out of bounds strategy
    pub fn new(strategy: OutOfBoundsStrategy) -> Self {
        Self { strategy }
    }

    /// The configured out of bounds strategy
    pub fn strategy(&self) -> OutOfBoundsStrategy {
        self.strategy
    }

    fn validate(target_page_number: usize, page_size: usize) -> Result<()> {
        if target_page_number == 0 {
            return Err(Error::invalid_argument(
                "target_page_number",
                target_page_number,
            ));
        }
        if page_size == 0 {
            return Err(Error::invalid_argument("page_size", page_size));
        }
        Ok(())
    }
}

impl From<OutOfBoundsStrategy> for Pager {
    fn from(strategy: OutOfBoundsStrategy) -> Self {
        Self::new(strategy)
    }
}
