//! Per-element page accounting shared by the blocking and chunked algorithms
//!
//! A `PageCollector` owns the counters and the element buffer of a single
//! pagination call. It is moved, never copied, across protocol-page fetches.

use super::types::{OutOfBoundsStrategy, Page};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Outcome of pushing one element into the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    /// Keep consuming the source
    Collecting,
    /// The target page holds `page_size` elements; stop consuming
    TargetFilled,
}

/// Counters and buffer for one pagination call
#[derive(Debug)]
pub(crate) struct PageCollector<T> {
    strategy: OutOfBoundsStrategy,
    target_page_number: usize,
    page_size: usize,
    current_page_number: usize,
    current_page_size: usize,
    /// Target page elements, or the page being formed under `ReturnLastPage`
    elements: Vec<T>,
}

impl<T> PageCollector<T> {
    /// Create a collector positioned before the first element
    pub(crate) fn new(
        strategy: OutOfBoundsStrategy,
        target_page_number: usize,
        page_size: usize,
    ) -> Self {
        Self {
            strategy,
            target_page_number,
            page_size,
            current_page_number: 1,
            current_page_size: 0,
            elements: Vec::new(),
        }
    }

    /// Account for the next element of the source
    pub(crate) fn push(&mut self, element: T) -> Progress {
        self.current_page_size += 1;

        if self.current_page_size > self.page_size {
            self.current_page_number += 1;
            self.current_page_size = 1;
            trace!("Entering logical page {}", self.current_page_number);
            if self.strategy.tracks_current_page() {
                self.elements.clear();
            }
        }

        if self.on_target_page() || self.strategy.tracks_current_page() {
            self.elements.push(element);
        }

        if self.on_target_page() && self.current_page_size == self.page_size {
            Progress::TargetFilled
        } else {
            Progress::Collecting
        }
    }

    fn on_target_page(&self) -> bool {
        self.current_page_number == self.target_page_number
    }

    /// Number of elements seen so far
    pub(crate) fn total_count(&self) -> usize {
        (self.current_page_number - 1) * self.page_size + self.current_page_size
    }

    /// Build the page from the buffered elements
    pub(crate) fn into_page(self, is_last: bool) -> Page<T> {
        Page::new(self.elements, self.current_page_number, is_last)
    }

    /// Finish after the source ran out of elements, applying the strategy if
    /// the target page was never reached
    pub(crate) fn finish_exhausted(self) -> Result<Page<T>> {
        if self.on_target_page() {
            return Ok(self.into_page(true));
        }

        debug!(
            "Page {} past end of data ({} elements), applying {}",
            self.target_page_number,
            self.total_count(),
            self.strategy
        );

        match self.strategy {
            OutOfBoundsStrategy::ReturnLastPage => Ok(self.into_page(true)),
            OutOfBoundsStrategy::ReturnEmptyPage => Ok(Page::empty(self.target_page_number)),
            OutOfBoundsStrategy::Fail => Err(Error::OutOfRange {
                target_page: self.target_page_number,
                total_count: self.total_count(),
                pages_present: self.current_page_number,
                page_size: self.page_size,
            }),
        }
    }
}
