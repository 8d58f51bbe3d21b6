//! Blocking pagination over a forward-only iterator
//!
//! Runs entirely on the calling thread. The source is consumed once from its
//! start and never rewound.

use super::collector::{PageCollector, Progress};
use super::types::Page;
use super::Pager;
use crate::error::Result;
use tracing::debug;

impl Pager {
    /// Skip the beginning of a set of results to return the given page,
    /// assuming the given page size.
    ///
    /// `target_page_number` is 1-based. Both it and `page_size` must be at
    /// least 1, otherwise [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// is returned before the source is touched.
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if the page lies
    /// past the end of the data and the strategy is
    /// [`OutOfBoundsStrategy::Fail`](super::OutOfBoundsStrategy::Fail).
    pub fn get_page<I, T>(
        &self,
        source: I,
        target_page_number: usize,
        page_size: usize,
    ) -> Result<Page<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.try_get_page(source.into_iter().map(Ok), target_page_number, page_size)
    }

    /// Same as [`Pager::get_page`] for a source whose iteration can fail.
    ///
    /// The first error pulled from the source aborts the call and is returned
    /// as-is; no partial page is produced.
    pub fn try_get_page<I, T>(
        &self,
        source: I,
        target_page_number: usize,
        page_size: usize,
    ) -> Result<Page<T>>
    where
        I: IntoIterator<Item = Result<T>>,
    {
        Self::validate(target_page_number, page_size)?;
        debug!(
            "Requesting page {} (size {}, strategy {})",
            target_page_number, page_size, self.strategy
        );

        let mut iter = source.into_iter();
        let mut collector = PageCollector::new(self.strategy, target_page_number, page_size);

        let page = loop {
            let Some(element) = iter.next() else {
                break collector.finish_exhausted()?;
            };
            if collector.push(element?) == Progress::TargetFilled {
                // Consumes one extra element to detect trailing data
                let is_last = match iter.next() {
                    None => true,
                    Some(Ok(_)) => false,
                    Some(Err(e)) => return Err(e),
                };
                break collector.into_page(is_last);
            }
        };

        debug!(
            "Returning page {} with {} elements (last: {})",
            page.page_number(),
            page.len(),
            page.is_last()
        );
        Ok(page)
    }
}
