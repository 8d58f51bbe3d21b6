//! Asynchronous pagination over a chunked source
//!
//! Same semantics as the blocking algorithm, but elements arrive in protocol
//! pages that are fetched one at a time. Protocol-page boundaries are unrelated
//! to logical-page boundaries.

use super::collector::{PageCollector, Progress};
use super::types::Page;
use super::Pager;
use crate::error::Result;
use crate::source::ChunkedSource;
use std::future::Future;
use tracing::debug;

impl Pager {
    /// Skip the beginning of a set of results to return the given page,
    /// assuming the given page size.
    ///
    /// Argument validation happens immediately: an invalid page number or size
    /// is returned as the outer `Err` and no future is created. Everything else
    /// (out-of-range pages, fetch failures) is reported by the future.
    ///
    /// The future suspends only while fetching the next protocol page, with at
    /// most one fetch in flight. Dropping it abandons the call.
    pub fn get_page_async<S>(
        &self,
        source: S,
        target_page_number: usize,
        page_size: usize,
    ) -> Result<impl Future<Output = Result<Page<S::Item>>> + Send>
    where
        S: ChunkedSource,
    {
        Self::validate(target_page_number, page_size)?;
        debug!(
            "Requesting page {} (size {}, strategy {})",
            target_page_number, page_size, self.strategy
        );

        let collector = PageCollector::new(self.strategy, target_page_number, page_size);
        Ok(collect_chunks(source, collector))
    }
}

/// Drive the collector across protocol pages until the target page is
/// complete or the source is exhausted
async fn collect_chunks<S>(
    mut source: S,
    mut collector: PageCollector<S::Item>,
) -> Result<Page<S::Item>>
where
    S: ChunkedSource,
{
    loop {
        let mut chunk = source.take_current_page().into_iter();

        while let Some(element) = chunk.next() {
            if collector.push(element) == Progress::TargetFilled {
                let is_last = if !chunk.as_slice().is_empty() {
                    false
                } else if !source.has_more_pages() {
                    true
                } else {
                    // The server may send an empty trailing protocol page
                    debug!("Target page complete, fetching next protocol page to check for more");
                    let next = source.fetch_next_page().await?;
                    next.current_page().is_empty()
                };
                let page = collector.into_page(is_last);
                debug!(
                    "Returning page {} with {} elements (last: {})",
                    page.page_number(),
                    page.len(),
                    page.is_last()
                );
                return Ok(page);
            }
        }

        if !source.has_more_pages() {
            return collector.finish_exhausted();
        }

        debug!(
            "Protocol page exhausted after {} elements, fetching next",
            collector.total_count()
        );
        source = source.fetch_next_page().await?;
    }
}
