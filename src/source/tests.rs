//! Tests for source module

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use pretty_assertions::assert_eq;

/// Fetcher replaying a fixed list of protocol pages and recording the paging
/// states it was asked for
struct ScriptedFetcher {
    pages: Vec<ProtocolPage<u32>>,
    requests: Vec<Option<PagingState>>,
}

impl ScriptedFetcher {
    fn new(pages: Vec<ProtocolPage<u32>>) -> Self {
        Self {
            pages,
            requests: Vec::new(),
        }
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    type Item = u32;

    async fn fetch(&mut self, paging_state: Option<PagingState>) -> Result<ProtocolPage<u32>> {
        let index = self.requests.len();
        self.requests.push(paging_state);
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| Error::fetch(format!("no page {index}")))
    }
}

// ============================================================================
// MemoryPages Tests
// ============================================================================

#[test]
fn test_memory_pages_splits_by_fetch_size() {
    let mut source = MemoryPages::new(vec![1, 2, 3, 4, 5], 2).unwrap();
    assert_eq!(source.current_page(), &[1, 2]);
    assert!(source.has_more_pages());
    assert_eq!(source.take_current_page(), vec![1, 2]);
    assert!(source.current_page().is_empty());
}

#[test]
fn test_memory_pages_empty_input() {
    let source: MemoryPages<u32> = MemoryPages::new(Vec::new(), 3).unwrap();
    assert!(source.current_page().is_empty());
    assert!(!source.has_more_pages());
}

#[test]
fn test_memory_pages_rejects_zero_fetch_size() {
    let err = MemoryPages::new(vec![1], 0).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[tokio::test]
async fn test_memory_pages_fetches_in_order() {
    let source = MemoryPages::new(vec![1, 2, 3, 4, 5], 2).unwrap();

    let source = source.fetch_next_page().await.unwrap();
    assert_eq!(source.current_page(), &[3, 4]);
    assert_eq!(source.fetches(), 1);

    let source = source.fetch_next_page().await.unwrap();
    assert_eq!(source.current_page(), &[5]);
    assert!(!source.has_more_pages());
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn test_memory_pages_keeps_empty_chunks() {
    let source = MemoryPages::from_chunks(vec![vec!['a'], vec![], vec!['b']]);
    let source = source.fetch_next_page().await.unwrap();
    assert!(source.current_page().is_empty());
    assert!(source.has_more_pages());
    let source = source.fetch_next_page().await.unwrap();
    assert_eq!(source.current_page(), &['b']);
}

#[tokio::test]
async fn test_memory_pages_fetch_past_end_fails() {
    let source = MemoryPages::new(vec![1], 5).unwrap();
    let err = source.fetch_next_page().await.unwrap_err();
    assert!(matches!(err, Error::Fetch { .. }));
}

// ============================================================================
// FetchedPages Tests
// ============================================================================

#[tokio::test]
async fn test_fetched_pages_fetch_past_end_fails() {
    // A second scripted page would answer a restarted query
    let fetcher = ScriptedFetcher::new(vec![
        ProtocolPage::last(vec![1, 2]),
        ProtocolPage::last(vec![1, 2]),
    ]);
    let source = FetchedPages::first(fetcher).await.unwrap();
    assert!(!source.has_more_pages());

    let err = source.fetch_next_page().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to fetch next page: no protocol page after fetch 1"
    );
}

#[tokio::test]
async fn test_fetched_pages_hands_back_paging_state() {
    let fetcher = ScriptedFetcher::new(vec![
        ProtocolPage::with_next(vec![1, 2], vec![0xA]),
        ProtocolPage::with_next(vec![3], vec![0xB]),
        ProtocolPage::last(vec![4, 5]),
    ]);

    let source = FetchedPages::first(fetcher).await.unwrap();
    assert_eq!(source.current_page(), &[1, 2]);
    assert_eq!(source.paging_state(), Some(&PagingState::from(vec![0xA])));
    assert_eq!(source.fetches(), 1);

    let source = source.fetch_next_page().await.unwrap();
    assert_eq!(source.current_page(), &[3]);

    let source = source.fetch_next_page().await.unwrap();
    assert_eq!(source.current_page(), &[4, 5]);
    assert!(!source.has_more_pages());
    assert_eq!(source.fetches(), 3);

    let fetcher = source.into_fetcher();
    assert_eq!(
        fetcher.requests,
        vec![
            None,
            Some(PagingState::from(vec![0xA])),
            Some(PagingState::from(vec![0xB])),
        ]
    );
}

#[tokio::test]
async fn test_fetched_pages_from_first_page() {
    let fetcher = ScriptedFetcher::new(vec![ProtocolPage::last(vec![7])]);
    let first = ProtocolPage::with_next(vec![6], vec![1, 2, 3]);

    let source = FetchedPages::from_first_page(fetcher, first);
    assert_eq!(source.fetches(), 0);
    assert_eq!(source.paging_state().map(PagingState::as_bytes), Some(&[1, 2, 3][..]));

    let source = source.fetch_next_page().await.unwrap();
    assert_eq!(source.current_page(), &[7]);
    assert_eq!(source.fetches(), 1);
}

#[tokio::test]
async fn test_fetched_pages_propagates_fetch_error() {
    let fetcher = ScriptedFetcher::new(vec![ProtocolPage::with_next(vec![1], vec![9])]);
    let source = FetchedPages::first(fetcher).await.unwrap();
    let err = source.fetch_next_page().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch next page: no page 1");
}

#[test]
fn test_protocol_page_has_next() {
    assert!(ProtocolPage::with_next(vec![1], vec![1]).has_next());
    assert!(!ProtocolPage::<u32>::last(Vec::new()).has_next());
}
