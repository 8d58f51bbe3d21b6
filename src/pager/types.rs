//! Pager types
//!
//! The page value returned by every pagination call and the strategy that
//! decides what happens when a caller asks for a page past the end of the data.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Page
// ============================================================================

/// A logical page returned as the result of an offset query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    elements: Vec<T>,
    page_number: usize,
    is_last: bool,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(elements: Vec<T>, page_number: usize, is_last: bool) -> Self {
        Self {
            elements,
            page_number,
            is_last,
        }
    }

    /// Create an empty last page with the given number
    pub fn empty(page_number: usize) -> Self {
        Self::new(Vec::new(), page_number, true)
    }

    /// The elements in the page
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// The page number.
    ///
    /// It matches the requested page number, except when the requested page was
    /// past the end of the data and the strategy is
    /// [`OutOfBoundsStrategy::ReturnLastPage`].
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Whether no element exists after this page
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Number of elements in the page
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the page holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consume the page and return its elements
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// ============================================================================
// Out Of Bounds Strategy
// ============================================================================

/// What to do if the caller requests a page past the end of the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsStrategy {
    /// Fail with [`Error::OutOfRange`].
    ///
    /// The first page of an empty result set is still returned (empty) rather
    /// than failing.
    #[default]
    Fail,

    /// Return the last non-empty page instead of the requested one. Its page
    /// number differs from the requested one.
    ReturnLastPage,

    /// Return a page with the requested number but no elements
    ReturnEmptyPage,
}

impl OutOfBoundsStrategy {
    /// All strategies, in declaration order
    pub const ALL: [Self; 3] = [Self::Fail, Self::ReturnLastPage, Self::ReturnEmptyPage];

    /// Canonical name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::ReturnLastPage => "return_last_page",
            Self::ReturnEmptyPage => "return_empty_page",
        }
    }

    /// Whether the strategy needs the page currently being formed at all times
    pub(crate) fn tracks_current_page(&self) -> bool {
        match self {
            Self::ReturnLastPage => true,
            Self::Fail | Self::ReturnEmptyPage => false,
        }
    }
}

impl fmt::Display for OutOfBoundsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutOfBoundsStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "fail" => Ok(Self::Fail),
            "return_last_page" => Ok(Self::ReturnLastPage),
            "return_empty_page" => Ok(Self::ReturnEmptyPage),
            _ => Err(Error::config(format!(
                "Unknown out of bounds strategy '{s}', expected one of: fail, return_last_page, return_empty_page"
            ))),
        }
    }
}
