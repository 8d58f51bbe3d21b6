//! Pager configuration
//!
//! Settings loaded from YAML, e.g.:
//!
//! ```yaml
//! out_of_bounds: return_last_page
//! page_size: 50
//! fetch_size: 5000
//! ```

use crate::error::{Error, Result};
use crate::pager::{OutOfBoundsStrategy, Pager};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of elements per logical page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default number of elements per protocol page
pub const DEFAULT_FETCH_SIZE: usize = 5000;

/// Pager settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagerConfig {
    /// Behavior when the requested page is past the end of the data
    pub out_of_bounds: OutOfBoundsStrategy,
    /// Elements per logical page
    pub page_size: usize,
    /// Elements per protocol page, for sources that let the caller choose
    pub fetch_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            out_of_bounds: OutOfBoundsStrategy::default(),
            page_size: DEFAULT_PAGE_SIZE,
            fetch_size: DEFAULT_FETCH_SIZE,
        }
    }
}

impl PagerConfig {
    /// Build the configured pager
    pub fn pager(&self) -> Pager {
        Pager::new(self.out_of_bounds)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size must be at least 1"));
        }
        if self.fetch_size == 0 {
            return Err(Error::config("fetch_size must be at least 1"));
        }
        Ok(())
    }
}

/// Load pager settings from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_config_from_str(&content)
}

/// Load pager settings from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    let config: PagerConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    Ok(config)
}
