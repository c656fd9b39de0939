use crate::errors::{Error, Result};
use crate::query::DEFAULT_PAGE_SIZE;
use crate::summary::DEFAULT_TOP_RULES;
use serde::{Deserialize, Serialize};

/// Display configuration for the detail and summary output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Kept items revealed per page in a rule's detail (default: 100)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Rules listed per report in summaries (default: 10)
    #[serde(default = "default_top_rules")]
    pub top_rules: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            top_rules: default_top_rules(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("display.page_size must be at least 1".into()));
        }
        Ok(())
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_top_rules() -> usize {
    DEFAULT_TOP_RULES
}
