//! The list views a consumer can switch between.

use serde::{Deserialize, Serialize};

/// Current list view.
///
/// Every view is reachable from every other; switching always re-runs the
/// view's filter with an empty query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// All keep rules by blast radius.
    #[default]
    Rules,
    /// Rules that keep nothing.
    Unused,
    /// Rules subsumed by another rule.
    Redundant,
    /// Origin files by deduplicated blast radius.
    Files,
}

impl View {
    pub fn display_name(&self) -> &'static str {
        match self {
            View::Rules => "Keep Rules",
            View::Unused => "Unused Rules",
            View::Redundant => "Redundant Rules",
            View::Files => "Files",
        }
    }

    /// Placeholder for the search box in this view.
    pub fn search_placeholder(&self) -> &'static str {
        match self {
            View::Files => "Search files...",
            _ => "Search keep rules...",
        }
    }

    /// Whether the view lists rules (as opposed to files).
    pub fn lists_rules(&self) -> bool {
        !matches!(self, View::Files)
    }

    pub fn all() -> &'static [View] {
        &[View::Rules, View::Unused, View::Redundant, View::Files]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_rules() {
        assert_eq!(View::default(), View::Rules);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(View::Files.search_placeholder(), "Search files...");
        assert_eq!(View::Unused.search_placeholder(), "Search keep rules...");
    }

    #[test]
    fn test_only_files_view_lists_files() {
        let rule_views: Vec<_> = View::all().iter().filter(|v| v.lists_rules()).collect();
        assert_eq!(rule_views.len(), 3);
    }
}
