//! Query layer over a loaded [`Snapshot`](crate::index::Snapshot).
//!
//! Filters and detail builders are free functions over a snapshot; the
//! [`Explorer`] ties them to a current view, search text, and selection.

pub mod detail;
pub mod explorer;
pub mod filter;
pub mod pagination;
pub mod view;

pub use detail::{
    origin_string, DetailSection, FileDetail, FileRow, KeptEntry, Overview, RuleDetail, RuleRow,
    SubsumerInfo,
};
pub use explorer::{Explorer, Selection};
pub use filter::{
    filter_files, filter_redundant_rules, filter_rules, filter_unused_rules,
    is_same_origin_subsumption, matches_query,
};
pub use pagination::{DetailPagination, DEFAULT_PAGE_SIZE};
pub use view::View;
