//! Reveal limits for the kept-item sections of a rule's detail.
//!
//! The limits only decide how many formatted entries a consumer shows; they
//! never affect counts.

use crate::index::ElementKind;
use serde::Serialize;

/// Items revealed per "show more" step unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailPagination {
    page_size: usize,
    classes: usize,
    methods: usize,
    fields: usize,
}

impl Default for DetailPagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DetailPagination {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            classes: page_size,
            methods: page_size,
            fields: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn limit(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Class => self.classes,
            ElementKind::Method => self.methods,
            ElementKind::Field => self.fields,
        }
    }

    /// Reveal one more page of `kind`.
    pub fn show_more(&mut self, kind: ElementKind) {
        let limit = match kind {
            ElementKind::Class => &mut self.classes,
            ElementKind::Method => &mut self.methods,
            ElementKind::Field => &mut self.fields,
        };
        *limit = limit.saturating_add(self.page_size);
    }

    /// Back to one page of every kind.
    pub fn reset(&mut self) {
        *self = Self::new(self.page_size);
    }

    /// Number of entries shown out of `total`.
    pub fn visible(&self, kind: ElementKind, total: usize) -> usize {
        total.min(self.limit(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_limits() {
        let pagination = DetailPagination::default();
        for kind in ElementKind::ALL {
            assert_eq!(pagination.limit(kind), 100);
        }
    }

    #[test]
    fn test_show_more_is_per_kind() {
        let mut pagination = DetailPagination::default();
        pagination.show_more(ElementKind::Class);
        assert_eq!(pagination.limit(ElementKind::Class), 200);
        assert_eq!(pagination.limit(ElementKind::Method), 100);
        assert_eq!(pagination.limit(ElementKind::Field), 100);
    }

    #[test]
    fn test_visible_caps_at_total() {
        let mut pagination = DetailPagination::default();
        assert_eq!(pagination.visible(ElementKind::Class, 250), 100);
        pagination.show_more(ElementKind::Class);
        assert_eq!(pagination.visible(ElementKind::Class, 250), 200);
        pagination.show_more(ElementKind::Class);
        assert_eq!(pagination.visible(ElementKind::Class, 250), 250);
    }

    #[test]
    fn test_reset_keeps_page_size() {
        let mut pagination = DetailPagination::new(25);
        pagination.show_more(ElementKind::Field);
        pagination.reset();
        assert_eq!(pagination.limit(ElementKind::Field), 25);
        assert_eq!(pagination.page_size(), 25);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        assert_eq!(DetailPagination::new(0).page_size(), 1);
    }
}
