//! Session state over the currently loaded report.
//!
//! The explorer owns at most one [`Snapshot`]. A load decodes and indexes the
//! new report completely before swapping it in, so a failed load leaves the
//! previous snapshot, view, and results untouched.

use super::detail::{FileDetail, Overview, RuleDetail};
use super::filter::{filter_files, filter_redundant_rules, filter_rules, filter_unused_rules};
use super::pagination::{DetailPagination, DEFAULT_PAGE_SIZE};
use super::view::View;
use crate::errors::{Error, Result};
use crate::index::{ElementKind, FileAggregate, Snapshot};
use crate::report::{EntityId, KeepRuleBlastRadius, Report};
use std::path::Path;
use tracing::{debug, info};

/// What the detail pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Rule(EntityId),
    File(String),
}

/// Current list results, stored as keys into the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Results {
    Rules(Vec<EntityId>),
    Files(Vec<String>),
}

impl Default for Results {
    fn default() -> Self {
        Results::Rules(Vec::new())
    }
}

#[derive(Debug, Clone)]
pub struct Explorer {
    snapshot: Option<Snapshot>,
    view: View,
    search: String,
    results: Results,
    selection: Option<Selection>,
    pagination: DetailPagination,
}

fn rule_ids(rules: Vec<&KeepRuleBlastRadius>) -> Vec<EntityId> {
    rules.iter().map(|rule| rule.id).collect()
}

impl Default for Explorer {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            snapshot: None,
            view: View::default(),
            search: String::new(),
            results: Results::default(),
            selection: None,
            pagination: DetailPagination::new(page_size),
        }
    }

    pub fn load_json(&mut self, text: &str) -> Result<()> {
        let report = Report::from_json(text)?;
        self.load_report(report);
        Ok(())
    }

    pub fn load_slice(&mut self, bytes: &[u8]) -> Result<()> {
        let report = Report::from_slice(bytes)?;
        self.load_report(report);
        Ok(())
    }

    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let report = Report::from_path(path)?;
        info!(path = %path.display(), "loaded report");
        self.load_report(report);
        Ok(())
    }

    /// Index an already decoded report and make it current.
    ///
    /// Keeps the current view; search text and selection are cleared.
    pub fn load_report(&mut self, report: Report) {
        self.snapshot = Some(Snapshot::build(report));
        self.search.clear();
        self.selection = None;
        self.pagination.reset();
        self.refresh();
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn pagination(&self) -> &DetailPagination {
        &self.pagination
    }

    /// Change the list view, clearing the search and the selection.
    pub fn switch_view(&mut self, view: View) {
        debug!(from = ?self.view, to = ?view, "switching view");
        self.view = view;
        self.search.clear();
        self.selection = None;
        self.refresh();
    }

    /// Re-run the current view's filter with `query`.
    pub fn search(&mut self, query: &str) {
        self.search = query.to_string();
        self.refresh();
    }

    fn refresh(&mut self) {
        let Some(snapshot) = &self.snapshot else {
            self.results = Results::default();
            return;
        };
        self.results = match self.view {
            View::Rules => Results::Rules(rule_ids(filter_rules(snapshot, &self.search))),
            View::Unused => Results::Rules(rule_ids(filter_unused_rules(snapshot, &self.search))),
            View::Redundant => {
                Results::Rules(rule_ids(filter_redundant_rules(snapshot, &self.search)))
            }
            View::Files => Results::Files(
                filter_files(snapshot, &self.search)
                    .into_iter()
                    .map(|f| f.name.clone())
                    .collect(),
            ),
        };
    }

    /// Rules listed by the current view, empty in the files view.
    pub fn current_rules(&self) -> Vec<&KeepRuleBlastRadius> {
        match (&self.snapshot, &self.results) {
            (Some(snapshot), Results::Rules(ids)) => {
                ids.iter().filter_map(|&id| snapshot.rule(id)).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Files listed by the files view, empty otherwise.
    pub fn current_files(&self) -> Vec<&FileAggregate> {
        match (&self.snapshot, &self.results) {
            (Some(snapshot), Results::Files(names)) => names
                .iter()
                .filter_map(|name| snapshot.files().get(name))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Select a rule for the detail pane. Pagination always starts over.
    pub fn select_rule(&mut self, id: EntityId) -> Result<()> {
        let snapshot = self.snapshot.as_ref().ok_or(Error::NoSnapshot)?;
        if snapshot.rule(id).is_none() {
            return Err(Error::UnknownRule(id));
        }
        self.selection = Some(Selection::Rule(id));
        self.pagination.reset();
        Ok(())
    }

    pub fn select_file(&mut self, name: &str) -> Result<()> {
        let snapshot = self.snapshot.as_ref().ok_or(Error::NoSnapshot)?;
        if snapshot.files().get(name).is_none() {
            return Err(Error::UnknownFile(name.to_string()));
        }
        self.selection = Some(Selection::File(name.to_string()));
        self.pagination.reset();
        Ok(())
    }

    /// Reveal another page of `kind` in the selected rule's detail.
    pub fn show_more(&mut self, kind: ElementKind) {
        self.pagination.show_more(kind);
    }

    pub fn selected_rule_detail(&self) -> Option<RuleDetail> {
        let snapshot = self.snapshot.as_ref()?;
        match &self.selection {
            Some(Selection::Rule(id)) => snapshot
                .rule(*id)
                .map(|rule| RuleDetail::build(snapshot, rule, &self.pagination)),
            _ => None,
        }
    }

    pub fn selected_file_detail(&self) -> Option<FileDetail> {
        let snapshot = self.snapshot.as_ref()?;
        match &self.selection {
            Some(Selection::File(name)) => snapshot
                .files()
                .get(name)
                .map(|file| FileDetail::build(snapshot, file)),
            _ => None,
        }
    }

    pub fn overview(&self) -> Option<Overview> {
        self.snapshot.as_ref().map(Overview::build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::ReportBuilder;

    fn first_report() -> String {
        ReportBuilder::new()
            .file(0, "app/proguard-rules.pro")
            .many_classes(0, 250)
            .rule(0, "-keep class gen.** { *; }")
            .in_file(0)
            .keeps_classes(&(0..250).collect::<Vec<_>>())
            .done()
            .rule(1, "-keep class gen.Unused")
            .in_file(0)
            .done()
            .to_json()
    }

    fn second_report() -> String {
        ReportBuilder::new()
            .file(0, "lib/consumer-rules.pro")
            .classes(&[(0, "Lcom/other/Main;")])
            .rule(7, "-keep class com.other.Main")
            .in_file(0)
            .keeps_classes(&[0])
            .done()
            .to_json()
    }

    #[test]
    fn test_queries_before_load() {
        let mut explorer = Explorer::new();
        assert!(!explorer.is_loaded());
        assert!(explorer.current_rules().is_empty());
        assert!(explorer.overview().is_none());
        assert!(matches!(explorer.select_rule(0), Err(Error::NoSnapshot)));
    }

    #[test]
    fn test_switch_view_clears_search_and_selection() {
        let mut explorer = Explorer::new();
        explorer.load_json(&first_report()).unwrap();
        explorer.search("unused");
        assert_eq!(explorer.current_rules().len(), 1);
        explorer.select_rule(1).unwrap();

        explorer.switch_view(View::Unused);
        assert_eq!(explorer.search_text(), "");
        assert!(explorer.selection().is_none());
        let ids: Vec<_> = explorer.current_rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);

        explorer.switch_view(View::Files);
        assert!(explorer.current_rules().is_empty());
        assert_eq!(explorer.current_files().len(), 1);
    }

    #[test]
    fn test_pagination_resets_on_select() {
        let mut explorer = Explorer::new();
        explorer.load_json(&first_report()).unwrap();
        explorer.select_rule(0).unwrap();

        let visible = |e: &Explorer| {
            e.selected_rule_detail()
                .and_then(|d| d.section(ElementKind::Class).map(|s| s.entries.len()))
        };
        assert_eq!(visible(&explorer), Some(100));
        explorer.show_more(ElementKind::Class);
        assert_eq!(visible(&explorer), Some(200));
        explorer.show_more(ElementKind::Class);
        assert_eq!(visible(&explorer), Some(250));

        explorer.select_rule(0).unwrap();
        assert_eq!(visible(&explorer), Some(100));
    }

    #[test]
    fn test_second_load_replaces_results() {
        let mut explorer = Explorer::new();
        explorer.load_json(&first_report()).unwrap();
        explorer.load_json(&second_report()).unwrap();

        let ids: Vec<_> = explorer.current_rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7]);
        assert!(matches!(explorer.select_rule(0), Err(Error::UnknownRule(0))));
    }

    #[test]
    fn test_failed_load_keeps_previous_snapshot() {
        let mut explorer = Explorer::new();
        explorer.load_json(&first_report()).unwrap();
        explorer.switch_view(View::Unused);

        let err = explorer.load_json("{ not json").unwrap_err();
        assert!(err.is_decode_failure());
        assert_eq!(explorer.view(), View::Unused);
        assert_eq!(explorer.current_rules().len(), 1);
        assert_eq!(explorer.overview().map(|o| o.rules), Some(2));
    }

    #[test]
    fn test_select_file_detail() {
        let mut explorer = Explorer::new();
        explorer.load_json(&first_report()).unwrap();
        assert!(matches!(
            explorer.select_file("nope.pro"),
            Err(Error::UnknownFile(_))
        ));
        explorer.select_file("app/proguard-rules.pro").unwrap();
        let detail = explorer.selected_file_detail().unwrap();
        assert_eq!(detail.total_radius, 250);
        assert!(explorer.selected_rule_detail().is_none());
    }
}
