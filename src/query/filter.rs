//! Filter and sort operations over a snapshot.
//!
//! Every filter matches case-insensitively on a substring; the empty query
//! matches everything. Sorts are stable, so equal keys keep report order.

use crate::index::{FileAggregate, Snapshot};
use crate::report::KeepRuleBlastRadius;
use std::cmp::Reverse;

/// Case-insensitive substring test used by every filter.
pub fn matches_query(text: &str, lower_query: &str) -> bool {
    lower_query.is_empty() || text.to_lowercase().contains(lower_query)
}

fn rules_matching<'a>(
    snapshot: &'a Snapshot,
    query: &str,
    predicate: impl Fn(&KeepRuleBlastRadius) -> bool,
) -> Vec<&'a KeepRuleBlastRadius> {
    let lower_query = query.to_lowercase();
    snapshot
        .rules()
        .iter()
        .filter(|rule| predicate(rule) && matches_query(&rule.source, &lower_query))
        .collect()
}

fn sort_by_radius_desc(snapshot: &Snapshot, rules: &mut [&KeepRuleBlastRadius]) {
    rules.sort_by_key(|rule| Reverse(snapshot.total_radius(rule.id)));
}

/// All rules whose source matches, largest blast radius first.
pub fn filter_rules<'a>(snapshot: &'a Snapshot, query: &str) -> Vec<&'a KeepRuleBlastRadius> {
    let mut rules = rules_matching(snapshot, query, |_| true);
    sort_by_radius_desc(snapshot, &mut rules);
    rules
}

/// Rules keeping nothing, ordered by source text.
pub fn filter_unused_rules<'a>(snapshot: &'a Snapshot, query: &str) -> Vec<&'a KeepRuleBlastRadius> {
    let mut rules = rules_matching(snapshot, query, |rule| snapshot.rules().is_unused(rule.id));
    rules.sort_by(|a, b| a.source.cmp(&b.source));
    rules
}

/// Rules subsumed by at least one other rule, largest blast radius first.
pub fn filter_redundant_rules<'a>(
    snapshot: &'a Snapshot,
    query: &str,
) -> Vec<&'a KeepRuleBlastRadius> {
    let mut rules = rules_matching(snapshot, query, KeepRuleBlastRadius::is_redundant);
    sort_by_radius_desc(snapshot, &mut rules);
    rules
}

/// Origin files whose name matches, largest deduplicated radius first.
pub fn filter_files<'a>(snapshot: &'a Snapshot, query: &str) -> Vec<&'a FileAggregate> {
    let lower_query = query.to_lowercase();
    let mut files: Vec<_> = snapshot
        .files()
        .iter()
        .filter(|file| matches_query(&file.name, &lower_query))
        .collect();
    files.sort_by_key(|file| Reverse(file.total_radius()));
    files
}

/// Whether some subsumer of `rule` was declared in the same file as `rule`.
///
/// Only drives a warning in the detail view; counts never depend on it.
pub fn is_same_origin_subsumption(snapshot: &Snapshot, rule: &KeepRuleBlastRadius) -> bool {
    let own_file = snapshot.rule_file_name(rule);
    rule.blast_radius
        .subsumed_by
        .iter()
        .filter_map(|&id| snapshot.rule(id))
        .any(|subsumer| snapshot.rule_file_name(subsumer) == own_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::ReportBuilder;

    fn snapshot() -> Snapshot {
        let report = ReportBuilder::new()
            .file(0, "app/proguard-rules.pro")
            .file(1, "lib/consumer-rules.pro")
            .many_classes(0, 10)
            .rule(0, "-keep class com.Beta")
            .in_file(0)
            .keeps_classes(&[0, 1])
            .done()
            .rule(1, "-keep class com.zeta.Unused")
            .in_file(1)
            .done()
            .rule(2, "-KEEP class com.Alpha")
            .in_file(1)
            .keeps_classes(&[2, 3, 4])
            .done()
            .rule(3, "-keep class com.alpha.Unused")
            .in_file(0)
            .done()
            .rule(4, "-keep class com.Gamma")
            .in_file(0)
            .keeps_classes(&[0, 5])
            .subsumed_by(&[0])
            .done()
            .rule(5, "-keep class com.Delta")
            .in_file(1)
            .keeps_classes(&[2])
            .subsumed_by(&[2, 0])
            .done()
            .build();
        Snapshot::build(report)
    }

    fn ids(rules: &[&KeepRuleBlastRadius]) -> Vec<u32> {
        rules.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_returns_all_by_radius_with_stable_ties() {
        let snapshot = snapshot();
        let rules = filter_rules(&snapshot, "");
        assert_eq!(ids(&rules), vec![2, 0, 4, 5, 1, 3]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let snapshot = snapshot();
        assert_eq!(ids(&filter_rules(&snapshot, "ALPHA")), vec![2, 3]);
        assert_eq!(ids(&filter_rules(&snapshot, "-keep")).len(), 6);
    }

    #[test]
    fn test_unused_sorted_by_source() {
        let snapshot = snapshot();
        assert_eq!(ids(&filter_unused_rules(&snapshot, "")), vec![3, 1]);
        assert_eq!(ids(&filter_unused_rules(&snapshot, "zeta")), vec![1]);
        assert!(filter_unused_rules(&snapshot, "Beta").is_empty());
    }

    #[test]
    fn test_redundant_sorted_by_radius() {
        let snapshot = snapshot();
        assert_eq!(ids(&filter_redundant_rules(&snapshot, "")), vec![4, 5]);
        assert_eq!(ids(&filter_redundant_rules(&snapshot, "delta")), vec![5]);
    }

    #[test]
    fn test_files_sorted_by_deduplicated_radius() {
        let snapshot = snapshot();
        let files = filter_files(&snapshot, "");
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        // app: {0, 1, 5} = 3, lib: {2, 3, 4} = 3; tie keeps first appearance
        assert_eq!(names, vec!["app/proguard-rules.pro", "lib/consumer-rules.pro"]);
        assert_eq!(filter_files(&snapshot, "CONSUMER").len(), 1);
        assert!(filter_files(&snapshot, "missing").is_empty());
    }

    #[test]
    fn test_same_origin_subsumption() {
        let snapshot = snapshot();
        // rule 4 (app) subsumed by rule 0 (app)
        assert!(is_same_origin_subsumption(&snapshot, snapshot.rule(4).unwrap()));
        // rule 5 (lib) subsumed by rule 2 (lib) and rule 0 (app)
        assert!(is_same_origin_subsumption(&snapshot, snapshot.rule(5).unwrap()));
        assert!(!is_same_origin_subsumption(&snapshot, snapshot.rule(0).unwrap()));
    }

    #[test]
    fn test_cross_file_subsumption_is_not_same_origin() {
        let report = ReportBuilder::new()
            .file(0, "a.pro")
            .file(1, "b.pro")
            .rule(0, "-keep class A")
            .in_file(0)
            .done()
            .rule(1, "-keep class A")
            .in_file(1)
            .subsumed_by(&[0, 77])
            .done()
            .build();
        let snapshot = Snapshot::build(report);
        assert!(!is_same_origin_subsumption(&snapshot, snapshot.rule(1).unwrap()));
    }
}
