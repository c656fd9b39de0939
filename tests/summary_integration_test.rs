mod common;

use blastmap::formatting::FormattingConfig;
use blastmap::output::format_summary_table;
use blastmap::summary::{discover_reports, summarize_directory, SummarySortKey};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn populated_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    common::write_report(temp.path(), "app/build/outputs/blastradius.json", &common::sample_json());
    common::write_report(temp.path(), "feature/blastradius.json", &common::wide_report(6));
    common::write_report(temp.path(), "feature/mapping.json", &common::wide_report(100));
    common::write_report(temp.path(), "r8-blastradius.json", &common::wide_report(2));
    temp
}

#[test]
fn test_discovery_names_reports_by_directory() {
    let temp = populated_dir();
    let found = discover_reports(temp.path(), "blastradius");
    let labels: Vec<(&str, &str)> = found
        .iter()
        .map(|l| (l.name.as_str(), l.link.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("app/build/outputs", "app/build/outputs/blastradius.json"),
            ("feature", "feature/blastradius.json"),
            ("r8-blastradius", "r8-blastradius.json"),
        ]
    );
}

#[test]
fn test_custom_marker_selects_other_reports() {
    let temp = populated_dir();
    let table = summarize_directory(temp.path(), "mapping", 10);
    assert_eq!(table.len(), 1);
    assert_eq!(table.summaries()[0].total_kept(), 100);
}

#[test]
fn test_table_sorting_toggles() {
    let temp = populated_dir();
    let mut table = summarize_directory(temp.path(), "blastradius", 10);
    let names = |table: &blastmap::SummaryTable| -> Vec<String> {
        table.summaries().iter().map(|s| s.name.clone()).collect()
    };

    assert_eq!(names(&table), vec!["feature", "app/build/outputs", "r8-blastradius"]);

    table.sort_by(SummarySortKey::Items);
    assert!(!table.is_descending());
    assert_eq!(names(&table), vec!["r8-blastradius", "app/build/outputs", "feature"]);

    table.sort_by(SummarySortKey::Methods);
    assert!(table.is_descending());
    assert_eq!(names(&table)[0], "app/build/outputs");
}

#[test]
fn test_summary_terminal_rendering() {
    let temp = populated_dir();
    let table = summarize_directory(temp.path(), "blastradius", 2);
    let text = format_summary_table(&table, FormattingConfig::plain());

    assert!(text.contains("Blast Radius Summary (3 reports, by Kept Items desc)"));
    assert!(text.contains("Rules: 4 (1 package-wide)   Items: 4 / 62"));
    assert!(text.contains("1 OBF"));
    assert!(!text.contains("-keep class okio.Unused"));

    let app = table
        .summaries()
        .iter()
        .find(|s| s.name == "app/build/outputs")
        .unwrap();
    assert_eq!(app.top_rules.len(), 2);
    assert_eq!(app.top_rules[0].item_count, 3);
}
