#![allow(dead_code)]

use blastmap::report::{BuildInfo, KeepConstraint, KeepRuleTag};
use blastmap::testkit::ReportBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small app report with two rule files.
///
/// - rule 0 keeps `Main`, its `main` method and the `TAG` field
/// - rule 1 keeps `Main` and `Util` from the same file, subsumed by rule 0
/// - rule 2 lives in the library consumer file and keeps nothing
/// - rule 3 keeps `Util` with `allowobfuscation` style constraints
pub fn sample_report() -> ReportBuilder {
    ReportBuilder::new()
        .file(0, "app/proguard-rules.pro")
        .maven_file(1, "META-INF/proguard/okio.pro", ("com.squareup.okio", "okio", "3.9.0"))
        .classes(&[(0, "Lcom/example/Main;"), (1, "Lcom/example/Util;")])
        .method(0, "Lcom/example/Main;", "main", &["[Ljava/lang/String;"], "V")
        .field(0, "Lcom/example/Main;", "TAG", "Ljava/lang/String;")
        .constraints(0, &[])
        .constraints(1, &[KeepConstraint::DontObfuscate, KeepConstraint::DontOptimize])
        .build_info(BuildInfo {
            class_count: 10,
            method_count: 40,
            field_count: 12,
            ..BuildInfo::default()
        })
        .rule(0, "-keep class com.example.Main { *; }")
        .in_file(0)
        .at(3, 1)
        .keeps_classes(&[0])
        .keeps_methods(&[0])
        .keeps_fields(&[0])
        .done()
        .rule(1, "-keep class com.example.** { <init>(); }")
        .in_file(0)
        .at(7, 1)
        .tagged(KeepRuleTag::PackageWide)
        .keeps_classes(&[0, 1])
        .subsumed_by(&[0])
        .done()
        .rule(2, "-keep class okio.Unused")
        .in_file(1)
        .at(1, 1)
        .done()
        .rule(3, "-keep,allowshrinking class com.example.Util")
        .in_file(1)
        .with_constraints(1)
        .keeps_classes(&[1])
        .done()
}

pub fn sample_json() -> String {
    sample_report().to_json()
}

/// Write `json` to `dir/relative`, creating parent directories.
pub fn write_report(dir: &Path, relative: &str, json: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, json).unwrap();
    path
}

/// A temp directory holding the sample report as `blastradius.json`.
pub fn sample_report_dir() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = write_report(temp.path(), "blastradius.json", &sample_json());
    (temp, path)
}

/// A report with `count` classes all kept by rule 0.
pub fn wide_report(count: u32) -> String {
    let ids: Vec<u32> = (0..count).collect();
    ReportBuilder::new()
        .file(0, "wide.pro")
        .many_classes(0, count)
        .rule(0, "-keep class gen.** { *; }")
        .in_file(0)
        .keeps_classes(&ids)
        .done()
        .to_json()
}
