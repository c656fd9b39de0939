//! Writers for query results.
//!
//! Every command produces a value from the query layer and hands it to one
//! of these writers; nothing here inspects a snapshot directly.

pub mod json;
pub mod terminal;

pub use json::{output_json, to_json};
pub use terminal::{
    format_file_detail, format_file_list, format_overview, format_rule_detail, format_rule_list,
    format_summary_table,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable, colored when the terminal supports it
    #[default]
    Terminal,
    /// Pretty printed JSON
    Json,
}

/// Write `content` to `output_file`, creating parent directories, or to
/// stdout when no file is given.
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("nested").join("out.txt");

        write_output("hello", Some(&nested_path)).unwrap();
        assert_eq!(fs::read_to_string(&nested_path).unwrap(), "hello");
    }
}
