//! `.blastmap.toml` configuration.
//!
//! The file is looked up from the current directory upwards; every section
//! and key is optional.

mod core;
mod display;
mod loader;

pub use self::core::{BlastmapConfig, OutputConfig, SummaryConfig};
pub use display::DisplayConfig;
pub use loader::{directory_ancestors, load_config, load_config_from, parse_and_validate_config};

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".blastmap.toml";

/// Contents written by `blastmap init`.
pub const DEFAULT_CONFIG: &str = r#"# Blastmap Configuration

[display]
# Kept items revealed per page in a rule's detail
page_size = 100
# Rules listed per report in summaries
top_rules = 10

[output]
default_format = "terminal"

[summary]
# Substring a report file name must contain
report_marker = "blastradius"
"#;
