use crate::formatting::ColorMode;
use crate::output::OutputFormat;
use crate::query::View;
use crate::report::EntityId;
use crate::summary::SummarySortKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blastmap")]
#[command(about = "Keep rule blast radius explorer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Plain output (no colors), same as `--color never`
    #[arg(long, global = true)]
    pub plain: bool,

    /// When to color terminal output (defaults to the environment)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Headline counts for one report
    Overview {
        /// Blast radius report (JSON)
        report: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List keep rules or rule files ranked by blast radius
    Rules {
        /// Blast radius report (JSON)
        report: PathBuf,

        /// Which list to show
        #[arg(long, value_enum, default_value = "rules")]
        view: View,

        /// Case-insensitive substring filter on rule source or filename
        #[arg(long, default_value = "")]
        filter: String,

        /// Show only the top N entries
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show everything a single keep rule retains
    Show {
        /// Blast radius report (JSON)
        report: PathBuf,

        /// Id of the keep rule
        #[arg(long)]
        rule: EntityId,

        /// Reveal N more pages of classes
        #[arg(long, default_value = "0")]
        more_classes: usize,

        /// Reveal N more pages of methods
        #[arg(long, default_value = "0")]
        more_methods: usize,

        /// Reveal N more pages of fields
        #[arg(long, default_value = "0")]
        more_fields: usize,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the keep rules declared in one configuration file
    File {
        /// Blast radius report (JSON)
        report: PathBuf,

        /// Origin filename as recorded in the report
        filename: String,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize every report found below a directory
    Summary {
        /// Directory to search for reports
        dir: PathBuf,

        /// Column to sort by (largest first)
        #[arg(long, value_enum, default_value = "items")]
        sort: SummarySortKey,

        /// Sort smallest first
        #[arg(long)]
        ascending: bool,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
