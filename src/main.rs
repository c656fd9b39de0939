use anyhow::Result;
use blastmap::cli::{Cli, Commands};
use blastmap::commands::{
    self, CommandContext, FileConfig, OverviewConfig, RulesConfig, ShowConfig, SummaryCommandConfig,
};
use blastmap::config::load_config;
use blastmap::formatting::{ColorMode, FormattingConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    if let Commands::Init { force } = cli.command {
        return commands::init_config(force);
    }

    let ctx = CommandContext::new(load_config(), create_formatting_config(cli.plain, cli.color));
    match cli.command {
        Commands::Overview {
            report,
            format,
            output,
        } => commands::handle_overview(
            OverviewConfig {
                report,
                format,
                output,
            },
            &ctx,
        ),
        Commands::Rules {
            report,
            view,
            filter,
            top,
            format,
            output,
        } => commands::handle_rules(
            RulesConfig {
                report,
                view,
                filter,
                top,
                format,
                output,
            },
            &ctx,
        ),
        Commands::Show {
            report,
            rule,
            more_classes,
            more_methods,
            more_fields,
            format,
            output,
        } => commands::handle_show(
            ShowConfig {
                report,
                rule,
                more_classes,
                more_methods,
                more_fields,
                format,
                output,
            },
            &ctx,
        ),
        Commands::File {
            report,
            filename,
            format,
            output,
        } => commands::handle_file(
            FileConfig {
                report,
                filename,
                format,
                output,
            },
            &ctx,
        ),
        Commands::Summary {
            dir,
            sort,
            ascending,
            format,
            output,
        } => commands::handle_summary(
            SummaryCommandConfig {
                dir,
                sort,
                ascending,
                format,
                output,
            },
            &ctx,
        ),
        Commands::Init { .. } => Ok(()),
    }
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from warn.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `--plain` wins over `--color`, which wins over the environment.
fn create_formatting_config(plain: bool, color: Option<ColorMode>) -> FormattingConfig {
    match (plain, color) {
        (true, _) => FormattingConfig::plain(),
        (false, Some(color)) => FormattingConfig::new(color),
        (false, None) => FormattingConfig::from_env(),
    }
}
