//! Color handling for terminal output.

use colored::*;
use std::env;
use std::io::IsTerminal;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout_supports_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Color mode implied by `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
    ///
    /// `CLICOLOR_FORCE=1` beats both opt-outs.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let color = if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            ColorMode::Always
        } else if var("NO_COLOR").is_some() || var("CLICOLOR").as_deref() == Some("0") {
            ColorMode::Never
        } else {
            ColorMode::Auto
        };
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }
}

/// Styles used by the terminal writers.
pub trait OutputFormatter {
    fn warning(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

fn stdout_supports_color() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}
