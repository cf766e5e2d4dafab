//! CLI argument definitions
//!
//! Global options and config-file merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "focustats")]
#[command(about = "Foreground app usage statistics from activity tracker logs", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Restrict to sessions started within the last N days
    #[arg(short, long, global = true, value_name = "N")]
    pub(crate) days: Option<i64>,

    /// Maximum number of result rows (clamped to the configured maximum)
    #[arg(short, long, global = true, value_name = "N")]
    pub(crate) limit: Option<usize>,

    /// Output as JSON
    #[arg(short = 'j', long, global = true)]
    pub(crate) json: bool,

    /// Activity log file (overrides FOCUSTATS_DATA_FILE and the config file)
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) data_file: Option<PathBuf>,

    /// Timezone for "today" and relative windows (e.g. "UTC", "Europe/Kyiv")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Enable debug output (show load and skip details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
