//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Overall summary statistics (default)
    Summary,
    /// Per-app usage totals
    Apps,
    /// Daily usage histogram, zero-filled over the window
    Daily,
    /// Hour-of-day usage histogram (all 24 slots)
    Hourly,
    /// Productivity category breakdown and score
    Productivity,
    /// Top applications by share of total time
    Top,
    /// Distinct window titles for one application
    Titles {
        /// Application name (case-insensitive exact match)
        app: String,
    },
    /// Continuous usage blocks per app, merged from overlapping sessions
    Merged {
        /// Exact calendar day (YYYY-MM-DD); --days takes precedence
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
    /// Raw sessions with timing details, newest first
    Sessions,
}
