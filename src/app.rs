//! Command handlers: wire the analyzer into table or JSON output
//!
//! JSON mode always emits a well-formed payload, even for an empty or
//! missing source; only invalid user input errors out.

use crate::analyzer::Analyzer;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::AppError;
use crate::output::{json, table};
use crate::utils::Timezone;

pub(crate) fn run(cli: &Cli, config: &Config, timezone: Timezone) -> Result<(), AppError> {
    let data_file = config.data_file_path(cli.data_file.as_deref());
    let mut analyzer = Analyzer::new(data_file, config.categories.clone(), timezone);
    let limit = config.clamp_limit(cli.limit);
    let use_color = cli.use_color();

    match cli.command.as_ref().unwrap_or(&Commands::Summary) {
        Commands::Summary => {
            let summary = analyzer.get_summary(cli.days);
            if cli.json {
                json::print(&summary);
            } else {
                table::print_summary(&summary, use_color);
            }
        }
        Commands::Apps => {
            let rows = analyzer.get_app_usage(cli.days, Some(limit));
            if cli.json {
                json::print(&rows);
            } else if rows.is_empty() {
                println!("No activity data found.");
            } else {
                table::print_app_usage(&rows, use_color);
            }
        }
        Commands::Top => {
            let rows = analyzer.get_top_apps(cli.days, Some(limit));
            if cli.json {
                json::print(&rows);
            } else if rows.is_empty() {
                println!("No activity data found.");
            } else {
                table::print_top_apps(&rows, use_color);
            }
        }
        Commands::Daily => {
            let days = cli.days.unwrap_or(config.daily_days);
            let points = analyzer.get_daily_usage(days);
            if cli.json {
                json::print(&points);
            } else {
                table::print_daily(&points, use_color);
            }
        }
        Commands::Hourly => {
            let days = cli.days.unwrap_or(config.hourly_days);
            let points = analyzer.get_hourly_usage(days);
            if cli.json {
                json::print(&points);
            } else {
                table::print_hourly(&points, use_color);
            }
        }
        Commands::Productivity => {
            let days = cli.days.unwrap_or(config.productivity_days);
            let report = analyzer.get_productivity(days);
            if cli.json {
                json::print(&report);
            } else {
                table::print_productivity(&report, use_color);
            }
        }
        Commands::Titles { app } => {
            let report = analyzer.get_window_titles(app, cli.days, limit);
            if cli.json {
                json::print(&report);
            } else if report.window_titles.is_empty() {
                println!("No window titles found for {app}.");
            } else {
                table::print_window_titles(&report, use_color);
            }
        }
        Commands::Merged { date } => {
            let merged = analyzer.get_merged_sessions(cli.days, date.as_deref())?;
            if cli.json {
                json::print(&merged);
            } else if merged.is_empty() {
                println!("No activity data found.");
            } else {
                table::print_merged(&merged, use_color);
            }
        }
        Commands::Sessions => {
            let rows = analyzer.get_detailed_sessions(cli.days, limit);
            if cli.json {
                json::print(&rows);
            } else if rows.is_empty() {
                println!("No activity data found.");
            } else {
                table::print_sessions(&rows, use_color);
            }
        }
    }
    Ok(())
}
