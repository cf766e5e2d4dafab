//! Human-readable table output

use comfy_table::{ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL};
use std::collections::BTreeMap;

use crate::core::types::{
    AppUsageRow, DailyPoint, HourlyPoint, ProductivityReport, SessionDetail, Summary, TopAppRow,
    WindowTitleReport,
};
use crate::output::format::{header_cell, right_cell};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub(crate) fn print_summary(summary: &Summary, use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![header_cell("Metric", use_color), header_cell("Value", use_color)]);
    table.add_row(vec!["Sessions".to_string(), summary.total_sessions.to_string()]);
    table.add_row(vec!["Total time (h)".to_string(), summary.total_time_hours.to_string()]);
    table.add_row(vec![
        "Avg session (min)".to_string(),
        summary.average_session_minutes.to_string(),
    ]);
    table.add_row(vec!["Unique apps".to_string(), summary.unique_apps.to_string()]);
    let range = match &summary.date_range {
        Some(r) => format!("{} .. {}", r.start, r.end),
        None => "-".to_string(),
    };
    table.add_row(vec!["Date range".to_string(), range]);
    println!("{table}");
}

pub(crate) fn print_app_usage(rows: &[AppUsageRow], use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("App", use_color),
        header_cell("Sessions", use_color),
        header_cell("Hours", use_color),
        header_cell("Avg min", use_color),
    ]);
    for row in rows {
        table.add_row(vec![
            comfy_table::Cell::new(&row.app_name),
            right_cell(row.sessions),
            right_cell(row.total_time_hours),
            right_cell(row.average_session_minutes),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_top_apps(rows: &[TopAppRow], use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("App", use_color),
        header_cell("Minutes", use_color),
        header_cell("Share", use_color),
    ]);
    for row in rows {
        table.add_row(vec![
            comfy_table::Cell::new(&row.name),
            right_cell(row.time),
            right_cell(format!("{}%", row.percentage)),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_daily(points: &[DailyPoint], use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![header_cell("Date", use_color), header_cell("Hours", use_color)]);
    for point in points {
        table.add_row(vec![
            comfy_table::Cell::new(&point.date),
            right_cell(point.total_hours),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_hourly(points: &[HourlyPoint], use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![header_cell("Hour", use_color), header_cell("Minutes", use_color)]);
    for point in points {
        table.add_row(vec![
            right_cell(format!("{:02}:00", point.hour)),
            right_cell(point.total_minutes),
        ]);
    }
    println!("{table}");
}

pub(crate) fn print_productivity(report: &ProductivityReport, use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Category", use_color),
        header_cell("Hours", use_color),
        header_cell("Share", use_color),
    ]);
    for usage in &report.breakdown {
        table.add_row(vec![
            comfy_table::Cell::new(&usage.category),
            right_cell(usage.hours),
            right_cell(format!("{}%", usage.percentage)),
        ]);
    }
    println!("{table}");
    println!(
        "  Total: {}h | Productivity score: {}",
        report.total_time_hours, report.productivity_score
    );
}

pub(crate) fn print_window_titles(report: &WindowTitleReport, use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Title", use_color),
        header_cell("Last seen", use_color),
        header_cell("Seconds", use_color),
    ]);
    for entry in &report.window_titles {
        table.add_row(vec![
            comfy_table::Cell::new(&entry.window_title),
            comfy_table::Cell::new(&entry.last_seen),
            right_cell(entry.duration_seconds),
        ]);
    }
    println!("{table}");
    println!(
        "  {} unique titles for {}",
        report.total_unique_titles, report.app_name
    );
}

pub(crate) fn print_merged(merged: &BTreeMap<String, Vec<String>>, use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![header_cell("App", use_color), header_cell("Blocks", use_color)]);
    for (app, blocks) in merged {
        table.add_row(vec![app.clone(), blocks.join("\n")]);
    }
    println!("{table}");
}

pub(crate) fn print_sessions(rows: &[SessionDetail], use_color: bool) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Start", use_color),
        header_cell("End", use_color),
        header_cell("App", use_color),
        header_cell("Title", use_color),
        header_cell("Min", use_color),
        header_cell("End reason", use_color),
    ]);
    for row in rows {
        table.add_row(vec![
            comfy_table::Cell::new(&row.date),
            comfy_table::Cell::new(&row.start_time),
            comfy_table::Cell::new(&row.end_time),
            comfy_table::Cell::new(&row.app_name),
            comfy_table::Cell::new(&row.window_title),
            right_cell(row.duration_minutes),
            comfy_table::Cell::new(&row.end_reason),
        ]);
    }
    println!("{table}");
}
