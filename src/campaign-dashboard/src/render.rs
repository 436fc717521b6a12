//! Plain-text and JSON rendering of a dashboard view.

use campaign_reporting::format::{format_count, format_currency};
use campaign_reporting::{DashboardView, ViewListener};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::warn;

const HEADERS: [&str; 5] = ["Campaign Name", "Status", "Clicks", "Cost", "Impressions"];

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub currency: &'a str,
    #[serde(flatten)]
    pub view: &'a DashboardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<'a> Report<'a> {
    pub fn new(view: &'a DashboardView, currency: &'a str) -> Self {
        Self {
            generated_at: Utc::now(),
            currency,
            view,
            empty_message: view.empty_message(),
        }
    }
}

pub fn render_json(view: &DashboardView, currency: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(view, currency))
}

pub fn render_text(view: &DashboardView, currency: &str) -> String {
    let mut out = String::new();
    out.push_str("Marketing Campaigns\n");
    out.push_str(&format!(
        "Filter: {}   Search: {:?}\n\n",
        view.criteria.status, view.criteria.query
    ));

    out.push_str(&format!(
        "Campaigns: {}   Total Clicks: {}   Total Cost: {}\n\n",
        view.campaign_count,
        format_count(view.totals.clicks),
        format_currency(view.totals.cost, currency),
    ));

    let mut rows: Vec<[String; 5]> = view
        .campaigns
        .iter()
        .map(|c| {
            [
                c.name.clone(),
                c.status.to_string(),
                format_count(c.clicks),
                format_currency(c.cost, currency),
                format_count(c.impressions),
            ]
        })
        .collect();
    let footer = [
        "Total".to_string(),
        String::new(),
        format_count(view.totals.clicks),
        format_currency(view.totals.cost, currency),
        format_count(view.totals.impressions),
    ];

    let mut widths = HEADERS.map(str::len);
    for row in rows.iter().chain(std::iter::once(&footer)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    out.push_str(&format_row(&header, &widths));
    out.push_str(&format!("{}\n", "-".repeat(widths.iter().sum::<usize>() + 2 * 4)));

    match view.empty_message() {
        Some(message) => out.push_str(&format!("{message}\n")),
        None => {
            for row in rows.drain(..) {
                out.push_str(&format_row(&row, &widths));
            }
        }
    }

    out.push_str(&format!("{}\n", "-".repeat(widths.iter().sum::<usize>() + 2 * 4)));
    out.push_str(&format_row(&footer, &widths));
    out
}

/// Text columns are left aligned, numeric columns right aligned.
fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = width.saturating_sub(cell.chars().count());
        if i < 2 {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        } else {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

/// Redraws the dashboard on stdout after every criteria change.
pub struct StdoutRenderer {
    pub currency: String,
    pub json: bool,
}

impl StdoutRenderer {
    pub fn render(&self, view: &DashboardView) -> String {
        if self.json {
            match render_json(view, &self.currency) {
                Ok(json) => json + "\n",
                Err(e) => {
                    warn!(error = %e, "Failed to serialize dashboard view");
                    String::new()
                }
            }
        } else {
            render_text(view, &self.currency)
        }
    }
}

impl ViewListener for StdoutRenderer {
    fn on_change(&self, view: &DashboardView) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", self.render(view)) {
            warn!(error = %e, "Failed to write dashboard to stdout");
        }
    }
}
