//! Text rendering of dashboard reports.

use chrono::NaiveDate;
use colored::Colorize;

use charter_config::Config;
use charter_core::{DashboardOverview, DayBucket, MonthBucket, RevenueByCharterType, TripRow};
use charter_domain::{NamedEntity, Revenue, TripStatus};

use crate::cli::table::{Table, TableColumn};

const BAR_GLYPH: &str = "█";

/// Renders report sections with the configured currency and color preference.
pub struct ReportRenderer<'a> {
    config: &'a Config,
    color: bool,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(config: &'a Config, color: bool) -> Self {
        Self { config, color }
    }

    fn header(&self, title: &str) -> String {
        let text = format!("=== {title} ===");
        if self.color {
            text.bold().to_string()
        } else {
            text
        }
    }

    fn status_label(&self, status: TripStatus) -> String {
        if !self.color {
            return status.to_string();
        }
        match status {
            TripStatus::Upcoming => status.label().bright_cyan().to_string(),
            TripStatus::Ongoing => status.label().bright_yellow().to_string(),
            TripStatus::Completed => status.label().bright_green().to_string(),
        }
    }

    pub fn money(&self, amount: Revenue) -> String {
        format_amount(amount, self.config.currency_symbol())
    }

    pub fn overview(&self, overview: &DashboardOverview, today: NaiveDate) -> String {
        [
            self.header(&format!("Dashboard Overview ({today})")),
            format!("Bookings:  {} total", overview.total_bookings),
            format!("Upcoming:  {}", overview.upcoming),
            format!("Ongoing:   {}", overview.ongoing),
            format!("Completed: {}", overview.completed),
            format!("Revenue:   {}", self.money(overview.total_revenue)),
        ]
        .join("\n")
    }

    pub fn trips(&self, rows: &[TripRow<'_>]) -> String {
        if rows.is_empty() {
            return format!(
                "{}\nNo trips match the current filters.",
                self.header("Trips Overview")
            );
        }
        let mut table = Table::new(vec![
            TableColumn::right("ID"),
            TableColumn::left("Name"),
            TableColumn::left("Charter Type"),
            TableColumn::right("Revenue"),
            TableColumn::left("Date"),
            TableColumn::left("Status"),
        ]);
        for row in rows {
            table.push_row(vec![
                row.trip.id.to_string(),
                row.trip.name().to_string(),
                row.trip.charter_type.to_string(),
                self.money(row.trip.revenue),
                row.trip.date.to_string(),
                self.status_label(row.status),
            ]);
        }
        format!(
            "{}\n{}\n{} trip(s)",
            self.header("Trips Overview"),
            table.render(),
            rows.len()
        )
    }

    pub fn weekly(&self, buckets: &[DayBucket]) -> String {
        let mut lines = vec![self.header("Weekly Bookings")];
        lines.extend(buckets.iter().map(|bucket| {
            bar_line(
                &format!("{} {}", bucket.label, bucket.date),
                bucket.count,
                &bucket.count.to_string(),
            )
        }));
        lines.join("\n")
    }

    pub fn monthly(&self, buckets: &[MonthBucket]) -> String {
        let mut lines = vec![self.header("Monthly Bookings")];
        if buckets.is_empty() {
            lines.push("No bookings in the configured months.".to_string());
        }
        lines.extend(
            buckets
                .iter()
                .map(|bucket| bar_line(&bucket.label, bucket.count, &bucket.count.to_string())),
        );
        lines.join("\n")
    }

    pub fn revenue(&self, revenue: &RevenueByCharterType) -> String {
        let mut table = Table::new(vec![
            TableColumn::left("Charter Type"),
            TableColumn::right("Revenue"),
        ]);
        for entry in revenue.entries() {
            table.push_row(vec![entry.charter_type.to_string(), self.money(entry.revenue)]);
        }
        table.push_row(vec!["Total".to_string(), self.money(revenue.total())]);
        format!("{}\n{}", self.header("Revenue per Charter Type"), table.render())
    }
}

fn bar_line(label: &str, count: usize, value: &str) -> String {
    let bar = BAR_GLYPH.repeat(count);
    if bar.is_empty() {
        format!("{label:<14} | {value}")
    } else {
        format!("{label:<14} | {bar} {value}")
    }
}

/// Formats an amount with thousands separators, e.g. `$28,080.00`.
pub fn format_amount(amount: Revenue, symbol: &str) -> String {
    let whole = amount.whole_units().to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{symbol}{grouped}.{:02}", amount.cents() % 100)
}
