//! Terminal rendering of session outcomes

use crate::record::Record;
use crate::session::{
    LoadSummary, Outcome, PageView, SearchResults, Session, SessionSummary, StatsReport,
};
use crate::stats::CategoryCount;
use colored::Colorize;
use std::fmt::Write as _;
use std::time::Duration;

/// Timezones shown in the statistics view
const TOP_TIMEZONES: usize = 10;

/// Records previewed under the menu header
const PREVIEW_RECORDS: usize = 3;

/// Menu options
pub const MENU: &str = "\
  1. View current page (detailed)
  2. Next page →
  3. Previous page ←
  4. Jump to page
  5. Change page size
  6. Search for record
  7. Load all records
  8. Show statistics
  9. Export data
  L. Lookup record by id
  Q. Quit";

/// Position line and a short preview of the current page
pub fn render_menu_header(session: &Session) -> String {
    let mut out = format!("{}\n", "═══ Collection Explorer ═══".bold().cyan());

    let Some(page) = session.current_page() else {
        let _ = writeln!(out, "No page loaded yet. Choose 1 to load the first page.");
        return out;
    };

    let offset = session.current_offset();
    let _ = writeln!(
        out,
        "Page {} | Showing {}-{} of {} records",
        session.page_number(),
        offset + u64::from(!page.is_empty()),
        offset + page.item_count() as u64,
        page.total()
            .map_or_else(|| "?".to_string(), |t| t.to_string())
    );
    let _ = writeln!(out, "{}", "─".repeat(50));

    if !page.is_empty() {
        let _ = writeln!(out, "{}", "Current page preview:".yellow());
        for record in page.items().iter().take(PREVIEW_RECORDS) {
            let _ = writeln!(
                out,
                "  • {} ({})",
                record.name().unwrap_or("Unknown"),
                record.email().unwrap_or("No email")
            );
        }
        if page.item_count() > PREVIEW_RECORDS {
            let _ = writeln!(out, "  ... and {} more", page.item_count() - PREVIEW_RECORDS);
        }
    }
    let _ = write!(out, "Page size: {}", session.page_size());
    out
}

/// Render any outcome for the terminal
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Page(view) => render_page(view),
        Outcome::Warning(message) => warning(message),
        Outcome::Search(results) => render_search(results),
        Outcome::Loaded(summary) => render_load(summary),
        Outcome::Stats(report) => render_stats(report),
        Outcome::Exported(summary) => success(&format!(
            "Exported {} records to {}",
            summary.count,
            summary.path.display()
        )),
        Outcome::Record(record) => render_record(1, record),
        Outcome::Goodbye(summary) => render_goodbye(summary),
    }
}

pub(crate) fn success(message: &str) -> String {
    format!("{}", format!("✓ {message}").green())
}

pub(crate) fn warning(message: &str) -> String {
    format!("{}", format!("⚠ {message}").yellow())
}

pub(crate) fn error(message: &str) -> String {
    format!("{}", format!("✗ {message}").red())
}

fn render_page(view: &PageView) -> String {
    let mut out = format!(
        "{}\n\n",
        format!("═══ Page {} - Detailed View ═══", view.page_number)
            .bold()
            .green()
    );

    if view.records.is_empty() {
        out.push_str(&warning("No records on current page"));
        out.push('\n');
    }
    for (index, record) in view.records.iter().enumerate() {
        out.push_str(&render_record(index + 1, record));
        let _ = writeln!(out, "{}", "─".repeat(70));
    }

    let mut nav = String::new();
    if view.has_previous() {
        nav.push_str("[← Previous] ");
    }
    let _ = write!(nav, "Page {}", view.page_number);
    if view.has_more {
        nav.push_str(" [Next →]");
    }
    let _ = write!(out, "\n{}", nav.cyan());

    if let Some(latency) = view.latency {
        let _ = write!(out, "\n{}", format!("  [API call took {} ms]", latency.as_millis()).cyan());
    }
    out
}

fn render_record(index: usize, record: &Record) -> String {
    let mut out = format!(
        "{} (ID: {})\n",
        format!("{index}. {}", record.name().unwrap_or("Unknown")).bold(),
        record.id()
    );
    let _ = writeln!(out, "   Email: {}", record.email().unwrap_or("N/A"));
    let _ = writeln!(
        out,
        "   Role: {} | Type: {}",
        record.role().unwrap_or("N/A"),
        record.kind()
    );
    if let Some(title) = record.job_title() {
        let _ = writeln!(out, "   Job Title: {title}");
    }
    if let Some(tz) = record.timezone() {
        let _ = writeln!(out, "   Time Zone: {tz}");
    }
    if let Some(status) = record.status_label() {
        let _ = writeln!(out, "   Status: {status}");
    }
    if record.has_unknown_fields() {
        let names = record.unknown_field_names().join(", ");
        let _ = writeln!(out, "   {}", format!("Unknown fields: [{names}]").yellow());
    }
    out
}

fn render_search(results: &SearchResults) -> String {
    let mut out = String::new();
    if results.matches.is_empty() {
        let _ = writeln!(out, "No loaded records match '{}'", results.term);
    } else {
        let _ = writeln!(out, "Found {} matching records:", results.matches.len());
        for record in &results.matches {
            let _ = writeln!(
                out,
                "  • {} ({}) - ID: {}",
                record.name().unwrap_or("Unknown"),
                record.email().unwrap_or("No email"),
                record.id()
            );
        }
    }
    if let Some(notice) = &results.notice {
        let _ = write!(out, "\n{}", warning(notice));
    }
    out
}

fn render_load(summary: &LoadSummary) -> String {
    let message = format!(
        "Loaded {} records in {} pages",
        summary.records, summary.pages
    );
    if summary.cancelled {
        warning(&format!("{message} (cancelled, corpus is incomplete)"))
    } else {
        success(&message)
    }
}

fn render_stats(report: &StatsReport) -> String {
    let snapshot = &report.snapshot;
    let mut out = format!("{}\n", "═══ Statistics ═══".bold().cyan());

    let _ = writeln!(out, "\nAPI Calls: {}", snapshot.total_calls);
    if let Some(avg) = snapshot.average_latency {
        let _ = writeln!(out, "Average Response Time: {}", millis(avg));
    }
    let _ = writeln!(out, "\nTotal Records Loaded: {}", report.records_loaded);

    if !snapshot.by_timezone.is_empty() {
        let _ = writeln!(out, "\n{}", "Records by Time Zone:".yellow());
        push_counts(&mut out, &snapshot.by_timezone, TOP_TIMEZONES, 30);
    }
    if !snapshot.by_role.is_empty() {
        let _ = writeln!(out, "\n{}", "Records by Role:".yellow());
        push_counts(&mut out, &snapshot.by_role, usize::MAX, 20);
    }
    out
}

fn push_counts(out: &mut String, counts: &[CategoryCount], limit: usize, width: usize) {
    for entry in counts.iter().take(limit) {
        let _ = writeln!(out, "  {:<width$}: {}", entry.value, entry.count);
    }
}

fn render_goodbye(summary: &SessionSummary) -> String {
    let mut out = format!(
        "{}\n\n",
        "Thank you for using the explorer!".bold().blue()
    );
    let _ = writeln!(out, "Statistics for this session:");
    let _ = writeln!(out, "  • API calls made: {}", summary.total_calls);
    let _ = writeln!(out, "  • Records examined: {}", summary.records_loaded);
    if let Some(avg) = summary.average_latency {
        let _ = writeln!(out, "  • Avg response time: {}", millis(avg));
    }
    out.push_str("\nGoodbye!");
    out
}

fn millis(duration: Duration) -> String {
    format!("{} ms", duration.as_millis())
}
