#![forbid(unsafe_code)]

//! # Admin Demo
//!
//! Demonstration of the `tabview` engine against the kind of list screens an
//! admin dashboard repeats: organizations bucketed by subscription status and
//! referral payouts bucketed by payout status.
//!
//! The binary generates a seeded dataset, partitions it into status buckets,
//! instantiates one independently-paged `TableView` per bucket, applies the
//! requested search (committed through the real debouncer, with injected
//! time) and page jump, and prints each bucket's snapshot as a table or JSON.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p admin_demo -- --dataset payouts --search ward --page 2
//! ```

mod cli;
mod data;

use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use tabview::bucket::{OrgStatus, PayoutStatus, classify_org, classify_payout, partition};
use tabview::debounce::DEFAULT_INTERVAL;
use tabview::page_window::PageItem;
use tabview::table_view::TableView;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Dataset};
use data::{Generator, Organization, Payout, org_accessors, payout_accessors};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(seed = cli.seed, dataset = ?cli.dataset, count = cli.count, "generating records");

    let today = Local::now().date_naive();
    let now = Local::now().naive_local();
    let mut generator = Generator::new(cli.seed, today);
    let mut reports = Vec::new();

    match cli.dataset {
        Dataset::Orgs => {
            let buckets = partition(generator.organizations(cli.count), |o: &Organization| {
                classify_org(o.subscription.as_ref(), now)
            });
            for status in OrgStatus::ALL {
                let records = buckets.get(&status).cloned().unwrap_or_default();
                let view = TableView::new(records)
                    .page_size(cli.page_size)
                    .accessors(org_accessors());
                show_bucket(&cli, &status.to_string(), view, &org_row, &mut reports);
            }
        }
        Dataset::Payouts => {
            let buckets = partition(generator.payouts(cli.count), |p: &Payout| {
                classify_payout(p.status.as_deref())
            });
            for status in PayoutStatus::ALL {
                let records = buckets.get(&status).cloned().unwrap_or_default();
                let view = TableView::new(records)
                    .page_size(cli.page_size)
                    .accessors(payout_accessors());
                show_bucket(&cli, &status.to_string(), view, &payout_row, &mut reports);
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

/// Drives one bucket's view with the CLI's search and page, then prints its
/// snapshot (or queues it for JSON output).
fn show_bucket<R: Serialize>(
    cli: &Cli,
    label: &str,
    mut view: TableView<R>,
    render_row: &dyn Fn(&R) -> String,
    reports: &mut Vec<serde_json::Value>,
) {
    let t0 = Instant::now();
    if let Some(query) = &cli.search {
        view.search_input(query, t0);
        // Injected time: advance straight past the idle interval.
        view.tick(t0 + DEFAULT_INTERVAL);
    }
    if let Some(page) = &cli.page {
        view.jump_to_page(page);
    }

    let snapshot = view.snapshot();
    if cli.json {
        reports.push(serde_json::json!({ "bucket": label, "view": snapshot }));
        return;
    }

    println!(
        "== {label} · {} rows · page {}/{} ==",
        snapshot.total_rows, snapshot.page, snapshot.total_pages
    );
    if snapshot.rows.is_empty() {
        println!("  (no rows)");
    }
    for row in &snapshot.rows {
        println!("  {}", render_row(row));
    }
    println!("  {}", render_pager(&snapshot.page_window, snapshot.page));
    println!();
}

fn org_row(org: &Organization) -> String {
    format!(
        "{:>5}  {:<28} {:<11} {}",
        org.id,
        org.name,
        org.plan,
        org.email.as_deref().unwrap_or("-")
    )
}

fn payout_row(payout: &Payout) -> String {
    format!(
        "{:>5}  {:<12} ${:>9.2}",
        payout.id,
        payout.account,
        payout.amount_cents as f64 / 100.0
    )
}

/// Renders a page window as a one-line pager, highlighting the current page:
/// `1 … 8 [9] 10 … 20`.
fn render_pager(items: &[PageItem], current: usize) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == current => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn pager_highlights_current_page() {
        let items = tabview::page_window::window(9, 20, 7);
        assert_eq!(render_pager(&items, 9), "1 … 7 8 [9] 10 11 … 20");
    }

    #[test]
    fn pager_renders_untruncated_layouts() {
        let items = tabview::page_window::window(2, 3, 7);
        assert_eq!(render_pager(&items, 2), "1 [2] 3");
    }

    #[test]
    fn buckets_cover_generated_dataset() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let now = today.and_hms_opt(12, 0, 0).unwrap();
        let orgs = Generator::new(42, today).organizations(60);

        let buckets = partition(orgs, |o: &Organization| {
            classify_org(o.subscription.as_ref(), now)
        });
        let total: usize = buckets.values().map(Vec::len).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn scripted_search_and_jump_apply() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let mut view = TableView::new(Generator::new(42, today).payouts(60))
            .page_size(5)
            .accessors(payout_accessors());

        let t0 = Instant::now();
        view.search_input("a", t0);
        view.tick(t0 + DEFAULT_INTERVAL);
        view.jump_to_page("9999");

        let snapshot = view.snapshot();
        assert_eq!(snapshot.page, snapshot.total_pages);
        assert!(snapshot.total_rows <= 60);
    }
}
