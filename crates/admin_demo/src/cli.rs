//! Command-line interface for `admin_demo`.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Organizations, default seed
//! admin_demo
//!
//! # Payouts, reproducible data, searched and paged
//! admin_demo --dataset payouts --seed 7 --search ward --page 2
//!
//! # Machine-readable snapshots
//! admin_demo --json
//! ```

use clap::{Parser, ValueEnum};

/// Admin dashboard demo driven by the tabview engine.
///
/// Generates a deterministic dataset, buckets it by status, and prints one
/// searched, paginated table per bucket.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "admin_demo",
    version,
    about = "Admin dashboard list screens built on tabview"
)]
pub struct Cli {
    /// Seed for deterministic record generation
    ///
    /// The same seed always produces the same dataset.
    #[arg(long, short = 's', default_value_t = 42, env = "ADMIN_DEMO_SEED")]
    pub seed: u64,

    /// Which dataset to render
    #[arg(long, short = 'd', value_enum, default_value = "orgs")]
    pub dataset: Dataset,

    /// Number of records to generate
    #[arg(long, default_value_t = 60)]
    pub count: usize,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Search query to apply (committed through the debouncer)
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Page to jump to (free text, clamped like the UI control)
    #[arg(long, short = 'p')]
    pub page: Option<String>,

    /// Print snapshots as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Datasets the demo can render.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// Organizations bucketed by subscription status
    Orgs,
    /// Referral payouts bucketed by payout status
    Payouts,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default tracing filter directive for the chosen verbosity.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["admin_demo"]).unwrap();
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.dataset, Dataset::Orgs);
        assert_eq!(cli.count, 60);
        assert_eq!(cli.page_size, 10);
        assert!(cli.search.is_none());
        assert!(cli.page.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn cli_parses_dataset() {
        let cli = Cli::try_parse_from(["admin_demo", "--dataset", "payouts"]).unwrap();
        assert_eq!(cli.dataset, Dataset::Payouts);

        let cli = Cli::try_parse_from(["admin_demo", "-d", "orgs"]).unwrap();
        assert_eq!(cli.dataset, Dataset::Orgs);
    }

    #[test]
    fn cli_parses_search_and_page() {
        let cli =
            Cli::try_parse_from(["admin_demo", "--search", "acme", "--page", "3"]).unwrap();
        assert_eq!(cli.search.as_deref(), Some("acme"));
        assert_eq!(cli.page.as_deref(), Some("3"));
    }

    #[test]
    fn cli_log_filter_tracks_verbosity() {
        let cli = Cli::try_parse_from(["admin_demo"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");

        let cli = Cli::try_parse_from(["admin_demo", "-vv"]).unwrap();
        assert_eq!(cli.log_filter(), "debug");

        let cli = Cli::try_parse_from(["admin_demo", "-vvvv"]).unwrap();
        assert_eq!(cli.log_filter(), "trace");
    }

    #[test]
    fn cli_rejects_unknown_dataset() {
        assert!(Cli::try_parse_from(["admin_demo", "--dataset", "invoices"]).is_err());
    }
}
