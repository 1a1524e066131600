#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Tabview
//!
//! A deterministic view engine for tabular admin screens.
//!
//! Admin dashboards tend to repeat the same list screen dozens of times:
//! organizations, users, plans, transfers, payouts. Tabview factors out the
//! logic they all share:
//!
//! - **page_window** - which page-number buttons (and ellipses) a pager shows
//! - **debounce** - keystrokes become a committed search query on an idle timer
//! - **filter** - substring search over configurable record fields
//! - **bucket** - total, non-overlapping classification into status buckets
//! - **table_view** - the controller composing all of the above into a
//!   render-ready snapshot, with automatic page clamping
//!
//! The engine is pure and synchronous: it performs no I/O, never consults the
//! system clock (time is injected), and degrades invalid input to clamped or
//! no-op behavior instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tabview::table_view::TableView;
//! use tabview::filter::field;
//!
//! #[derive(Clone)]
//! struct User { name: String, email: String }
//!
//! let users = vec![
//!     User { name: "Ada".into(), email: "ada@example.com".into() },
//!     User { name: "Grace".into(), email: "grace@example.com".into() },
//! ];
//!
//! let mut view = TableView::new(users)
//!     .page_size(10)
//!     .accessor(field(|u: &User| Some(u.name.clone())))
//!     .accessor(field(|u: &User| Some(u.email.clone())));
//!
//! let t0 = Instant::now();
//! view.search_input("gra", t0);
//! view.tick(t0 + Duration::from_millis(300));
//!
//! let snapshot = view.snapshot();
//! assert_eq!(snapshot.rows.len(), 1);
//! assert_eq!(snapshot.page, 1);
//! ```

pub mod bucket;
pub mod debounce;
pub mod filter;
pub mod page_window;
pub mod table_view;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bucket::{
        OrgStatus, PayoutStatus, Subscription, classify_org, classify_payout, partition,
    };
    pub use crate::debounce::{DEFAULT_INTERVAL, SearchDebouncer};
    pub use crate::filter::{FieldAccessor, field, matching_indices};
    pub use crate::page_window::{PageItem, window};
    pub use crate::table_view::{Snapshot, TableView, ViewState};
}
