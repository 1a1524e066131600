//! Total, non-overlapping classification of records into status buckets.
//!
//! [`partition`] consumes the input collection, so the buckets are a true
//! partition by construction: their union is exactly the input and no record
//! can land in two buckets. Classifiers must be total; the concrete ones here
//! route every unmatched value to a default bucket.
//!
//! The organization classifier carries the one subtle rule of the domain:
//! **lazy expiry**. A subscription whose stored status still says `"active"`
//! is bucketed as expired once its end date's end-of-day (23:59:59) has
//! passed. The comparison clock is injected, never read from the system, so
//! callers decide the timezone and tests can pin `now` exactly.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tabview::bucket::{classify_org, OrgStatus, Subscription};
//!
//! let sub = Subscription {
//!     status: "active".into(),
//!     end_date: NaiveDate::from_ymd_opt(2026, 1, 31),
//! };
//! let now = NaiveDate::from_ymd_opt(2026, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! assert_eq!(classify_org(Some(&sub), now), OrgStatus::Expired);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Splits `records` into buckets keyed by `classify`, preserving input order
/// within each bucket.
///
/// Taking the records by value makes the partition invariant structural: the
/// union of the returned buckets is the input, as a multiset, and the buckets
/// are pairwise disjoint.
pub fn partition<R, K, F>(records: Vec<R>, classify: F) -> HashMap<K, Vec<R>>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let mut buckets: HashMap<K, Vec<R>> = HashMap::new();
    for record in records {
        buckets.entry(classify(&record)).or_default().push(record);
    }
    buckets
}

/// Subscription data as stored upstream: a free-form status string and an
/// optional end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Stored status value; only `"active"` and `"expired"` are meaningful.
    pub status: String,
    /// Last day the subscription is valid, inclusive.
    pub end_date: Option<NaiveDate>,
}

/// Organization status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgStatus {
    /// Subscription stored as active and not past its end date.
    Active,
    /// No subscription, or a stored status we do not recognize.
    Inactive,
    /// Stored as expired, or stored as active with a passed end date.
    Expired,
}

impl OrgStatus {
    /// All buckets in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Expired];
}

impl std::fmt::Display for OrgStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Classifies an organization by its subscription, total over all inputs.
///
/// `now` is the injected comparison clock, interpreted in the same (naive)
/// timezone as `end_date`. A subscription stored as `"active"` whose end date
/// has an end-of-day (23:59:59) strictly before `now` is classified
/// [`OrgStatus::Expired`] even though its stored status says otherwise.
#[must_use]
pub fn classify_org(subscription: Option<&Subscription>, now: NaiveDateTime) -> OrgStatus {
    let Some(sub) = subscription else {
        return OrgStatus::Inactive;
    };
    match sub.status.as_str() {
        "expired" => OrgStatus::Expired,
        "active" => {
            let end_of_day = sub.end_date.and_then(|d| d.and_hms_opt(23, 59, 59));
            if end_of_day.is_some_and(|eod| eod < now) {
                OrgStatus::Expired
            } else {
                OrgStatus::Active
            }
        }
        _ => OrgStatus::Inactive,
    }
}

/// Payout status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    /// Awaiting processing; also the default for unset or unknown values.
    Pending,
    /// Paid out.
    Paid,
    /// Rejected.
    Rejected,
}

impl PayoutStatus {
    /// All buckets in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Paid, Self::Rejected];
}

impl std::fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Classifies a payout by its stored status string; unset and unrecognized
/// values default to [`PayoutStatus::Pending`].
#[must_use]
pub fn classify_payout(status: Option<&str>) -> PayoutStatus {
    match status {
        Some("paid") => PayoutStatus::Paid,
        Some("rejected") => PayoutStatus::Rejected,
        _ => PayoutStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    fn active_until(y: i32, m: u32, d: u32) -> Subscription {
        Subscription {
            status: "active".to_string(),
            end_date: Some(date(y, m, d)),
        }
    }

    #[test]
    fn test_no_subscription_is_inactive() {
        assert_eq!(
            classify_org(None, at(2026, 8, 24, 12, 0, 0)),
            OrgStatus::Inactive
        );
    }

    #[test]
    fn test_stored_expired_wins() {
        let sub = Subscription {
            status: "expired".to_string(),
            end_date: Some(date(2099, 1, 1)),
        };
        assert_eq!(
            classify_org(Some(&sub), at(2026, 8, 24, 12, 0, 0)),
            OrgStatus::Expired
        );
    }

    #[test]
    fn test_unknown_status_is_inactive() {
        for status in ["trial", "suspended", "", "ACTIVE"] {
            let sub = Subscription {
                status: status.to_string(),
                end_date: None,
            };
            assert_eq!(
                classify_org(Some(&sub), at(2026, 8, 24, 12, 0, 0)),
                OrgStatus::Inactive,
                "status={status:?}"
            );
        }
    }

    #[test]
    fn test_active_without_end_date_stays_active() {
        let sub = Subscription {
            status: "active".to_string(),
            end_date: None,
        };
        assert_eq!(
            classify_org(Some(&sub), at(2099, 1, 1, 0, 0, 0)),
            OrgStatus::Active
        );
    }

    #[test]
    fn test_lazy_expiry_boundary() {
        let sub = active_until(2026, 8, 24);

        // One second before end-of-day: still active.
        assert_eq!(
            classify_org(Some(&sub), at(2026, 8, 24, 23, 59, 58)),
            OrgStatus::Active
        );
        // Exactly at end-of-day: still active (strict comparison).
        assert_eq!(
            classify_org(Some(&sub), at(2026, 8, 24, 23, 59, 59)),
            OrgStatus::Active
        );
        // Midnight of the next day: expired, even though the stored status
        // still says "active".
        assert_eq!(
            classify_org(Some(&sub), at(2026, 8, 25, 0, 0, 0)),
            OrgStatus::Expired
        );
    }

    #[test]
    fn test_future_end_date_is_active() {
        let sub = active_until(2027, 1, 1);
        assert_eq!(
            classify_org(Some(&sub), at(2026, 8, 24, 12, 0, 0)),
            OrgStatus::Active
        );
    }

    #[test]
    fn test_payout_classification_defaults_to_pending() {
        assert_eq!(classify_payout(Some("paid")), PayoutStatus::Paid);
        assert_eq!(classify_payout(Some("rejected")), PayoutStatus::Rejected);
        assert_eq!(classify_payout(Some("pending")), PayoutStatus::Pending);
        assert_eq!(classify_payout(Some("weird")), PayoutStatus::Pending);
        assert_eq!(classify_payout(None), PayoutStatus::Pending);
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let now = at(2026, 8, 24, 12, 0, 0);
        let subs = vec![
            Some(active_until(2027, 1, 1)),
            None,
            Some(Subscription {
                status: "expired".to_string(),
                end_date: None,
            }),
            Some(active_until(2020, 1, 1)),
            Some(Subscription {
                status: "trial".to_string(),
                end_date: None,
            }),
        ];
        let total = subs.len();

        let buckets = partition(subs, |sub| classify_org(sub.as_ref(), now));

        let bucketed: usize = buckets.values().map(Vec::len).sum();
        assert_eq!(bucketed, total);
        assert_eq!(buckets[&OrgStatus::Active].len(), 1);
        assert_eq!(buckets[&OrgStatus::Inactive].len(), 2);
        assert_eq!(buckets[&OrgStatus::Expired].len(), 2);
    }

    #[test]
    fn test_partition_preserves_order_within_bucket() {
        let buckets = partition(vec![1, 2, 3, 4, 5, 6], |n| n % 2);
        assert_eq!(buckets[&0], vec![2, 4, 6]);
        assert_eq!(buckets[&1], vec![1, 3, 5]);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(OrgStatus::Expired.to_string(), "expired");
        assert_eq!(PayoutStatus::Pending.to_string(), "pending");
    }
}
