//! Deterministic record generator for the demo screens.
//!
//! Seedable generation of organization and payout records; two runs with the
//! same seed and reference date produce identical datasets.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use tabview::bucket::Subscription;
use tabview::filter::{FieldAccessor, field};

/// Organization name stems.
const ORG_STEMS: &[&str] = &[
    "acme", "apex", "atlas", "aurora", "borealis", "cascade", "cobalt", "delta", "ember",
    "fathom", "gable", "harbor", "indigo", "juniper", "keystone", "lumen", "meridian", "nimbus",
    "onyx", "pinnacle", "quartz", "redwood", "sable", "summit", "terra", "umbra", "vantage",
    "willow", "yonder", "zephyr",
];

/// Organization name suffixes.
const ORG_SUFFIXES: &[&str] = &[
    "Labs", "Systems", "Industries", "Holdings", "Partners", "Works", "Group", "Dynamics",
];

/// Plan names.
const PLANS: &[&str] = &["starter", "growth", "enterprise"];

/// Stored subscription status values, weighted toward "active".
const SUBSCRIPTION_STATUSES: &[&str] = &["active", "active", "active", "expired", "trial"];

/// Account holder names for payouts.
const ACCOUNT_NAMES: &[&str] = &[
    "alice", "bob", "carol", "david", "eve", "frank", "grace", "henry", "iris", "jack", "kate",
    "leo", "mia", "noah", "olivia", "peter", "quinn", "ruby", "sam", "tara", "ward",
];

/// Stored payout status values; `None` models legacy rows written before the
/// status column existed.
const PAYOUT_STATUSES: &[Option<&str>] = &[
    Some("paid"),
    Some("paid"),
    Some("rejected"),
    Some("pending"),
    None,
];

/// An organization row as the upstream data source returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub plan: String,
    pub subscription: Option<Subscription>,
}

/// A referral payout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: u64,
    pub account: String,
    pub amount_cents: u64,
    pub status: Option<String>,
}

/// Search accessors the organization screens use: name, email, and plan.
#[must_use]
pub fn org_accessors() -> Vec<FieldAccessor<Organization>> {
    vec![
        field(|o: &Organization| Some(o.name.clone())),
        field(|o: &Organization| o.email.clone()),
        field(|o: &Organization| Some(o.plan.clone())),
    ]
}

/// Search accessors the payout screens use: account and id.
#[must_use]
pub fn payout_accessors() -> Vec<FieldAccessor<Payout>> {
    vec![
        field(|p: &Payout| Some(p.account.clone())),
        field(|p: &Payout| Some(p.id)),
    ]
}

/// Seeded generator; all randomness flows through one PCG stream.
pub struct Generator {
    rng: Pcg64,
    today: NaiveDate,
}

impl Generator {
    /// Creates a generator for `seed`, anchoring relative dates at `today`.
    #[must_use]
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: Pcg64::new(seed.into(), 0xa02_bdbf_7bb3_c0a7),
            today,
        }
    }

    /// Generates `count` organization records.
    pub fn organizations(&mut self, count: usize) -> Vec<Organization> {
        (0..count)
            .map(|n| {
                let id = 1000 + n as u64;
                let stem = ORG_STEMS.choose(&mut self.rng).unwrap_or(&"acme");
                let suffix = ORG_SUFFIXES.choose(&mut self.rng).unwrap_or(&"Labs");
                let name = format!("{}{} {}", &stem[..1].to_uppercase(), &stem[1..], suffix);
                let email = if self.rng.random_bool(0.85) {
                    Some(format!("billing@{stem}{}.example", id % 97))
                } else {
                    None
                };
                Organization {
                    id,
                    name,
                    email,
                    plan: (*PLANS.choose(&mut self.rng).unwrap_or(&"starter")).to_string(),
                    subscription: self.subscription(),
                }
            })
            .collect()
    }

    /// Generates `count` payout records.
    pub fn payouts(&mut self, count: usize) -> Vec<Payout> {
        (0..count)
            .map(|n| Payout {
                id: 5000 + n as u64,
                account: (*ACCOUNT_NAMES.choose(&mut self.rng).unwrap_or(&"anon")).to_string(),
                amount_cents: self.rng.random_range(500..250_000),
                status: PAYOUT_STATUSES
                    .choose(&mut self.rng)
                    .copied()
                    .flatten()
                    .map(str::to_string),
            })
            .collect()
    }

    fn subscription(&mut self) -> Option<Subscription> {
        if self.rng.random_bool(0.15) {
            return None;
        }
        let status = SUBSCRIPTION_STATUSES.choose(&mut self.rng).unwrap_or(&"active");
        let end_date = if self.rng.random_bool(0.7) {
            // Anywhere from four months past to eight months out, so both
            // sides of the lazy-expiry rule show up in a generated dataset.
            let offset = self.rng.random_range(0..360_u64);
            self.today
                .checked_sub_days(Days::new(120))
                .and_then(|d| d.checked_add_days(Days::new(offset)))
        } else {
            None
        };
        Some(Subscription {
            status: (*status).to_string(),
            end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn same_seed_same_dataset() {
        let orgs_a = Generator::new(7, today()).organizations(40);
        let orgs_b = Generator::new(7, today()).organizations(40);
        assert_eq!(orgs_a, orgs_b);

        let pay_a = Generator::new(7, today()).payouts(40);
        let pay_b = Generator::new(7, today()).payouts(40);
        assert_eq!(pay_a, pay_b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = Generator::new(1, today()).organizations(40);
        let b = Generator::new(2, today()).organizations(40);
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_sequential() {
        let orgs = Generator::new(3, today()).organizations(5);
        let ids: Vec<u64> = orgs.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1000, 1001, 1002, 1003, 1004]);
    }

    #[test]
    fn accessors_cover_searchable_fields() {
        let org = Organization {
            id: 1,
            name: "Acme Labs".to_string(),
            email: Some("billing@acme.example".to_string()),
            plan: "growth".to_string(),
            subscription: None,
        };
        let values: Vec<Option<String>> =
            org_accessors().iter().map(|a| a(&org)).collect();
        assert_eq!(values, vec![
            Some("Acme Labs".to_string()),
            Some("billing@acme.example".to_string()),
            Some("growth".to_string()),
        ]);
    }
}
