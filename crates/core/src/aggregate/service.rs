//! Aggregation service - derived counters

use std::sync::Arc;

use chrono::NaiveDate;
use questlog_domain::day;
use questlog_domain::{Action, ActionKind, Counters};

use crate::actions::ActionStore;

/// Tallies a bucket of actions by the product counting rule.
///
/// Every kind except a missed opportunity counts as an approach, so
/// `approaches` already includes contacts and instant dates.
pub fn counters_for(actions: &[Action]) -> Counters {
    let mut counters = Counters::default();
    for action in actions {
        match action.kind {
            ActionKind::Contact => counters.contacts += 1,
            ActionKind::InstantDate => counters.instant_dates += 1,
            ActionKind::MissedOpportunity => counters.missed_opportunities += 1,
            ActionKind::Approach => {}
        }
        if action.kind.counts_as_approach() {
            counters.approaches += 1;
        }
    }
    counters
}

/// Aggregation service over the action store
pub struct Aggregator {
    store: Arc<ActionStore>,
}

impl Aggregator {
    /// Create a new aggregator
    pub fn new(store: Arc<ActionStore>) -> Self {
        Self { store }
    }

    /// Counters for the given local day.
    pub async fn day_counters(&self, day: NaiveDate) -> Counters {
        counters_for(&self.store.day_actions(day).await)
    }

    /// Counters for the current local day.
    pub async fn today_counters(&self) -> Counters {
        self.day_counters(day::today()).await
    }

    /// Counters over every recorded action.
    pub async fn lifetime_counters(&self) -> Counters {
        counters_for(&self.store.all_actions().await)
    }
}
