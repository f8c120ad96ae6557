use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::period::BillingPeriod;

/// One recorded subscription.
///
/// Entries carry a stable id assigned at creation so toggling and deletion
/// never depend on list positions. `enabled` marks whether the entry
/// contributes to totals; a disabled entry stays in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub period: BillingPeriod,
    #[serde(default = "Subscription::enabled_default")]
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(name: impl Into<String>, price: f64, period: BillingPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            period,
            enabled: true,
            created_at: Utc::now(),
        }
    }

    /// Contribution of this entry to the yearly baseline; zero while disabled.
    pub fn yearly_cost(&self) -> f64 {
        if self.enabled {
            self.period.yearly_cost(self.price)
        } else {
            0.0
        }
    }

    fn enabled_default() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entries_start_enabled() {
        let sub = Subscription::new("YouTube", 980.0, BillingPeriod::Month);
        assert!(sub.enabled);
        assert_eq!(sub.yearly_cost(), 11760.0);
    }

    #[test]
    fn disabled_entries_cost_nothing() {
        let mut sub = Subscription::new("Netflix", 1500.0, BillingPeriod::Year);
        sub.enabled = false;
        assert_eq!(sub.yearly_cost(), 0.0);
    }
}
