//! Pure aggregation over the entry collection.
//!
//! Totals are computed in two steps: every enabled entry is normalized to a
//! yearly cost, then the yearly baseline is projected onto the requested
//! display period. Disabled entries contribute exactly zero.

use crate::domain::{DisplayPeriod, Subscription};

/// Days used for the daily projection. No leap-year adjustment.
const DAYS_PER_YEAR: f64 = 365.0;

/// Sum of all enabled entries normalized to an annual cost.
pub fn yearly_baseline(subscriptions: &[Subscription]) -> f64 {
    // The empty sum is -0.0 (IEEE additive identity) on recent std;
    // adding +0.0 normalizes it so an empty tracker renders as `0`.
    subscriptions.iter().map(Subscription::yearly_cost).sum::<f64>() + 0.0
}

/// Aggregate cost of the enabled entries, projected onto `period`.
///
/// The monthly view rounds to a whole amount; the daily view keeps two
/// decimal places.
pub fn total(subscriptions: &[Subscription], period: DisplayPeriod) -> f64 {
    let yearly = yearly_baseline(subscriptions);
    match period {
        DisplayPeriod::Day => ((yearly / DAYS_PER_YEAR) * 100.0).round() / 100.0,
        DisplayPeriod::Month => (yearly / 12.0).round(),
        DisplayPeriod::Year => yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BillingPeriod;

    fn sample_entries() -> Vec<Subscription> {
        vec![
            Subscription::new("YouTube", 980.0, BillingPeriod::Month),
            Subscription::new("Netflix", 1500.0, BillingPeriod::Year),
        ]
    }

    #[test]
    fn yearly_total_normalizes_monthly_prices() {
        let subs = sample_entries();
        assert_eq!(total(&subs, DisplayPeriod::Year), 13260.0);
    }

    #[test]
    fn monthly_total_rounds_to_whole_amount() {
        let subs = sample_entries();
        assert_eq!(total(&subs, DisplayPeriod::Month), 1105.0);
    }

    #[test]
    fn daily_total_keeps_two_decimals() {
        let subs = sample_entries();
        assert_eq!(total(&subs, DisplayPeriod::Day), 36.33);
    }

    #[test]
    fn disabled_entries_are_excluded() {
        let mut subs = sample_entries();
        subs[0].enabled = false;
        assert_eq!(total(&subs, DisplayPeriod::Year), 1500.0);
    }

    #[test]
    fn empty_collection_totals_zero_for_every_period() {
        let subs: Vec<Subscription> = Vec::new();
        assert_eq!(total(&subs, DisplayPeriod::Day), 0.0);
        assert_eq!(total(&subs, DisplayPeriod::Month), 0.0);
        assert_eq!(total(&subs, DisplayPeriod::Year), 0.0);
    }

    #[test]
    fn projections_derive_from_the_yearly_baseline() {
        let subs = sample_entries();
        let yearly = total(&subs, DisplayPeriod::Year);
        assert_eq!(total(&subs, DisplayPeriod::Month), (yearly / 12.0).round());
        assert_eq!(
            total(&subs, DisplayPeriod::Day),
            ((yearly / 365.0) * 100.0).round() / 100.0
        );
    }
}
