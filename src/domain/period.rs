use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Billing cadence of a single subscription. The stored price is always the
/// literal amount charged once per period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Month,
    Year,
}

impl BillingPeriod {
    /// Cost of one entry over a full year.
    pub fn yearly_cost(&self, price: f64) -> f64 {
        match self {
            BillingPeriod::Month => price * 12.0,
            BillingPeriod::Year => price,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Month => "month",
            BillingPeriod::Year => "year",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillingPeriod {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "month" | "monthly" => Ok(BillingPeriod::Month),
            "year" | "yearly" => Ok(BillingPeriod::Year),
            other => Err(TrackerError::InvalidBillingPeriod(other.to_string())),
        }
    }
}

/// Time unit the aggregate total is projected onto. Session-scoped; it never
/// affects which entries are included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayPeriod {
    Day,
    Month,
    Year,
}

impl DisplayPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayPeriod::Day => "day",
            DisplayPeriod::Month => "month",
            DisplayPeriod::Year => "year",
        }
    }
}

impl Default for DisplayPeriod {
    fn default() -> Self {
        DisplayPeriod::Month
    }
}

impl fmt::Display for DisplayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisplayPeriod {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(DisplayPeriod::Day),
            "month" | "monthly" => Ok(DisplayPeriod::Month),
            "year" | "yearly" => Ok(DisplayPeriod::Year),
            other => Err(TrackerError::InvalidDisplayPeriod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_period_parses_both_cadences() {
        assert_eq!("month".parse::<BillingPeriod>().unwrap(), BillingPeriod::Month);
        assert_eq!("Yearly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Year);
        assert!("week".parse::<BillingPeriod>().is_err());
    }

    #[test]
    fn display_period_rejects_unknown_tags() {
        assert_eq!("day".parse::<DisplayPeriod>().unwrap(), DisplayPeriod::Day);
        assert!("fortnight".parse::<DisplayPeriod>().is_err());
    }

    #[test]
    fn yearly_cost_normalizes_monthly_entries() {
        assert_eq!(BillingPeriod::Month.yearly_cost(980.0), 11760.0);
        assert_eq!(BillingPeriod::Year.yearly_cost(1500.0), 1500.0);
    }
}
