//! Draft state and validation for the subscription entry form.
//!
//! The draft mirrors the three input fields the user fills in: a name, a raw
//! price string, and the billing cadence. Field values stay raw text until
//! `commit`, which validates and produces a domain entry; the draft is reset
//! to defaults only after a successful submission.

use std::fmt;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::domain::{BillingPeriod, Subscription};

/// High-level lifecycle states emitted by the form runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates the name field: non-empty after trimming.
pub fn validate_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new("Name is required"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Validates the price field: must parse to a finite, non-negative number.
/// Non-numeric input fails here instead of propagating NaN into totals.
pub fn validate_price(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("Price is required"));
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::new(format!("`{trimmed}` is not a numeric price")))?;
    if !value.is_finite() {
        return Err(ValidationError::new("Price must be a finite number"));
    }
    if value < 0.0 {
        return Err(ValidationError::new("Price must be zero or positive"));
    }
    Ok(value)
}

/// Transient, uncommitted form fields. Not part of the tracked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub price: String,
    pub period: BillingPeriod,
}

impl Default for SubscriptionDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            period: BillingPeriod::Month,
        }
    }
}

impl SubscriptionDraft {
    /// Returns every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates the collected fields and builds a new entry.
    pub fn commit(&self) -> Result<Subscription, ValidationError> {
        let name = validate_name(&self.name)?;
        let price = validate_price(&self.price)?;
        Ok(Subscription::new(name, price, self.period))
    }
}

/// Interactive add flow. Collects the three fields into the draft; the caller
/// commits and resets. Pressing ESC on the cadence menu cancels the form.
pub fn run_add_wizard(
    theme: &ColorfulTheme,
    draft: &mut SubscriptionDraft,
) -> Result<FormResult<()>, dialoguer::Error> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Subscription name")
        .validate_with(|input: &String| validate_name(input).map(|_| ()))
        .interact_text()?;
    draft.name = name;

    let price: String = Input::with_theme(theme)
        .with_prompt("Price")
        .validate_with(|input: &String| validate_price(input).map(|_| ()))
        .interact_text()?;
    draft.price = price;

    let cadences = [BillingPeriod::Month, BillingPeriod::Year];
    let labels = ["Monthly", "Yearly"];
    let selection = Select::with_theme(theme)
        .with_prompt("Billing period")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    match selection {
        Some(index) => {
            draft.period = cadences[index];
            Ok(FormResult::Completed(()))
        }
        None => Ok(FormResult::Cancelled),
    }
}

/// Renders an amount without a trailing `.00` when it is whole.
pub(crate) fn format_amount(value: f64) -> String {
    if (value.fract()).abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_match_the_empty_form() {
        let draft = SubscriptionDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.price, "");
        assert_eq!(draft.period, BillingPeriod::Month);
    }

    #[test]
    fn commit_builds_an_entry_from_valid_fields() {
        let draft = SubscriptionDraft {
            name: " YouTube Premium ".into(),
            price: "980".into(),
            period: BillingPeriod::Month,
        };
        let sub = draft.commit().expect("valid draft commits");
        assert_eq!(sub.name, "YouTube Premium");
        assert_eq!(sub.price, 980.0);
        assert_eq!(sub.period, BillingPeriod::Month);
    }

    #[test]
    fn commit_rejects_empty_name() {
        let draft = SubscriptionDraft {
            name: "   ".into(),
            price: "980".into(),
            period: BillingPeriod::Month,
        };
        assert!(draft.commit().is_err());
    }

    #[test]
    fn price_validation_rejects_nan_and_negatives() {
        assert!(validate_price("NaN").is_err());
        assert!(validate_price("inf").is_err());
        assert!(validate_price("-5").is_err());
        assert!(validate_price("abc").is_err());
        assert_eq!(validate_price(" 1500 ").unwrap(), 1500.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = SubscriptionDraft {
            name: "Netflix".into(),
            price: "1500".into(),
            period: BillingPeriod::Year,
        };
        draft.reset();
        assert_eq!(draft, SubscriptionDraft::default());
    }

    #[test]
    fn amounts_render_without_spurious_decimals() {
        assert_eq!(format_amount(13260.0), "13260");
        assert_eq!(format_amount(36.33), "36.33");
    }
}
