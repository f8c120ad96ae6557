use thiserror::Error;
use uuid::Uuid;

/// Error type that captures tracker failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown subscription: {0}")]
    UnknownSubscription(Uuid),
    #[error("Invalid billing period `{0}` (expected `month` or `year`)")]
    InvalidBillingPeriod(String),
    #[error("Invalid display period `{0}` (expected `day`, `month`, or `year`)")]
    InvalidDisplayPeriod(String),
}
