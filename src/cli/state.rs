use crate::cli::forms::SubscriptionDraft;
use crate::domain::DisplayPeriod;
use crate::tracker::Tracker;

/// Shared CLI runtime state.
///
/// Holds the session tracker, the selected display period, and the
/// in-progress entry draft. Everything here lives for the session only.
pub struct CliState {
    pub tracker: Tracker,
    pub display_period: DisplayPeriod,
    pub draft: SubscriptionDraft,
}

impl CliState {
    pub fn new() -> Self {
        Self {
            tracker: Tracker::new(),
            display_period: DisplayPeriod::default(),
            draft: SubscriptionDraft::default(),
        }
    }
}

impl Default for CliState {
    fn default() -> Self {
        Self::new()
    }
}
