pub mod totals;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Subscription;
use crate::errors::TrackerError;

/// Ordered collection of subscription entries, insertion order preserved.
///
/// Entries are appended on creation and addressed by their stable id for
/// mutation; removing one entry never changes the enabled state of another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    subscriptions: Vec<Subscription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tracker {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            subscriptions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends an entry to the end of the collection and returns its id.
    pub fn add(&mut self, subscription: Subscription) -> Uuid {
        let id = subscription.id;
        tracing::debug!(%id, name = %subscription.name, "subscription added");
        self.subscriptions.push(subscription);
        self.touch();
        id
    }

    /// Deletes the entry with the given id, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<Subscription, TrackerError> {
        let index = self
            .subscriptions
            .iter()
            .position(|sub| sub.id == id)
            .ok_or(TrackerError::UnknownSubscription(id))?;
        let removed = self.subscriptions.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Flips the enabled flag of the entry with the given id and returns the
    /// new state. Idempotent under double-toggle.
    pub fn toggle(&mut self, id: Uuid) -> Result<bool, TrackerError> {
        let subscription = self
            .subscriptions
            .iter_mut()
            .find(|sub| sub.id == id)
            .ok_or(TrackerError::UnknownSubscription(id))?;
        subscription.enabled = !subscription.enabled;
        let enabled = subscription.enabled;
        self.touch();
        Ok(enabled)
    }

    pub fn get(&self, id: Uuid) -> Option<&Subscription> {
        self.subscriptions.iter().find(|sub| sub.id == id)
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
