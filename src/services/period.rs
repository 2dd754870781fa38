//! Period resolution service
//!
//! Maps calendar dates to period keys, renders period labels, and
//! resolves a user-selected label back to the key it was rendered from.

use chrono::NaiveDate;

use crate::models::{Granularity, PeriodKey};

/// A resolved period choice: the query key and the label shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSelection {
    pub key: PeriodKey,
    pub label: String,
}

/// Resolves dates and labels to period keys at a fixed granularity
pub struct PeriodResolver {
    granularity: Granularity,
}

impl PeriodResolver {
    /// Create a resolver for the given granularity
    pub fn new(granularity: Granularity) -> Self {
        Self { granularity }
    }

    /// The resolver's granularity
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Map a date to its period key
    pub fn resolve(&self, date: NaiveDate) -> PeriodKey {
        PeriodKey::for_date(date, self.granularity)
    }

    /// Render a key as its display label
    pub fn format_label(&self, key: &PeriodKey) -> String {
        key.label()
    }

    /// The period containing today, with its label
    pub fn current(&self) -> PeriodSelection {
        let key = PeriodKey::current(self.granularity);
        let label = key.label();
        PeriodSelection { key, label }
    }

    /// Resolve a requested label against a period listing.
    ///
    /// `labels` and `keys` are parallel: `labels[i]` is the rendering of
    /// `keys[i]`. With no request, the first (most recent) listed period
    /// is chosen. An unknown label, or an empty listing, falls back to
    /// the current period with a freshly computed label.
    pub fn select(
        &self,
        requested: Option<&str>,
        labels: &[String],
        keys: &[PeriodKey],
    ) -> PeriodSelection {
        debug_assert_eq!(labels.len(), keys.len());

        let requested = match requested {
            Some(label) => Some(label),
            None => labels.first().map(|s| s.as_str()),
        };

        match requested.and_then(|label| labels.iter().position(|l| l == label)) {
            Some(idx) => PeriodSelection {
                key: keys[idx],
                label: labels[idx].clone(),
            },
            None => self.current(),
        }
    }
}
