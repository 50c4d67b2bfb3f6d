use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Occurrence counter keyed by an arbitrary label.
///
/// Counts only ever grow: every [`add`](Self::add) either creates a label at
/// one or bumps an existing label by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyCounter {
    data: HashMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: impl Into<String>) {
        *self.data.entry(label.into()).or_insert(0) += 1;
    }

    /// The `k` labels with the highest counts, highest first.
    ///
    /// Ordering among equal counts follows the map's iteration order and is
    /// not stable across runs.
    pub fn top_k(&self, k: usize) -> Vec<(&str, usize)> {
        if k == 0 {
            return Vec::new();
        }
        let mut entries: Vec<(&str, usize)> = self.data.iter().map(|(label, &count)| (label.as_str(), count)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all counts, i.e. the number of `add` calls so far.
    pub fn total(&self) -> usize {
        self.data.values().sum()
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.data.get(label).copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Self::new();
        for label in iter {
            counter.add(label);
        }
        counter
    }
}
