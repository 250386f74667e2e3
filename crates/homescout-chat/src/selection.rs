//! Listings the user has picked for comparison.

use homescout_core::Listing;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::comparison::{MAX_COMPARE, MIN_COMPARE};

/// Result of toggling a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionChange {
    Added,
    Removed,
    /// Added after evicting the oldest selection to stay within capacity.
    AddedWithEviction { evicted: Listing },
}

/// Ordered set of selected listings, unique by id and capped in size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    listings: Vec<Listing>,
    capacity: usize,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new(MAX_COMPARE)
    }
}

impl SelectionSet {
    /// Create an empty selection. The capacity is clamped to
    /// `1..=MAX_COMPARE`, so a full selection can always be compared.
    pub fn new(capacity: usize) -> Self {
        Self {
            listings: Vec::new(),
            capacity: capacity.clamp(1, MAX_COMPARE),
        }
    }

    /// Deselect if already selected, otherwise append, evicting the oldest
    /// entry when full.
    pub fn toggle(&mut self, listing: &Listing) -> SelectionChange {
        if let Some(pos) = self.listings.iter().position(|l| l.id == listing.id) {
            self.listings.remove(pos);
            return SelectionChange::Removed;
        }

        let evicted = if self.listings.len() >= self.capacity {
            Some(self.listings.remove(0))
        } else {
            None
        };
        self.listings.push(listing.clone());

        match evicted {
            Some(evicted) => {
                debug!(evicted = %evicted.id, added = %listing.id, "Selection full, evicted oldest");
                SelectionChange::AddedWithEviction { evicted }
            }
            None => SelectionChange::Added,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.listings.iter().any(|l| l.id == id)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Owned copy to hand to the comparison engine, so later toggles cannot
    /// affect a comparison already started.
    pub fn snapshot(&self) -> Vec<Listing> {
        self.listings.clone()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether enough listings are selected to compare.
    pub fn can_compare(&self) -> bool {
        self.listings.len() >= MIN_COMPARE
    }

    pub fn clear(&mut self) {
        self.listings.clear();
    }
}
