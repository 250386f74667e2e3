//! Ordered intent rule table, parameter extraction, and listing filters.
//!
//! Matching is case-insensitive substring containment over a fixed table;
//! the first matching rule wins, so table order is the precedence order.

use std::sync::LazyLock;

use homescout_core::config::ClassifierConfig;
use homescout_core::{Catalog, Listing};
use regex::Regex;
use tracing::debug;

use crate::types::Intent;

// =============================================================================
// Rule table
// =============================================================================

/// One row of the intent table.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    /// Lowercase substrings that trigger the rule. Empty means always.
    pub keywords: &'static [&'static str],
    /// Minimum number of selected listings required for the rule to apply.
    pub min_selection: usize,
}

impl IntentRule {
    /// Whether this rule fires for already-lowercased text.
    pub fn matches(&self, lower: &str, selection_len: usize) -> bool {
        selection_len >= self.min_selection
            && (self.keywords.is_empty() || self.keywords.iter().any(|k| lower.contains(k)))
    }
}

/// Intent rules in precedence order.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Compare,
        keywords: &["compare"],
        min_selection: 2,
    },
    IntentRule {
        intent: Intent::Price,
        keywords: &["price", "under", "budget"],
        min_selection: 0,
    },
    IntentRule {
        intent: Intent::Bedrooms,
        keywords: &["bedroom", "bed"],
        min_selection: 0,
    },
    IntentRule {
        intent: Intent::Location,
        keywords: &["austin", "location", "area"],
        min_selection: 0,
    },
    IntentRule {
        intent: Intent::Family,
        keywords: &["family", "kids", "school"],
        min_selection: 0,
    },
    IntentRule {
        intent: Intent::Commute,
        keywords: &["commute", "downtown", "work"],
        min_selection: 0,
    },
    IntentRule {
        intent: Intent::Investment,
        keywords: &["investment", "rental", "appreciation"],
        min_selection: 0,
    },
    IntentRule {
        intent: Intent::Fallback,
        keywords: &[],
        min_selection: 0,
    },
];

/// First matching intent for `text`.
pub fn match_intent(text: &str, selection_len: usize) -> Intent {
    let lower = text.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lower, selection_len))
        .map_or(Intent::Fallback, |rule| rule.intent)
}

// =============================================================================
// Parameter extraction
// =============================================================================

// ASCII digits only; Unicode digit classes would not parse as u64 anyway.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[kK]?").expect("Invalid price regex"));

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)").expect("Invalid number regex"));

/// First digit run in `text`. A run too long for `u64` saturates.
fn first_number(re: &Regex, text: &str) -> Option<u64> {
    let digits = re.captures(text)?.get(1)?.as_str();
    // A run of ASCII digits can only fail to parse by overflowing
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Price ceiling from the first digit run in `text`.
///
/// Values under the thousands cutoff are read as thousands ("500k" and "500"
/// both mean 500,000). No digits or a zero yields the configured default; a
/// run too long for `u64` saturates to `u64::MAX`.
pub fn extract_price_ceiling(text: &str, config: &ClassifierConfig) -> u64 {
    match first_number(&PRICE_RE, text) {
        Some(n) if n > 0 => {
            if n < config.thousands_cutoff {
                n.saturating_mul(1_000)
            } else {
                n
            }
        }
        _ => {
            debug!(
                default = config.default_price_ceiling,
                "No usable price in query, using default ceiling"
            );
            config.default_price_ceiling
        }
    }
}

/// Minimum bedroom count from the first digit run in `text`, or the default.
/// Counts too large for `u32` saturate.
pub fn extract_min_bedrooms(text: &str, config: &ClassifierConfig) -> u32 {
    match first_number(&NUMBER_RE, text).map(|n| u32::try_from(n).unwrap_or(u32::MAX)) {
        Some(n) if n > 0 => n,
        _ => {
            debug!(
                default = config.default_min_bedrooms,
                "No usable bedroom count in query, using default"
            );
            config.default_min_bedrooms
        }
    }
}

// =============================================================================
// Filters
// =============================================================================

/// Predicate applied to the catalog for a classified intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingFilter {
    MaxPrice(u64),
    MinBedrooms(u32),
    All,
    FamilyFriendly {
        min_school_rating: u8,
        min_bedrooms: u32,
        min_neighborhood_score: u8,
    },
    MaxCommute(u32),
    Investment {
        max_price_per_sqft: f64,
        min_neighborhood_score: u8,
    },
    /// Positional: the first `n` catalog entries, unscored.
    FirstN(usize),
}

impl ListingFilter {
    /// Build the filter for `intent`, extracting parameters from `text`.
    ///
    /// Returns `None` for [`Intent::Compare`], which works on the selection
    /// rather than the catalog.
    pub fn for_intent(intent: Intent, text: &str, config: &ClassifierConfig) -> Option<Self> {
        let filter = match intent {
            Intent::Compare => return None,
            Intent::Price => ListingFilter::MaxPrice(extract_price_ceiling(text, config)),
            Intent::Bedrooms => ListingFilter::MinBedrooms(extract_min_bedrooms(text, config)),
            Intent::Location => ListingFilter::All,
            Intent::Family => ListingFilter::FamilyFriendly {
                min_school_rating: config.family_min_school_rating,
                min_bedrooms: config.family_min_bedrooms,
                min_neighborhood_score: config.family_min_neighborhood_score,
            },
            Intent::Commute => ListingFilter::MaxCommute(config.max_commute_minutes),
            Intent::Investment => ListingFilter::Investment {
                max_price_per_sqft: config.investment_max_price_per_sqft,
                min_neighborhood_score: config.investment_min_neighborhood_score,
            },
            Intent::Fallback => ListingFilter::FirstN(config.fallback_listing_count),
        };
        Some(filter)
    }

    /// Whether a single listing passes. Positional filters accept everything.
    pub fn matches(&self, listing: &Listing) -> bool {
        match *self {
            ListingFilter::MaxPrice(ceiling) => listing.price <= ceiling,
            ListingFilter::MinBedrooms(min) => listing.bedrooms >= min,
            ListingFilter::All | ListingFilter::FirstN(_) => true,
            ListingFilter::FamilyFriendly {
                min_school_rating,
                min_bedrooms,
                min_neighborhood_score,
            } => {
                listing.school_rating >= min_school_rating
                    && listing.bedrooms >= min_bedrooms
                    && listing.neighborhood_score >= min_neighborhood_score
            }
            ListingFilter::MaxCommute(max) => listing.commute_time <= max,
            ListingFilter::Investment {
                max_price_per_sqft,
                min_neighborhood_score,
            } => {
                listing.price_per_sqft() < max_price_per_sqft
                    && listing.neighborhood_score >= min_neighborhood_score
            }
        }
    }

    /// Apply to the catalog, preserving catalog order.
    pub fn apply(&self, catalog: &Catalog) -> Vec<Listing> {
        match *self {
            ListingFilter::FirstN(n) => catalog.iter().take(n).cloned().collect(),
            _ => catalog
                .iter()
                .filter(|l| self.matches(l))
                .cloned()
                .collect(),
        }
    }
}
