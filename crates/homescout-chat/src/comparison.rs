//! Multi-criteria comparison of 2 or 3 listings.
//!
//! Each category picks its winner with a stable fold: the running best is
//! replaced only on strict improvement, so the earliest listing wins ties.

use homescout_core::config::ComparisonConfig;
use homescout_core::{CurrencyFormat, CurrencyFormatter, Listing};
use tracing::debug;

use crate::error::ChatError;
use crate::types::{ComparisonReport, TradeoffCategory, TradeoffEntry};

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 3;

/// Produces [`ComparisonReport`]s.
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    config: ComparisonConfig,
    formatter: CurrencyFormatter,
    /// Whole-unit formatter for per-square-foot figures.
    per_sqft: CurrencyFormatter,
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new(ComparisonConfig::default(), CurrencyFormat::default())
    }
}

impl ComparisonEngine {
    pub fn new(config: ComparisonConfig, currency: CurrencyFormat) -> Self {
        let per_sqft = CurrencyFormatter::new(CurrencyFormat {
            max_fraction_digits: 0,
            ..currency.clone()
        });
        Self {
            config,
            formatter: CurrencyFormatter::new(currency),
            per_sqft,
        }
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    /// Compare 2 or 3 listings.
    ///
    /// The input is copied into the report; the caller's slice is never
    /// retained. Fails with [`ChatError::InvalidArity`] outside 2..=3 and with
    /// [`ChatError::InvalidListing`] if a listing has no living area.
    pub fn compare(&self, listings: &[Listing]) -> Result<ComparisonReport, ChatError> {
        let n = listings.len();
        if !(MIN_COMPARE..=MAX_COMPARE).contains(&n) {
            return Err(ChatError::InvalidArity(n));
        }
        if let Some(bad) = listings.iter().find(|l| l.square_feet == 0) {
            return Err(ChatError::InvalidListing(bad.id.clone()));
        }

        let arity = || ChatError::InvalidArity(n);

        let cheapest = strict_best(listings, |c, b| c.price < b.price).ok_or_else(arity)?;
        let priciest = strict_best(listings, |c, b| c.price > b.price).ok_or_else(arity)?;
        let largest =
            strict_best(listings, |c, b| c.square_feet > b.square_feet).ok_or_else(arity)?;
        let best_location =
            strict_best(listings, |c, b| c.neighborhood_score > b.neighborhood_score)
                .ok_or_else(arity)?;
        let best_schools =
            strict_best(listings, |c, b| c.school_rating > b.school_rating).ok_or_else(arity)?;
        let best_value = strict_best(listings, |c, b| c.price_per_sqft() < b.price_per_sqft())
            .ok_or_else(arity)?;

        let tradeoffs = vec![
            entry(
                TradeoffCategory::Affordability,
                cheapest,
                format!(
                    "{} vs {} - saves you {} upfront",
                    self.formatter.format(cheapest.price as f64),
                    self.formatter.format(priciest.price as f64),
                    self.formatter.format((priciest.price - cheapest.price) as f64),
                ),
            ),
            entry(
                TradeoffCategory::Space,
                largest,
                format!(
                    "{} sq ft at {}/sq ft - best value for space",
                    self.formatter.format_number(u64::from(largest.square_feet)),
                    self.per_sqft.format(largest.price_per_sqft()),
                ),
            ),
            entry(
                TradeoffCategory::Location,
                best_location,
                format!(
                    "Neighborhood score of {}/10 with {}min commute",
                    best_location.neighborhood_score, best_location.commute_time
                ),
            ),
            entry(
                TradeoffCategory::Schools,
                best_schools,
                format!(
                    "School rating of {}/10 - excellent for families",
                    best_schools.school_rating
                ),
            ),
        ];

        let mut recommendation = String::new();
        if let Some(family) = listings.iter().find(|l| {
            l.school_rating >= self.config.family_min_school_rating
                && l.bedrooms >= self.config.family_min_bedrooms
        }) {
            recommendation.push_str(&format!(
                "For families, I recommend {} with its excellent schools and spacious layout. ",
                family.address
            ));
        }
        recommendation.push_str(&format!(
            "For best overall value, consider {} at {}/sq ft.",
            best_value.address,
            self.per_sqft.format(best_value.price_per_sqft())
        ));

        debug!(
            count = n,
            affordability = %cheapest.id,
            space = %largest.id,
            location = %best_location.id,
            schools = %best_schools.id,
            best_value = %best_value.id,
            "Comparison computed"
        );

        Ok(ComparisonReport {
            listings: listings.to_vec(),
            tradeoffs,
            recommendation,
        })
    }
}

/// Stable fold keeping the first listing until a later one is strictly better.
fn strict_best<F>(listings: &[Listing], is_better: F) -> Option<&Listing>
where
    F: Fn(&Listing, &Listing) -> bool,
{
    let (first, rest) = listings.split_first()?;
    Some(rest.iter().fold(first, |best, candidate| {
        if is_better(candidate, best) {
            candidate
        } else {
            best
        }
    }))
}

fn entry(category: TradeoffCategory, winner: &Listing, explanation: String) -> TradeoffEntry {
    TradeoffEntry {
        category,
        winner_id: winner.id.clone(),
        winner_address: winner.address.clone(),
        explanation,
    }
}
