//! Best-value marking for comparison cells.
//!
//! A listing is "best" for a field when its value equals the extremum of that
//! field across the comparison set. Ties mark every listing that reaches it.

use homescout_core::Listing;
use serde::{Deserialize, Serialize};

/// Which extremum wins for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Min,
    Max,
}

/// Fields shown in the side-by-side comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonField {
    Price,
    Bedrooms,
    Bathrooms,
    SquareFeet,
    PricePerSqFt,
    YearBuilt,
    CommuteTime,
    SchoolRating,
    NeighborhoodScore,
    PropertyTax,
    HoaFees,
}

impl ComparisonField {
    /// All fields in display order.
    pub const ALL: [ComparisonField; 11] = [
        ComparisonField::Price,
        ComparisonField::Bedrooms,
        ComparisonField::Bathrooms,
        ComparisonField::SquareFeet,
        ComparisonField::PricePerSqFt,
        ComparisonField::YearBuilt,
        ComparisonField::CommuteTime,
        ComparisonField::SchoolRating,
        ComparisonField::NeighborhoodScore,
        ComparisonField::PropertyTax,
        ComparisonField::HoaFees,
    ];

    pub fn direction(&self) -> Direction {
        match self {
            ComparisonField::Price
            | ComparisonField::PricePerSqFt
            | ComparisonField::CommuteTime
            | ComparisonField::PropertyTax
            | ComparisonField::HoaFees => Direction::Min,
            ComparisonField::Bedrooms
            | ComparisonField::Bathrooms
            | ComparisonField::SquareFeet
            | ComparisonField::YearBuilt
            | ComparisonField::SchoolRating
            | ComparisonField::NeighborhoodScore => Direction::Max,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonField::Price => "Price",
            ComparisonField::Bedrooms => "Bedrooms",
            ComparisonField::Bathrooms => "Bathrooms",
            ComparisonField::SquareFeet => "Square Feet",
            ComparisonField::PricePerSqFt => "Price/SqFt",
            ComparisonField::YearBuilt => "Year Built",
            ComparisonField::CommuteTime => "Commute Time",
            ComparisonField::SchoolRating => "School Rating",
            ComparisonField::NeighborhoodScore => "Neighborhood",
            ComparisonField::PropertyTax => "Annual Tax",
            ComparisonField::HoaFees => "HOA Fees",
        }
    }

    /// Numeric value of this field. An absent HOA fee counts as 0.
    pub fn value(&self, listing: &Listing) -> f64 {
        match self {
            ComparisonField::Price => listing.price as f64,
            ComparisonField::Bedrooms => f64::from(listing.bedrooms),
            ComparisonField::Bathrooms => f64::from(listing.bathrooms),
            ComparisonField::SquareFeet => f64::from(listing.square_feet),
            ComparisonField::PricePerSqFt => listing.price_per_sqft(),
            ComparisonField::YearBuilt => f64::from(listing.year_built),
            ComparisonField::CommuteTime => f64::from(listing.commute_time),
            ComparisonField::SchoolRating => f64::from(listing.school_rating),
            ComparisonField::NeighborhoodScore => f64::from(listing.neighborhood_score),
            ComparisonField::PropertyTax => listing.property_tax as f64,
            ComparisonField::HoaFees => listing.hoa_fees_or_zero() as f64,
        }
    }
}

/// Extremal value of `field` across `all`, or `None` if `all` is empty.
pub fn extremum(field: ComparisonField, all: &[Listing]) -> Option<f64> {
    let values = all.iter().map(|l| field.value(l));
    match field.direction() {
        Direction::Min => values.reduce(f64::min),
        Direction::Max => values.reduce(f64::max),
    }
}

/// Whether `listing` holds the best value of `field` within `all`.
///
/// Equality is exact: every value is an integer or the same `price / sqft`
/// computation, so equal inputs compare equal.
pub fn best_value_mark(field: ComparisonField, listing: &Listing, all: &[Listing]) -> bool {
    extremum(field, all).is_some_and(|best| field.value(listing) == best)
}

/// Marks for every listing in `all`, in order.
pub fn best_value_marks(field: ComparisonField, all: &[Listing]) -> Vec<bool> {
    match extremum(field, all) {
        Some(best) => all.iter().map(|l| field.value(l) == best).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homescout_core::Catalog;

    fn pair() -> Vec<Listing> {
        let catalog = Catalog::sample().unwrap();
        let mut a = catalog.get("1").unwrap().clone();
        let mut b = catalog.get("3").unwrap().clone();
        a.price = 450_000;
        a.square_feet = 1_800;
        b.price = 600_000;
        b.square_feet = 2_600;
        vec![a, b]
    }

    #[test]
    fn test_direction_table() {
        use ComparisonField::*;
        let expected = [
            (Price, Direction::Min),
            (Bedrooms, Direction::Max),
            (Bathrooms, Direction::Max),
            (SquareFeet, Direction::Max),
            (PricePerSqFt, Direction::Min),
            (YearBuilt, Direction::Max),
            (CommuteTime, Direction::Min),
            (SchoolRating, Direction::Max),
            (NeighborhoodScore, Direction::Max),
            (PropertyTax, Direction::Min),
            (HoaFees, Direction::Min),
        ];
        assert_eq!(ComparisonField::ALL.len(), expected.len());
        for (field, dir) in expected {
            assert_eq!(field.direction(), dir, "{:?}", field);
        }
    }

    #[test]
    fn test_price_per_sqft_mark_goes_to_larger_home() {
        let all = pair();
        assert!(!best_value_mark(ComparisonField::PricePerSqFt, &all[0], &all));
        assert!(best_value_mark(ComparisonField::PricePerSqFt, &all[1], &all));
        assert!(best_value_mark(ComparisonField::Price, &all[0], &all));
        assert!(best_value_mark(ComparisonField::SquareFeet, &all[1], &all));
    }

    #[test]
    fn test_ties_mark_every_listing() {
        let mut all = pair();
        all[1].bedrooms = all[0].bedrooms;
        assert_eq!(
            best_value_marks(ComparisonField::Bedrooms, &all),
            vec![true, true]
        );
    }

    #[test]
    fn test_absent_hoa_counts_as_zero() {
        let mut all = pair();
        all[0].hoa_fees = None;
        all[1].hoa_fees = Some(125);
        assert_eq!(best_value_marks(ComparisonField::HoaFees, &all), vec![true, false]);

        // Zero only wins when it really is the minimum; both absent tie at 0
        all[1].hoa_fees = None;
        assert_eq!(best_value_marks(ComparisonField::HoaFees, &all), vec![true, true]);

        all[0].hoa_fees = Some(300);
        all[1].hoa_fees = Some(125);
        assert_eq!(best_value_marks(ComparisonField::HoaFees, &all), vec![false, true]);
    }

    #[test]
    fn test_exactly_extremal_listings_marked_for_every_field() {
        let catalog = Catalog::sample().unwrap();
        let all: Vec<Listing> = catalog.iter().take(3).cloned().collect();
        for field in ComparisonField::ALL {
            let values: Vec<f64> = all.iter().map(|l| field.value(l)).collect();
            let best = match field.direction() {
                Direction::Min => values.iter().cloned().fold(f64::INFINITY, f64::min),
                Direction::Max => values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            };
            let marks = best_value_marks(field, &all);
            assert!(marks.iter().any(|m| *m), "{:?} marked nothing", field);
            for (listing, mark) in all.iter().zip(&marks) {
                assert_eq!(*mark, field.value(listing) == best, "{:?}", field);
                assert_eq!(*mark, best_value_mark(field, listing, &all));
            }
        }
    }

    #[test]
    fn test_empty_set_marks_nothing() {
        let all = pair();
        assert!(!best_value_mark(ComparisonField::Price, &all[0], &[]));
        assert!(best_value_marks(ComparisonField::Price, &[]).is_empty());
        assert_eq!(extremum(ComparisonField::Price, &[]), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ComparisonField::PricePerSqFt.label(), "Price/SqFt");
        assert_eq!(ComparisonField::NeighborhoodScore.label(), "Neighborhood");
        assert_eq!(ComparisonField::PropertyTax.label(), "Annual Tax");
    }
}
