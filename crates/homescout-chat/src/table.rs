//! Side-by-side comparison table data.
//!
//! Renders nothing; it lays out formatted cell text and best-value flags so
//! the presentation layer can draw the grid directly.

use homescout_core::{CurrencyFormatter, Listing};
use serde::Serialize;

use crate::best_value::{best_value_marks, ComparisonField};
use crate::types::ComparisonReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonCell {
    pub text: String,
    pub best: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub field: ComparisonField,
    pub label: &'static str,
    /// One cell per compared listing, in report order.
    pub cells: Vec<ComparisonCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Short column headers, one per listing.
    pub headers: Vec<String>,
    /// One row per [`ComparisonField`], in [`ComparisonField::ALL`] order.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn build(report: &ComparisonReport, formatter: &CurrencyFormatter) -> Self {
        let listings = &report.listings;
        let headers = listings
            .iter()
            .map(|l| {
                let first = l.address.split_whitespace().next().unwrap_or_default();
                format!("{}...", first)
            })
            .collect();

        let rows = ComparisonField::ALL
            .iter()
            .map(|&field| {
                let marks = best_value_marks(field, listings);
                let cells = listings
                    .iter()
                    .zip(marks)
                    .map(|(listing, best)| ComparisonCell {
                        text: cell_text(field, listing, formatter),
                        best,
                    })
                    .collect();
                ComparisonRow {
                    field,
                    label: field.label(),
                    cells,
                }
            })
            .collect();

        Self { headers, rows }
    }

    pub fn row(&self, field: ComparisonField) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.field == field)
    }
}

fn cell_text(field: ComparisonField, listing: &Listing, formatter: &CurrencyFormatter) -> String {
    match field {
        ComparisonField::Price => formatter.format(listing.price as f64),
        ComparisonField::Bedrooms => listing.bedrooms.to_string(),
        ComparisonField::Bathrooms => listing.bathrooms.to_string(),
        ComparisonField::SquareFeet => formatter.format_number(u64::from(listing.square_feet)),
        ComparisonField::PricePerSqFt => formatter.format(listing.price_per_sqft()),
        ComparisonField::YearBuilt => listing.year_built.to_string(),
        ComparisonField::CommuteTime => format!("{} min", listing.commute_time),
        ComparisonField::SchoolRating => format!("{}/10", listing.school_rating),
        ComparisonField::NeighborhoodScore => format!("{}/10", listing.neighborhood_score),
        ComparisonField::PropertyTax => formatter.format(listing.property_tax as f64),
        ComparisonField::HoaFees => match listing.hoa_fees {
            Some(fee) if fee > 0 => format!("{}/mo", formatter.format(fee as f64)),
            _ => "None".to_string(),
        },
    }
}
