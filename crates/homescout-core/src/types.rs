use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Kind of dwelling a listing describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Condo,
    Townhouse,
    Apartment,
}

impl PropertyType {
    /// Lowercase label used in listing summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Apartment => "apartment",
        }
    }
}

// =============================================================================
// Listing
// =============================================================================

/// One catalog record describing a property for sale.
///
/// Listings are created once when the catalog is loaded and never mutated.
/// Price per square foot and monthly cost are derived on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Opaque unique key.
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Asking price in whole currency units.
    pub price: u64,
    /// Annual property tax in whole currency units.
    pub property_tax: u64,
    /// Monthly association fee, if the property has one.
    #[serde(default)]
    pub hoa_fees: Option<u64>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Living area in square feet. Always greater than zero in a valid catalog.
    pub square_feet: u32,
    pub year_built: u32,
    pub property_type: PropertyType,
    #[serde(default)]
    pub image_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    /// Neighborhood quality score, 0 to 10.
    pub neighborhood_score: u8,
    /// School rating, 0 to 10.
    pub school_rating: u8,
    /// Commute to downtown in minutes.
    pub commute_time: u32,
}

impl Listing {
    /// Asking price divided by living area.
    ///
    /// Every caller computes the ratio through this method so that equal inputs
    /// always produce bit-identical results.
    pub fn price_per_sqft(&self) -> f64 {
        self.price as f64 / self.square_feet as f64
    }

    /// Association fee with an absent fee treated as zero.
    pub fn hoa_fees_or_zero(&self) -> u64 {
        self.hoa_fees.unwrap_or(0)
    }

    /// Rough monthly carrying cost excluding the mortgage: tax spread over
    /// twelve months plus any association fee.
    pub fn monthly_cost_estimate(&self) -> u64 {
        self.property_tax / 12 + self.hoa_fees_or_zero()
    }

    /// "City, ST" label.
    pub fn city_state(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::listing;
    use super::*;

    #[test]
    fn test_price_per_sqft() {
        let l = listing("a", 450_000, 1_800);
        assert_eq!(l.price_per_sqft(), 250.0);

        let l = listing("b", 600_000, 2_600);
        assert!((l.price_per_sqft() - 230.769_230_769).abs() < 1e-6);
    }

    #[test]
    fn test_hoa_fees_or_zero() {
        let mut l = listing("a", 300_000, 1_000);
        assert_eq!(l.hoa_fees_or_zero(), 0);
        l.hoa_fees = Some(250);
        assert_eq!(l.hoa_fees_or_zero(), 250);
    }

    #[test]
    fn test_monthly_cost_estimate() {
        let mut l = listing("a", 300_000, 1_000);
        l.property_tax = 12_000;
        assert_eq!(l.monthly_cost_estimate(), 1_000);
        l.hoa_fees = Some(150);
        assert_eq!(l.monthly_cost_estimate(), 1_150);
    }

    #[test]
    fn test_property_type_serde_snake_case() {
        let json = serde_json::to_string(&PropertyType::Townhouse).unwrap();
        assert_eq!(json, "\"townhouse\"");
        let parsed: PropertyType = serde_json::from_str("\"condo\"").unwrap();
        assert_eq!(parsed, PropertyType::Condo);
        assert_eq!(PropertyType::Apartment.as_str(), "apartment");
    }

    #[test]
    fn test_listing_optional_fields_default() {
        let json = r#"{
            "id": "x1", "address": "1 Main St", "city": "Austin", "state": "TX",
            "zip_code": "78701", "price": 500000, "property_tax": 10000,
            "bedrooms": 3, "bathrooms": 2, "square_feet": 2000, "year_built": 2010,
            "property_type": "house", "description": "nice",
            "neighborhood_score": 8, "school_rating": 9, "commute_time": 15
        }"#;
        let l: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(l.hoa_fees, None);
        assert!(l.features.is_empty());
        assert!(l.image_url.is_none());
        assert_eq!(l.city_state(), "Austin, TX");
    }
}
