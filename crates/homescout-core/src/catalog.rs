//! Immutable listing catalog.
//!
//! The catalog is validated once at construction and shared read-only
//! afterwards. Cloning a [`Catalog`] is cheap; all clones see the same
//! listings in the same order.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::types::Listing;

/// Bundled demo catalog of Austin-area listings.
const SAMPLE_CATALOG_JSON: &str = include_str!("../data/austin_listings.json");

/// Highest value allowed for neighborhood scores and school ratings.
const MAX_SCORE: u8 = 10;

/// Ordered, read-only collection of listings.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Arc<[Listing]>,
}

impl Catalog {
    /// Build a catalog, validating every listing.
    ///
    /// Rejects zero living area, out-of-range scores, and duplicate ids.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(listings.len());
        for listing in &listings {
            validate(listing)?;
            if !seen.insert(listing.id.as_str()) {
                return Err(CoreError::DuplicateListing(listing.id.clone()));
            }
        }
        debug!(count = listings.len(), "Catalog validated");
        Ok(Self {
            listings: listings.into(),
        })
    }

    /// Parse a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Self::new(listings)
    }

    /// Load a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            "Catalog loaded from {} ({} listings)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// The bundled Austin demo catalog.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG_JSON)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing by id.
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(listing: &Listing) -> Result<()> {
    let invalid = |reason: &str| CoreError::InvalidListing {
        id: listing.id.clone(),
        reason: reason.to_string(),
    };

    if listing.square_feet == 0 {
        return Err(invalid("square_feet must be greater than zero"));
    }
    if listing.neighborhood_score > MAX_SCORE {
        return Err(invalid("neighborhood_score must be between 0 and 10"));
    }
    if listing.school_rating > MAX_SCORE {
        return Err(invalid("school_rating must be between 0 and 10"));
    }
    Ok(())
}
