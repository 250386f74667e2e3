use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::currency::CurrencyFormat;
use crate::error::{CoreError, Result};

/// Top-level configuration for the HomeScout assistant.
///
/// Loaded from a TOML file. Every section falls back to its defaults, so a
/// missing or partial file still yields the reference behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeScoutConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub currency: CurrencyFormat,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub comparison: ComparisonConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl HomeScoutConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: HomeScoutConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error. `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Defaults and thresholds used by the intent classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Price ceiling when a price query carries no usable number.
    pub default_price_ceiling: u64,
    /// Extracted prices below this are read as thousands ("500k", "500").
    pub thousands_cutoff: u64,
    /// Bedroom minimum when a bedroom query carries no usable number.
    pub default_min_bedrooms: u32,
    pub family_min_school_rating: u8,
    pub family_min_bedrooms: u32,
    pub family_min_neighborhood_score: u8,
    /// Longest commute, in minutes, still counted as short.
    pub max_commute_minutes: u32,
    /// Investment picks must be strictly below this price per square foot.
    pub investment_max_price_per_sqft: f64,
    pub investment_min_neighborhood_score: u8,
    /// Number of catalog entries shown with the help message.
    pub fallback_listing_count: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_price_ceiling: 600_000,
            thousands_cutoff: 1_000,
            default_min_bedrooms: 3,
            family_min_school_rating: 8,
            family_min_bedrooms: 3,
            family_min_neighborhood_score: 8,
            max_commute_minutes: 20,
            investment_max_price_per_sqft: 300.0,
            investment_min_neighborhood_score: 7,
            fallback_listing_count: 3,
        }
    }
}

/// Thresholds for the comparison recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub family_min_school_rating: u8,
    pub family_min_bedrooms: u32,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            family_min_school_rating: 8,
            family_min_bedrooms: 4,
        }
    }
}

/// Chat session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Listings that can be selected for comparison at once. Values outside
    /// 1 to 3 are clamped when the selection is created.
    pub selection_capacity: usize,
    /// Cosmetic delay before the presentation layer shows a reply.
    pub response_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            selection_capacity: 3,
            response_delay_ms: 1_000,
        }
    }
}
