//! Value types exchanged between the engine and the presentation layer.

use chrono::{DateTime, Utc};
use homescout_core::Listing;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Intent
// =============================================================================

/// Classified purpose of a user query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Compare,
    Price,
    Bedrooms,
    Location,
    Family,
    Commute,
    Investment,
    /// Nothing matched; the help message is returned.
    Fallback,
}

/// Outcome of classifying one user message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Intent,
    pub response_text: String,
    /// Filtered listings, in catalog order. `None` for comparisons.
    pub listings: Option<Vec<Listing>>,
    /// Present only for the compare intent.
    pub comparison: Option<ComparisonReport>,
}

// =============================================================================
// Comparison
// =============================================================================

/// Fixed comparison categories, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeoffCategory {
    Affordability,
    Space,
    Location,
    Schools,
}

impl TradeoffCategory {
    pub const ALL: [TradeoffCategory; 4] = [
        TradeoffCategory::Affordability,
        TradeoffCategory::Space,
        TradeoffCategory::Location,
        TradeoffCategory::Schools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TradeoffCategory::Affordability => "Affordability",
            TradeoffCategory::Space => "Space",
            TradeoffCategory::Location => "Location",
            TradeoffCategory::Schools => "Schools",
        }
    }
}

/// One category's winner and the reason it won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeoffEntry {
    pub category: TradeoffCategory,
    /// Id of the winning listing.
    pub winner_id: String,
    /// Address of the winning listing, used as its display label.
    pub winner_address: String,
    pub explanation: String,
}

/// Structured result of comparing 2 or 3 listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// The compared listings, in input order.
    pub listings: Vec<Listing>,
    /// Exactly one entry per [`TradeoffCategory`], in [`TradeoffCategory::ALL`] order.
    pub tradeoffs: Vec<TradeoffEntry>,
    pub recommendation: String,
}

// =============================================================================
// Chat log
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the append-only chat log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listings: Option<Vec<Listing>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonReport>,
}

impl ChatTurn {
    /// A plain user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            listings: None,
            comparison: None,
        }
    }

    /// An assistant message carrying a classification's attachments.
    pub fn assistant(classification: Classification) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: classification.response_text,
            timestamp: Utc::now(),
            listings: classification.listings,
            comparison: classification.comparison,
        }
    }

    /// An assistant message with text only.
    pub fn assistant_text(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            listings: None,
            comparison: None,
        }
    }
}
