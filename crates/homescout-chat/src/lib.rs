//! Conversational engine for HomeScout.
//!
//! Turns free-text queries into filtered listing sets and compares selected
//! listings category by category. Everything here is synchronous and pure
//! apart from the session's turn log.

pub mod best_value;
pub mod classifier;
pub mod comparison;
pub mod error;
pub mod intent;
pub mod selection;
pub mod session;
pub mod table;
pub mod types;

pub use best_value::{best_value_mark, best_value_marks, ComparisonField, Direction};
pub use classifier::{compare_response, IntentClassifier};
pub use comparison::ComparisonEngine;
pub use error::ChatError;
pub use intent::{
    extract_min_bedrooms, extract_price_ceiling, IntentRule, ListingFilter, INTENT_RULES,
};
pub use selection::{SelectionChange, SelectionSet};
pub use session::{ChatSession, QuickSuggestion, QUICK_SUGGESTIONS, WELCOME_MESSAGE};
pub use table::{ComparisonCell, ComparisonRow, ComparisonTable};
pub use types::{
    ChatTurn, Classification, ComparisonReport, Intent, Role, TradeoffCategory, TradeoffEntry,
};
