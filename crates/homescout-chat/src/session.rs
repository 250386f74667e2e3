//! Chat session: the append-only turn log, the selection set, and the
//! entry points the presentation layer calls.

use std::time::Duration;

use homescout_core::config::ChatConfig;
use homescout_core::{Catalog, HomeScoutConfig};
use tracing::{debug, info};

use crate::classifier::IntentClassifier;
use crate::error::ChatError;
use crate::selection::{SelectionChange, SelectionSet};
use crate::types::{ChatTurn, ComparisonReport};

/// Greeting that opens every session.
pub const WELCOME_MESSAGE: &str = "Hi! I'm your AI real estate assistant. I can help you find \
the perfect home by comparing properties and explaining the tradeoffs. What are you looking \
for? Try asking about:\n\n\
• Properties in a specific price range\n\
• Homes with certain features\n\
• Comparing specific listings\n\
• Understanding pros and cons";

/// A canned prompt offered under the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickSuggestion {
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_SUGGESTIONS: [QuickSuggestion; 4] = [
    QuickSuggestion {
        label: "Under $500k",
        prompt: "Show me houses under $500k",
    },
    QuickSuggestion {
        label: "Family homes",
        prompt: "Family homes with good schools",
    },
    QuickSuggestion {
        label: "Short commute",
        prompt: "Short commute to downtown",
    },
    QuickSuggestion {
        label: "Investment",
        prompt: "Best investment properties",
    },
];

/// One user's conversation over a shared catalog.
pub struct ChatSession {
    catalog: Catalog,
    classifier: IntentClassifier,
    selection: SelectionSet,
    turns: Vec<ChatTurn>,
    config: ChatConfig,
}

impl ChatSession {
    /// Start a session, seeding the log with the welcome message.
    pub fn new(catalog: Catalog, config: &HomeScoutConfig) -> Self {
        info!(listings = catalog.len(), "Chat session started");
        Self {
            catalog,
            classifier: IntentClassifier::from_config(config),
            selection: SelectionSet::new(config.chat.selection_capacity),
            turns: vec![ChatTurn::assistant_text(WELCOME_MESSAGE)],
            config: config.chat.clone(),
        }
    }

    /// Handle a user message.
    ///
    /// Whitespace-only input is ignored: nothing is classified or logged and
    /// `Ok(None)` is returned. Otherwise the user turn and the assistant reply
    /// are appended and the reply is returned.
    pub fn send(&mut self, text: &str) -> Result<Option<ChatTurn>, ChatError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let question = ChatTurn::user(text);

        // Classify against a copy so the selection cannot change mid-comparison
        let selection = self.selection.snapshot();
        let classification = self.classifier.classify(text, &self.catalog, &selection)?;
        debug!(intent = ?classification.intent, "Reply composed");

        let reply = ChatTurn::assistant(classification);
        self.turns.push(question);
        self.turns.push(reply.clone());
        Ok(Some(reply))
    }

    /// Select or deselect a catalog listing by id.
    pub fn toggle_selection(&mut self, listing_id: &str) -> Result<SelectionChange, ChatError> {
        let listing = self
            .catalog
            .get(listing_id)
            .ok_or_else(|| ChatError::ListingNotFound(listing_id.to_string()))?;
        Ok(self.selection.toggle(listing))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Compare the current selection without adding a chat turn.
    pub fn compare_selection(&self) -> Result<ComparisonReport, ChatError> {
        self.classifier.engine().compare(&self.selection.snapshot())
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Cosmetic delay the presentation layer may wait before showing a reply.
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.config.response_delay_ms)
    }

    /// The full turn log as pretty-printed JSON.
    pub fn transcript_json(&self) -> Result<String, ChatError> {
        serde_json::to_string_pretty(&self.turns).map_err(|e| ChatError::Core(e.to_string()))
    }
}
