//! Intent classification and response composition.
//!
//! Maps free text to an [`Intent`], applies the matching catalog filter, and
//! fills the response template. Comparisons are delegated to the
//! [`ComparisonEngine`].

use homescout_core::config::ClassifierConfig;
use homescout_core::{Catalog, CurrencyFormatter, HomeScoutConfig, Listing};
use tracing::debug;

use crate::comparison::ComparisonEngine;
use crate::error::ChatError;
use crate::intent::{match_intent, ListingFilter};
use crate::types::{Classification, ComparisonReport, Intent};

const LOCATION_RESPONSE: &str = "Here are all available properties in Austin. The market has \
options ranging from downtown condos to suburban family homes. What area interests you most?";

const FAMILY_RESPONSE: &str = "For families, I recommend focusing on properties with good \
schools and safe neighborhoods. Here are the best family-friendly options:";

const INVESTMENT_RESPONSE: &str = "For investment properties, look for good price per square \
foot in up-and-coming neighborhoods. Here are some promising options:";

const HELP_RESPONSE: &str = "I can help you find the right property! Try asking me about:\n\n\
• Properties under a specific price\n\
• Homes with 3+ bedrooms\n\
• Family-friendly neighborhoods\n\
• Short commute options\n\
• Investment opportunities\n\n\
Or select properties and ask me to compare them!";

/// Rule-based classifier over a fixed intent table.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    config: ClassifierConfig,
    formatter: CurrencyFormatter,
    engine: ComparisonEngine,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::from_config(&HomeScoutConfig::default())
    }
}

impl IntentClassifier {
    pub fn new(
        config: ClassifierConfig,
        formatter: CurrencyFormatter,
        engine: ComparisonEngine,
    ) -> Self {
        Self {
            config,
            formatter,
            engine,
        }
    }

    /// Build a classifier and its comparison engine from application config.
    pub fn from_config(config: &HomeScoutConfig) -> Self {
        Self::new(
            config.classifier.clone(),
            CurrencyFormatter::new(config.currency.clone()),
            ComparisonEngine::new(config.comparison.clone(), config.currency.clone()),
        )
    }

    pub fn engine(&self) -> &ComparisonEngine {
        &self.engine
    }

    /// Classify the intent of `text` without filtering anything.
    pub fn classify_intent(&self, text: &str, selection_len: usize) -> Intent {
        match_intent(text, selection_len)
    }

    /// Classify `text` and produce the response for it.
    ///
    /// `selection` is only read for the compare intent. The only failure is a
    /// selection the comparison engine rejects (more than 3 listings, or a
    /// listing without living area).
    pub fn classify(
        &self,
        text: &str,
        catalog: &Catalog,
        selection: &[Listing],
    ) -> Result<Classification, ChatError> {
        let intent = self.classify_intent(text, selection.len());

        let Some(filter) = ListingFilter::for_intent(intent, text, &self.config) else {
            let report = self.engine.compare(selection)?;
            debug!(intent = ?intent, compared = selection.len(), "Query classified");
            return Ok(Classification {
                intent,
                response_text: compare_response(&report),
                listings: None,
                comparison: Some(report),
            });
        };

        let listings = filter.apply(catalog);
        let response_text = self.respond(filter, listings.len());
        debug!(intent = ?intent, results = listings.len(), "Query classified");

        Ok(Classification {
            intent,
            response_text,
            listings: Some(listings),
            comparison: None,
        })
    }

    fn respond(&self, filter: ListingFilter, count: usize) -> String {
        match filter {
            ListingFilter::MaxPrice(ceiling) => format!(
                "I found {} properties under {}. Here are some options that might work for your budget:",
                count,
                self.formatter.format(ceiling as f64)
            ),
            ListingFilter::MinBedrooms(min) => {
                format!("Here are {} properties with {}+ bedrooms:", count, min)
            }
            ListingFilter::All => LOCATION_RESPONSE.to_string(),
            ListingFilter::FamilyFriendly { .. } => FAMILY_RESPONSE.to_string(),
            ListingFilter::MaxCommute(max) => format!(
                "Here are properties with shorter commute times (under {} minutes to downtown):",
                max
            ),
            ListingFilter::Investment { .. } => INVESTMENT_RESPONSE.to_string(),
            ListingFilter::FirstN(_) => HELP_RESPONSE.to_string(),
        }
    }
}

/// Chat text summarizing a comparison report.
pub fn compare_response(report: &ComparisonReport) -> String {
    let findings = report
        .tradeoffs
        .iter()
        .map(|t| {
            format!(
                "**{}:** {} - {}",
                t.category.label(),
                t.winner_address,
                t.explanation
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "I've analyzed {} properties for you. Here's what I found:\n\n{}\n\n💡 {}",
        report.listings.len(),
        findings,
        report.recommendation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use homescout_core::{CurrencyFormat, HomeScoutConfig};

    fn classifier() -> IntentClassifier {
        IntentClassifier::default()
    }

    fn catalog() -> Catalog {
        Catalog::sample().unwrap()
    }

    fn ids(c: &Classification) -> Vec<&str> {
        c.listings
            .as_ref()
            .map(|ls| ls.iter().map(|l| l.id.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_price_query_example() {
        let result = classifier()
            .classify("Show me houses under 500k", &catalog(), &[])
            .unwrap();
        assert_eq!(result.intent, Intent::Price);
        assert_eq!(ids(&result), vec!["1", "2", "5", "6"]);
        assert_eq!(
            result.response_text,
            "I found 4 properties under $500,000. Here are some options that might work for your budget:"
        );
        assert!(result.comparison.is_none());
    }

    #[test]
    fn test_price_default_ceiling() {
        let result = classifier()
            .classify("what's my budget", &catalog(), &[])
            .unwrap();
        assert_eq!(ids(&result), vec!["1", "2", "4", "5", "6"]);
        assert!(result.response_text.contains("under $600,000"));
    }

    #[test]
    fn test_bedroom_query_example() {
        let result = classifier()
            .classify("3 bedroom homes", &catalog(), &[])
            .unwrap();
        assert_eq!(result.intent, Intent::Bedrooms);
        assert_eq!(ids(&result), vec!["1", "3", "4", "5"]);
        assert_eq!(result.response_text, "Here are 4 properties with 3+ bedrooms:");
    }

    #[test]
    fn test_location_returns_whole_catalog() {
        let result = classifier()
            .classify("What's available in Austin?", &catalog(), &[])
            .unwrap();
        assert_eq!(result.intent, Intent::Location);
        assert_eq!(ids(&result).len(), 6);
        assert_eq!(result.response_text, LOCATION_RESPONSE);
    }

    #[test]
    fn test_family_commute_investment() {
        let c = classifier();
        let family = c
            .classify("Family homes with good schools", &catalog(), &[])
            .unwrap();
        assert_eq!(ids(&family), vec!["1", "3", "4"]);
        assert_eq!(family.response_text, FAMILY_RESPONSE);

        let commute = c
            .classify("Short commute to downtown", &catalog(), &[])
            .unwrap();
        assert_eq!(ids(&commute), vec!["2", "3", "4", "6"]);
        assert_eq!(
            commute.response_text,
            "Here are properties with shorter commute times (under 20 minutes to downtown):"
        );

        let investment = c
            .classify("Best investment properties", &catalog(), &[])
            .unwrap();
        assert_eq!(ids(&investment), vec!["1", "3", "4", "5"]);
        assert_eq!(investment.response_text, INVESTMENT_RESPONSE);
    }

    #[test]
    fn test_fallback_returns_first_three_in_order() {
        let result = classifier()
            .classify("hello there", &catalog(), &[])
            .unwrap();
        assert_eq!(result.intent, Intent::Fallback);
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
        assert_eq!(result.response_text, HELP_RESPONSE);
    }

    #[test]
    fn test_compare_with_selection() {
        let cat = catalog();
        let selection = vec![cat.get("1").unwrap().clone(), cat.get("3").unwrap().clone()];
        let result = classifier()
            .classify("Can you compare these?", &cat, &selection)
            .unwrap();
        assert_eq!(result.intent, Intent::Compare);
        assert!(result.listings.is_none());

        let report = result.comparison.as_ref().unwrap();
        assert_eq!(report.listings, selection);
        assert!(result
            .response_text
            .starts_with("I've analyzed 2 properties for you. Here's what I found:\n\n"));
        assert!(result
            .response_text
            .contains("**Affordability:** 2847 Oak Valley Dr - $485,000 vs $875,000 - saves you $390,000 upfront"));
        assert!(result.response_text.ends_with(&format!("💡 {}", report.recommendation)));
    }

    #[test]
    fn test_compare_with_single_selection_falls_through() {
        let cat = catalog();
        let selection = vec![cat.get("1").unwrap().clone()];
        let result = classifier().classify("compare", &cat, &selection).unwrap();
        assert_eq!(result.intent, Intent::Fallback);
    }

    #[test]
    fn test_compare_with_oversized_selection_errors() {
        let cat = catalog();
        let selection: Vec<Listing> = cat.iter().take(4).cloned().collect();
        let err = classifier().classify("compare", &cat, &selection).unwrap_err();
        assert!(matches!(err, ChatError::InvalidArity(4)));
    }

    #[test]
    fn test_empty_text_is_fallback() {
        let result = classifier().classify("", &catalog(), &[]).unwrap();
        assert_eq!(result.intent, Intent::Fallback);
    }

    #[test]
    fn test_classify_does_not_mutate_inputs() {
        let cat = catalog();
        let before: Vec<Listing> = cat.listings().to_vec();
        let selection = vec![cat.get("2").unwrap().clone(), cat.get("4").unwrap().clone()];
        let selection_before = selection.clone();
        let c = classifier();
        for text in ["compare", "under 400k", "4 beds", "austin", "hi"] {
            c.classify(text, &cat, &selection).unwrap();
        }
        assert_eq!(cat.listings(), before.as_slice());
        assert_eq!(selection, selection_before);
    }

    #[test]
    fn test_configured_currency_in_templates() {
        let mut config = HomeScoutConfig::default();
        config.currency = CurrencyFormat {
            locale: "de-DE".to_string(),
            currency: "EUR".to_string(),
            max_fraction_digits: 0,
        };
        let c = IntentClassifier::from_config(&config);
        let result = c.classify("under 500k", &catalog(), &[]).unwrap();
        assert!(result.response_text.contains("under 500.000\u{a0}€."));
    }

    #[test]
    fn test_configured_commute_threshold() {
        let mut config = HomeScoutConfig::default();
        config.classifier.max_commute_minutes = 10;
        let c = IntentClassifier::from_config(&config);
        let result = c.classify("commute", &catalog(), &[]).unwrap();
        assert_eq!(ids(&result), vec!["2", "6"]);
        assert!(result.response_text.contains("under 10 minutes"));
    }
}
