//! Language histogram from the repositories tab
//!
//! Each repository card names at most one primary language; counting the
//! sightings across cards gives a popularity proxy, not a byte count.

use crate::extract::{extract, last_text, own_text, Strategy};
use indexmap::IndexMap;
use scraper::{ElementRef, Html};
use serde::Serialize;

/// Strategies for language labels, most specific markup first
pub const LANGUAGE_STRATEGIES: [Strategy<String>; 6] = [
    Strategy::new(
        "owned-repo-language",
        "li[itemprop='owns'] span[itemprop='programmingLanguage']",
        own_text,
    ),
    Strategy::new(
        "repository-card-language",
        "[data-testid='repository-card'] span[itemprop='programmingLanguage']",
        own_text,
    ),
    Strategy::new(
        "lang-stats-graph",
        ".repository-lang-stats-graph span",
        own_text,
    ),
    Strategy::new("aria-language", "[aria-label*='language'] span", own_text),
    Strategy::new(
        "language-color-sibling",
        ".repo-language-color + span",
        own_text,
    ),
    Strategy::new("box-row-language", "article.Box-row, .Box-row", box_row_language),
];

/// The last language-looking label inside a generic repository row
fn box_row_language(card: ElementRef<'_>) -> Option<String> {
    last_text(card, "span[itemprop='programmingLanguage'], .f6 span")
}

/// Language name -> number of repositories seen using it
///
/// Iteration order is the order languages were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageHistogram(IndexMap<String, u32>);

impl LanguageHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one sighting of `language`
    pub fn record(&mut self, language: impl Into<String>) {
        *self.0.entry(language.into()).or_insert(0) += 1;
    }

    pub fn get(&self, language: &str) -> Option<u32> {
        self.0.get(language).copied()
    }

    /// Total sightings across all languages
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(language, count)| (language.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<S> for LanguageHistogram {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for language in iter {
            histogram.record(language);
        }
        histogram
    }
}

/// Builds the language histogram from repositories-tab markup
pub fn parse_languages(markup: &str) -> LanguageHistogram {
    let document = Html::parse_document(markup);
    let extraction = extract(&document, &LANGUAGE_STRATEGIES);

    match extraction.strategy {
        Some(strategy) => tracing::debug!(
            "Language labels found by '{}': {}",
            strategy,
            extraction.facts.len()
        ),
        None => tracing::debug!("No language labels matched any strategy"),
    }

    extraction.facts.into_iter().collect()
}
