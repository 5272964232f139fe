//! Pinned repositories from the profile page

use crate::extract::{extract, first_text, is_noise, last_text, normalize_text, Fact, Strategy};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Placeholder for a pinned card without a description
pub const NO_DESCRIPTION: &str = "No description available";

/// Placeholder for a pinned card without a language label
pub const NO_LANGUAGE: &str = "Not specified";

/// Strategies for pinned repository cards
pub const PINNED_STRATEGIES: [Strategy<PinnedCard>; 3] = [
    Strategy::new("pinned-item", ".pinned-item-list-item", project_card),
    Strategy::new(
        "pinned-repository-testid",
        "[data-testid='pinned-repository']",
        project_card,
    ),
    Strategy::new(
        "pinned-reorder-list",
        ".js-pinned-items-reorder-list .pinned-item-list-item-content",
        project_card,
    ),
];

/// Description containers in priority order
const DESCRIPTION_SELECTORS: &[&str] = &[
    "p.pinned-item-desc",
    ".f6.color-fg-muted",
    ".pinned-item-desc",
];

/// Marks the language/stars row, which shares classes with descriptions
const LANGUAGE_MARKER: &str = "[itemprop='programmingLanguage']";

/// A pinned card as it appears in the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedCard {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
}

impl Fact for PinnedCard {
    fn key_text(&self) -> &str {
        &self.name
    }
}

fn project_card(card: ElementRef<'_>) -> Option<PinnedCard> {
    let name = first_text(card, "span.repo, .f4 a, h3 a")?;

    let description = DESCRIPTION_SELECTORS
        .iter()
        .find_map(|css| description_text(card, css));

    let language = last_text(card, "[itemprop='programmingLanguage'], .f6 span")
        .filter(|language| !is_noise(language));

    Some(PinnedCard {
        name,
        description,
        language,
    })
}

/// First description-like text under `css` that is not the metadata row
fn description_text(card: ElementRef<'_>, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    let marker = Selector::parse(LANGUAGE_MARKER).ok()?;
    card.select(&selector)
        .filter(|el| el.select(&marker).next().is_none())
        .map(|el| normalize_text(&el.text().collect::<String>()))
        .find(|text| !text.is_empty() && !is_noise(text))
}

/// A pinned repository with every optional field filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedRepo {
    pub repo_name: String,
    pub description: String,
    pub language: String,
}

impl PinnedRepo {
    /// Normalizes a scraped card for `owner`
    pub fn from_card(card: PinnedCard, owner: &str) -> Self {
        Self {
            repo_name: strip_owner(&card.name, owner).to_string(),
            description: card
                .description
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            language: card
                .language
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| NO_LANGUAGE.to_string()),
        }
    }
}

/// Removes a leading `<owner>/` from a card title
///
/// Some card layouts embed the full repository path; GitHub logins are
/// case-insensitive, so the comparison is too.
fn strip_owner<'a>(name: &'a str, owner: &str) -> &'a str {
    match (name.get(..owner.len()), name.get(owner.len()..)) {
        (Some(head), Some(rest)) if !owner.is_empty() && head.eq_ignore_ascii_case(owner) => {
            match rest.strip_prefix('/') {
                Some(repo) if !repo.trim().is_empty() => repo.trim_start(),
                _ => name,
            }
        }
        _ => name,
    }
}

/// Extracts pinned repositories from profile-page markup, in pin order
pub fn parse_pinned(markup: &str, owner: &str) -> Vec<PinnedRepo> {
    let document = Html::parse_document(markup);
    let extraction = extract(&document, &PINNED_STRATEGIES);

    if let Some(strategy) = extraction.strategy {
        tracing::debug!(
            "Pinned cards found by '{}': {}",
            strategy,
            extraction.facts.len()
        );
    }

    extraction
        .facts
        .into_iter()
        .map(|card| PinnedRepo::from_card(card, owner))
        .collect()
}
