//! Selector-chain extraction
//!
//! A strategy chain is an ordered list of (selector, projector) pairs for one
//! kind of fact. Strategies are evaluated in declared order and the first one
//! that yields at least one meaningful fact wins outright: its facts are
//! returned as-is and later strategies are never consulted, so structurally
//! different markup variants cannot be double counted.

use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// Words that leak from repository metadata into generic text containers
pub const NOISE_TOKENS: &[&str] = &["Updated", "ago"];

/// Projection from a matched element to a fact
pub type Projector<F> = fn(ElementRef<'_>) -> Option<F>;

/// A value produced by a strategy
///
/// The key text is what the emptiness and noise guards inspect.
pub trait Fact {
    fn key_text(&self) -> &str;
}

impl Fact for String {
    fn key_text(&self) -> &str {
        self
    }
}

/// A named rule for locating one kind of fact in a document
pub struct Strategy<F> {
    /// Identifier reported when this strategy wins
    pub name: &'static str,

    /// CSS selector acting as the node predicate
    pub selector: &'static str,

    project: Projector<F>,
}

impl<F> Strategy<F> {
    pub const fn new(name: &'static str, selector: &'static str, project: Projector<F>) -> Self {
        Self {
            name,
            selector,
            project,
        }
    }
}

impl<F> fmt::Debug for Strategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("name", &self.name)
            .field("selector", &self.selector)
            .finish()
    }
}

/// Outcome of running a strategy chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<F> {
    /// Facts produced by the winning strategy, in document order
    pub facts: Vec<F>,

    /// Name of the winning strategy, `None` when every strategy came up empty
    pub strategy: Option<&'static str>,
}

impl<F> Extraction<F> {
    /// An exhausted chain
    pub fn miss() -> Self {
        Self {
            facts: Vec::new(),
            strategy: None,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.strategy.is_none()
    }
}

/// Runs a strategy chain over a parsed document
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `strategies` - Strategies in priority order
///
/// # Returns
///
/// The facts of the first strategy that produced any, or an empty
/// [`Extraction`] with no strategy when none did. Malformed selectors and
/// absent nodes never surface as errors.
///
/// # Example
///
/// ```
/// use devcard::extract::{extract, own_text, Strategy};
/// use scraper::Html;
///
/// let html = Html::parse_document(r#"<ul><li class="lang">Rust</li></ul>"#);
/// let chain = [
///     Strategy::new("missing", ".nothing", own_text),
///     Strategy::new("list", "li.lang", own_text),
/// ];
/// let extraction = extract(&html, &chain);
/// assert_eq!(extraction.facts, vec!["Rust".to_string()]);
/// assert_eq!(extraction.strategy, Some("list"));
/// ```
pub fn extract<F: Fact>(document: &Html, strategies: &[Strategy<F>]) -> Extraction<F> {
    for strategy in strategies {
        let selector = match Selector::parse(strategy.selector) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!(
                    "Skipping strategy '{}' with invalid selector '{}': {:?}",
                    strategy.name,
                    strategy.selector,
                    e
                );
                continue;
            }
        };

        let facts: Vec<F> = document
            .select(&selector)
            .filter_map(strategy.project)
            .filter(|fact| is_meaningful(fact.key_text()))
            .collect();

        tracing::trace!(
            "Strategy '{}' produced {} fact(s)",
            strategy.name,
            facts.len()
        );

        if !facts.is_empty() {
            return Extraction {
                facts,
                strategy: Some(strategy.name),
            };
        }
    }

    Extraction::miss()
}

/// Returns true if the text contains a noise word
///
/// Surrounding ASCII punctuation is ignored, so `"ago."` and `"Updated:"`
/// count as noise.
pub fn is_noise(text: &str) -> bool {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
        .any(|word| NOISE_TOKENS.contains(&word))
}

fn is_meaningful(text: &str) -> bool {
    !text.trim().is_empty() && !is_noise(text)
}

/// Collapses every whitespace run to one space and trims the ends
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Projector that yields the element's own normalized text
pub fn own_text(element: ElementRef<'_>) -> Option<String> {
    Some(normalize_text(&element.text().collect::<String>()))
}

/// Normalized text of the first descendant matching `css`
pub fn first_text(element: ElementRef<'_>, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    element
        .select(&selector)
        .map(|el| normalize_text(&el.text().collect::<String>()))
        .find(|text| !text.is_empty())
}

/// Normalized text of the last descendant matching `css`
pub fn last_text(element: ElementRef<'_>, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    element
        .select(&selector)
        .last()
        .map(|el| normalize_text(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}
