//! Yearly contribution headline from the profile page

use crate::extract::{extract, own_text, Strategy};
use scraper::{ElementRef, Html};

/// Reported when no candidate region held contribution text
pub const CONTRIBUTIONS_MISSING: &str = "Contribution data unavailable";

/// Reported when the profile page could not be fetched
pub const CONTRIBUTIONS_UNAVAILABLE: &str = "Unable to fetch contributions data";

/// Candidate headings, each guarded by the "contribution" keyword
pub const CONTRIBUTION_STRATEGIES: [Strategy<String>; 4] = [
    Strategy::new("profile-heading", "h2.f4.text-normal.mb-2", guarded_text),
    Strategy::new("yearly-heading", ".js-yearly-contributions h2", guarded_text),
    Strategy::new(
        "contributions-graph-heading",
        "[data-testid='contributions-graph'] h2",
        guarded_text,
    ),
    Strategy::new("calendar-heading", ".ContributionCalendar h2", guarded_text),
];

/// Narrower, unguarded region tried once every heading failed the guard
pub const CONTRIBUTION_FALLBACK: [Strategy<String>; 1] = [Strategy::new(
    "yearly-count",
    ".js-yearly-contributions .f4.text-normal",
    own_text,
)];

/// Rejects headings that matched a selector but are about something else
fn guarded_text(element: ElementRef<'_>) -> Option<String> {
    own_text(element).filter(|text| mentions_contributions(text))
}

fn mentions_contributions(text: &str) -> bool {
    text.to_lowercase().contains("contribution")
}

/// Outcome of the contribution scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contributions {
    /// Headline text as shown on the profile
    Found(String),

    /// The page was fetched but no region held the headline
    Missing,

    /// The page could not be fetched
    Unavailable,
}

impl Contributions {
    /// Text for display, with placeholders for the failure cases
    pub fn text(&self) -> &str {
        match self {
            Contributions::Found(text) => text,
            Contributions::Missing => CONTRIBUTIONS_MISSING,
            Contributions::Unavailable => CONTRIBUTIONS_UNAVAILABLE,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Contributions::Found(_))
    }
}

/// Extracts the contribution headline from profile-page markup
pub fn parse_contributions(markup: &str) -> Contributions {
    let document = Html::parse_document(markup);

    let primary = extract(&document, &CONTRIBUTION_STRATEGIES);
    let extraction = if primary.is_miss() {
        extract(&document, &CONTRIBUTION_FALLBACK)
    } else {
        primary
    };

    match (extraction.strategy, extraction.facts.into_iter().next()) {
        (Some(strategy), Some(text)) => {
            tracing::debug!("Contribution text found by '{}'", strategy);
            Contributions::Found(text)
        }
        _ => Contributions::Missing,
    }
}
