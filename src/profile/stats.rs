//! Derived language statistics

use crate::scrape::LanguageHistogram;
use serde::Serialize;

/// One language's share of all language sightings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,

    /// Share rendered to one decimal with a percent suffix, e.g. `"60.0%"`
    pub percent: String,

    /// Unrounded share in percent
    #[serde(skip)]
    pub share: f64,
}

/// Computes each language's share of the histogram total
///
/// An empty histogram yields an empty breakdown. Entries keep the
/// histogram's first-seen order.
///
/// # Example
///
/// ```
/// use devcard::profile::language_breakdown;
/// use devcard::scrape::LanguageHistogram;
///
/// let histogram: LanguageHistogram = ["Rust", "Rust", "Go"].into_iter().collect();
/// let breakdown = language_breakdown(&histogram);
/// assert_eq!(breakdown[0].percent, "66.7%");
/// assert_eq!(breakdown[1].percent, "33.3%");
/// ```
pub fn language_breakdown(histogram: &LanguageHistogram) -> Vec<LanguageShare> {
    let total = histogram.total();
    if total == 0 {
        return Vec::new();
    }

    histogram
        .iter()
        .map(|(language, count)| {
            let share = f64::from(count) / f64::from(total) * 100.0;
            LanguageShare {
                language: language.to_string(),
                percent: format_percent(share),
                share,
            }
        })
        .collect()
}

/// One decimal, with exact ties rounded away from zero ("6.25" -> "6.3%")
fn format_percent(share: f64) -> String {
    format!("{:.1}%", (share * 10.0).round() / 10.0)
}
