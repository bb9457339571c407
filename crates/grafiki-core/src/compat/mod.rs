//! Browser compatibility of an assembled URL.
//!
//! Pure functions of the URL length and a [`BrowserLimitTable`]; the built-in
//! table is [`BROWSER_LIMITS`].

mod limits;

pub use limits::{BrowserLimitTable, BROWSER_LIMITS, DEFAULT_BROWSER};

use serde::Serialize;
use std::fmt;

/// Below this many compatible browsers a URL is reported as having issues.
/// Independent of how many browsers the table lists.
pub const MIN_COMPATIBLE_BROWSERS: usize = 3;

/// One browser's verdict for a URL length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserCheck {
    pub browser: String,
    pub limit: usize,
    pub percentage_of_limit: f64,
    pub exceeds: bool,
}

impl BrowserCheck {
    fn new(browser: &str, limit: usize, url_length: usize) -> Self {
        let percentage_of_limit = if limit > 0 {
            url_length as f64 / limit as f64 * 100.0
        } else {
            f64::INFINITY
        };
        Self {
            browser: browser.to_string(),
            limit,
            percentage_of_limit,
            exceeds: url_length > limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityReport {
    /// Character count of the URL.
    pub url_length: usize,
    /// Every real browser in table order.
    pub browsers: Vec<BrowserCheck>,
    /// Ids of the browsers whose limit is not exceeded, in table order.
    pub compatible_browsers: Vec<String>,
    pub has_compatibility_issues: bool,
}

impl CompatibilityReport {
    pub fn check(&self, browser: &str) -> Option<&BrowserCheck> {
        self.browsers
            .iter()
            .find(|c| c.browser.eq_ignore_ascii_case(browser))
    }

    pub fn status(&self) -> CompatibilityStatus {
        if self.compatible_browsers.is_empty() {
            CompatibilityStatus::Incompatible
        } else if self.has_compatibility_issues {
            CompatibilityStatus::Limited
        } else {
            CompatibilityStatus::Compatible
        }
    }

    /// One-line status message for display.
    pub fn status_text(&self) -> String {
        match self.status() {
            CompatibilityStatus::Compatible => "Compatible with all major browsers".to_string(),
            CompatibilityStatus::Limited => format!(
                "Limited compatibility ({} browsers)",
                self.compatible_browsers.len()
            ),
            CompatibilityStatus::Incompatible => {
                "URL too long for browser compatibility".to_string()
            }
        }
    }
}

/// Overall classification used by presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityStatus {
    Compatible,
    Limited,
    Incompatible,
}

impl CompatibilityStatus {
    /// Whether a link in this state should still be offered to the user.
    pub fn is_usable(self) -> bool {
        !matches!(self, CompatibilityStatus::Incompatible)
    }
}

impl fmt::Display for CompatibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompatibilityStatus::Compatible => "compatible",
            CompatibilityStatus::Limited => "limited",
            CompatibilityStatus::Incompatible => "incompatible",
        })
    }
}

/// Evaluate `url` against the built-in table.
pub fn evaluate(url: &str) -> CompatibilityReport {
    evaluate_with(url, &BROWSER_LIMITS)
}

pub fn evaluate_with(url: &str, table: &BrowserLimitTable<'_>) -> CompatibilityReport {
    evaluate_length(url.chars().count(), table)
}

pub fn evaluate_length(url_length: usize, table: &BrowserLimitTable<'_>) -> CompatibilityReport {
    let browsers: Vec<BrowserCheck> = table
        .browsers()
        .map(|(id, limit)| BrowserCheck::new(id, limit, url_length))
        .collect();
    let compatible_browsers: Vec<String> = browsers
        .iter()
        .filter(|c| !c.exceeds)
        .map(|c| c.browser.clone())
        .collect();
    let has_compatibility_issues = compatible_browsers.len() < MIN_COMPATIBLE_BROWSERS;

    if has_compatibility_issues {
        tracing::debug!(
            url_length,
            compatible = compatible_browsers.len(),
            "url has browser compatibility issues"
        );
    }

    CompatibilityReport {
        url_length,
        browsers,
        compatible_browsers,
        has_compatibility_issues,
    }
}

/// Verdict for one browser id as reported by the client, falling back to
/// the `default` entry for ids the table does not list.
pub fn browser_verdict(
    url_length: usize,
    browser: &str,
    table: &BrowserLimitTable<'_>,
) -> Option<BrowserCheck> {
    let id = browser.to_ascii_lowercase();
    let limit = table.limit_for(&id)?;
    let id = if table.get(&id).is_some() {
        id
    } else {
        DEFAULT_BROWSER.to_string()
    };
    Some(BrowserCheck::new(&id, limit, url_length))
}
