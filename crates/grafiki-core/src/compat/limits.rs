//! Per-browser URL length ceilings.

/// Fallback entry for browsers the table does not know.
pub const DEFAULT_BROWSER: &str = "default";

/// Read-only mapping from lower-case browser id to a maximum URL length in characters.
///
/// Iteration order is declaration order; it fixes the order of the report.
#[derive(Debug, Clone, Copy)]
pub struct BrowserLimitTable<'a> {
    entries: &'a [(&'a str, usize)],
}

/// The built-in table.
pub static BROWSER_LIMITS: BrowserLimitTable<'static> = BrowserLimitTable::new(&[
    ("chrome", 2_048_000),
    ("firefox", 65_536),
    ("safari", 80_000),
    ("edge", 2_048_000),
    (DEFAULT_BROWSER, 65_536),
]);

impl<'a> BrowserLimitTable<'a> {
    pub const fn new(entries: &'a [(&'a str, usize)]) -> Self {
        Self { entries }
    }

    /// Every entry, the `default` fallback included.
    pub fn entries(&self) -> &'a [(&'a str, usize)] {
        self.entries
    }

    /// Real browsers only, in table order.
    pub fn browsers(&self) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        self.entries
            .iter()
            .copied()
            .filter(|(id, _)| *id != DEFAULT_BROWSER)
    }

    /// Exact lookup; ids are matched case-insensitively.
    pub fn get(&self, browser: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(browser))
            .map(|(_, limit)| *limit)
    }

    /// Limit for `browser`, falling back to the `default` entry when unknown.
    ///
    /// `None` only when the browser is unknown and the table has no fallback.
    pub fn limit_for(&self, browser: &str) -> Option<usize> {
        self.get(browser).or_else(|| self.get(DEFAULT_BROWSER))
    }
}
