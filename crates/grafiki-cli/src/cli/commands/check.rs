//! `grafiki check <url>` – browser URL length verdicts.

use grafiki_core::compat::{self, BrowserCheck, CompatibilityReport, BROWSER_LIMITS};

pub(crate) fn print_report(report: &CompatibilityReport) {
    println!("URL length: {} characters", report.url_length);
    println!("  {:<10} {:>10} {:>8}  {}", "BROWSER", "LIMIT", "USED", "OK");
    for c in &report.browsers {
        print_check(c);
    }
    println!("Status: {}", report.status_text());
}

fn print_check(c: &BrowserCheck) {
    println!(
        "  {:<10} {:>10} {:>7.1}%  {}",
        c.browser,
        c.limit,
        c.percentage_of_limit,
        if c.exceeds { "no" } else { "yes" }
    );
}

pub fn run_check(url: &str, browser: Option<&str>) {
    let report = compat::evaluate(url);
    print_report(&report);

    if let Some(browser) = browser {
        if let Some(v) = compat::browser_verdict(report.url_length, browser, &BROWSER_LIMITS) {
            let verdict = if v.exceeds { "May not work" } else { "Compatible" };
            println!(
                "Your browser ({browser}, limit {}): {verdict} ({:.1}% of limit)",
                v.limit, v.percentage_of_limit
            );
        }
    }
}
