use std::collections::HashSet;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use super::visibility;

pub struct EmailScanner {
    pattern: Regex,
}

impl EmailScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
        }
    }

    /// Addresses from visible `mailto:` anchors and from the visible-text
    /// corpus. Syntactic match only; results are lowercased, deduplicated
    /// and sorted.
    pub fn scan(&self, document: &Html, visible_text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut emails = Vec::new();

        let link_selector = Selector::parse("a[href]").unwrap();
        for element in document.select(&link_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !href.to_lowercase().starts_with("mailto:") {
                continue;
            }
            if !visibility::is_visible(&element) {
                continue;
            }
            let address = href[7..].split('?').next().unwrap_or("").trim();
            if let Some(m) = self.pattern.find(address) {
                let email = m.as_str().to_lowercase();
                if seen.insert(email.clone()) {
                    emails.push(email);
                }
            }
        }

        for m in self.pattern.find_iter(visible_text) {
            let email = m.as_str().to_lowercase();
            if seen.insert(email.clone()) {
                emails.push(email);
            }
        }

        emails.sort();
        debug!("Found {} email addresses", emails.len());
        emails
    }
}
