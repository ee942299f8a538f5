use std::collections::HashSet;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use super::types::PhoneNumber;
use super::visibility;

pub struct PhoneScanner {
    pattern: Regex,
    min_digits: usize,
}

impl PhoneScanner {
    pub fn new(min_digits: usize) -> Self {
        Self {
            // Optional country code, optional area code in parentheses,
            // then a digit run tolerant of spaces, dashes and dots.
            pattern: Regex::new(
                r"(?:\+\d{1,3}[\s\-.]*)?(?:\(\d{2,4}\)[\s\-.]*)?\d[\d\s\-.()]{5,18}\d",
            )
            .unwrap(),
            min_digits,
        }
    }

    /// Numbers from visible `tel:` anchors and from the visible-text
    /// corpus. Deduplicated on the normalized form; the first display
    /// form seen wins.
    pub fn scan(&self, document: &Html, visible_text: &str) -> Vec<PhoneNumber> {
        let mut seen = HashSet::new();
        let mut phones = Vec::new();

        let link_selector = Selector::parse("a[href]").unwrap();
        for element in document.select(&link_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !href.to_lowercase().starts_with("tel:") {
                continue;
            }
            if !visibility::is_visible(&element) {
                continue;
            }
            let raw = href[4..].split('?').next().unwrap_or("").trim();
            self.push_candidate(raw, &mut seen, &mut phones);
        }

        for m in self.pattern.find_iter(visible_text) {
            self.push_candidate(m.as_str().trim(), &mut seen, &mut phones);
        }

        debug!("Found {} phone numbers", phones.len());
        phones
    }

    fn push_candidate(
        &self,
        raw: &str,
        seen: &mut HashSet<String>,
        phones: &mut Vec<PhoneNumber>,
    ) {
        let normalized = normalize_phone(raw);
        let digits = normalized.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < self.min_digits {
            return;
        }
        if seen.insert(normalized.clone()) {
            phones.push(PhoneNumber {
                original: raw.to_string(),
                normalized,
            });
        }
    }
}

/// Strips everything but digits, keeping a leading `+`.
pub fn normalize_phone(raw: &str) -> String {
    let mut out = String::new();
    for c in raw.trim().chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && out.is_empty() {
            out.push('+');
        }
    }
    out
}
