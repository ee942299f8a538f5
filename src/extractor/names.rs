use std::collections::HashMap;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use super::types::{Confidence, NameCandidate, NameSource};
use super::visibility;

/// Tokens that mark a page title as a site name rather than a person.
pub const TITLE_BOILERPLATE: &[&str] = &[
    "home", "welcome", "official", "website", "site", "blog", "shop", "store", "page", "login",
    "index", "untitled", "inc", "llc", "ltd",
];

const MAX_HEADING_LEN: usize = 80;
const MAX_ATTR_HINT_LEN: usize = 60;

pub struct NameFinder {
    title_separator: Regex,
    attr_hint: Regex,
    max_title_tokens: usize,
}

impl NameFinder {
    pub fn new(max_title_tokens: usize) -> Self {
        Self {
            // Pipes and long dashes split anywhere; plain hyphens only
            // when space-surrounded, so hyphenated names survive.
            title_separator: Regex::new(r"\s*[|–—]\s*|\s+-\s+").unwrap(),
            attr_hint: Regex::new(r"(?i)\b(name|author|byline|founder|person)\b").unwrap(),
            max_title_tokens,
        }
    }

    /// Gathers candidates from meta author, title, headings and
    /// name-hinted class/id attributes. Duplicates merge keeping the
    /// highest tier and every contributing source; output is sorted by
    /// descending confidence, ties in first-discovery order.
    pub fn scan(&self, document: &Html) -> Vec<NameCandidate> {
        let mut candidates = CandidateSet::new();

        let meta_selector = Selector::parse(r#"meta[name="author"]"#).unwrap();
        for element in document.select(&meta_selector) {
            if let Some(content) = element.value().attr("content") {
                candidates.add(content, Confidence::High, NameSource::MetaAuthor);
            }
        }

        let title_selector = Selector::parse("title").unwrap();
        if let Some(element) = document.select(&title_selector).next() {
            let title = element.text().collect::<String>();
            if let Some(candidate) = self.title_candidate(&title) {
                candidates.add(&candidate, Confidence::MediumHigh, NameSource::Title);
            }
        }

        let heading_selector = Selector::parse("h1, h2, h3").unwrap();
        for element in document.select(&heading_selector) {
            if !visibility::is_visible(&element) {
                continue;
            }
            let text = collapse(&element.text().collect::<String>());
            if text.is_empty() || text.len() > MAX_HEADING_LEN {
                continue;
            }
            candidates.add(&text, Confidence::Medium, NameSource::Heading);
        }

        let hinted_selector = Selector::parse("[class], [id]").unwrap();
        for element in document.select(&hinted_selector) {
            let el = element.value();
            let hinted = el.attr("class").is_some_and(|v| self.attr_hint.is_match(v))
                || el.attr("id").is_some_and(|v| self.attr_hint.is_match(v));
            if !hinted {
                continue;
            }
            if !visibility::is_visible(&element) {
                continue;
            }
            let text = collapse(&element.text().collect::<String>());
            if text.is_empty() || text.len() > MAX_ATTR_HINT_LEN {
                continue;
            }
            candidates.add(&text, Confidence::Low, NameSource::AttributeHint);
        }

        let out = candidates.into_sorted();
        debug!("Found {} name candidates", out.len());
        out
    }

    /// First segment of the title, unless it reads like a site name.
    fn title_candidate(&self, title: &str) -> Option<String> {
        let first = self.title_separator.split(title.trim()).next()?;
        let first = collapse(first);
        if first.is_empty() {
            return None;
        }

        let tokens: Vec<&str> = first.split_whitespace().collect();
        if tokens.len() > self.max_title_tokens {
            return None;
        }
        let generic = tokens.iter().any(|t| {
            let t = t
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            TITLE_BOILERPLATE.contains(&t.as_str())
        });

        if generic {
            None
        } else {
            Some(first)
        }
    }
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct CandidateSet {
    items: Vec<NameCandidate>,
    index: HashMap<String, usize>,
}

impl CandidateSet {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, value: &str, confidence: Confidence, source: NameSource) {
        let value = collapse(value);
        if value.is_empty() {
            return;
        }
        match self.index.get(&value) {
            Some(&i) => {
                let existing = &mut self.items[i];
                if confidence > existing.confidence {
                    existing.confidence = confidence;
                }
                if !existing.source.contains(&source) {
                    existing.source.push(source);
                }
            }
            None => {
                self.index.insert(value.clone(), self.items.len());
                self.items.push(NameCandidate {
                    value,
                    confidence,
                    source: vec![source],
                });
            }
        }
    }

    // Stable sort keeps first-discovery order within a tier.
    fn into_sorted(mut self) -> Vec<NameCandidate> {
        self.items.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(html: &str) -> Vec<NameCandidate> {
        NameFinder::new(4).scan(&Html::parse_document(html))
    }

    #[test]
    fn meta_author_and_heading_merge_into_one_candidate() {
        let candidates = scan(
            "<!DOCTYPE html><html><head>\
             <meta name=\"author\" content=\"Jane Doe\">\
             </head><body><h1>Jane Doe</h1></body></html>",
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, "Jane Doe");
        assert_eq!(candidates[0].confidence, Confidence::High);
        assert!(candidates[0].source.contains(&NameSource::MetaAuthor));
        assert!(candidates[0].source.contains(&NameSource::Heading));
    }

    #[test]
    fn title_first_segment_is_a_candidate() {
        let candidates = scan(
            "<!DOCTYPE html><html><head>\
             <title>Jane Doe | Portfolio</title>\
             </head><body></body></html>",
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, "Jane Doe");
        assert_eq!(candidates[0].confidence, Confidence::MediumHigh);
    }

    #[test]
    fn generic_titles_are_rejected() {
        let candidates = scan(
            "<!DOCTYPE html><html><head>\
             <title>Welcome to Acme</title>\
             </head><body></body></html>",
        );
        assert!(candidates.is_empty());

        let candidates = scan(
            "<!DOCTYPE html><html><head>\
             <title>All the things we ever made together</title>\
             </head><body></body></html>",
        );
        assert!(candidates.is_empty());
    }

    #[test]
    fn candidates_come_out_in_descending_confidence() {
        let candidates = scan(
            "<!DOCTYPE html><html><head>\
             <title>Alice Smith | Words</title>\
             </head><body>\
             <div class=\"author-name\">Carol King</div>\
             <h1>Bob Jones</h1>\
             </body></html>",
        );
        let values: Vec<&str> = candidates.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["Alice Smith", "Bob Jones", "Carol King"]);
        for pair in candidates.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn hidden_headings_and_hints_are_skipped() {
        let candidates = scan(
            "<!DOCTYPE html><html><body>\
             <h1 hidden>Secret Name</h1>\
             <div class=\"byline\" style=\"display:none\">Ghost Writer</div>\
             </body></html>",
        );
        assert!(candidates.is_empty());
    }

    #[test]
    fn attr_hint_needs_a_whole_word_match() {
        // "username" must not trip the name hint.
        let candidates = scan(
            "<!DOCTYPE html><html><body>\
             <div class=\"username-badge\">ignored</div>\
             <div id=\"author\">Pat Q. Writer</div>\
             </body></html>",
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, "Pat Q. Writer");
        assert_eq!(candidates[0].confidence, Confidence::Low);
    }
}
