pub mod emails;
pub mod names;
pub mod phones;
pub mod socials;
pub mod types;
pub mod visibility;

use scraper::Html;
use tracing::info;

use crate::config::ExtractionConfig;
use emails::EmailScanner;
use names::NameFinder;
use phones::PhoneScanner;
pub use types::ExtractionResult;

/// Runs every detector over one page. Stateless across calls; the parsed
/// document lives only for the duration of one `extract`.
pub struct PageExtractor {
    emails: EmailScanner,
    phones: PhoneScanner,
    names: NameFinder,
}

impl PageExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            emails: EmailScanner::new(),
            phones: PhoneScanner::new(config.min_phone_digits),
            names: NameFinder::new(config.max_title_tokens),
        }
    }

    /// Never fails: malformed HTML degrades to whatever tree the parser
    /// recovers, with a note, and empty categories each add a note.
    pub fn extract(&self, html: &str, url: &str) -> ExtractionResult {
        let document = Html::parse_document(html);
        let mut notes = Vec::new();

        if !document.errors.is_empty() {
            notes.push(format!(
                "parser recovered {} error(s) while building the document tree",
                document.errors.len()
            ));
        }

        let corpus = visibility::visible_text(&document);

        let socials = socials::extract_socials(&document, url);
        let emails = self.emails.scan(&document, &corpus);
        let phones = self.phones.scan(&document, &corpus);
        let name_candidates = self.names.scan(&document);

        if socials.is_empty() {
            notes.push("no social links found".to_string());
        }
        if emails.is_empty() {
            notes.push("no email addresses found".to_string());
        }
        if phones.is_empty() {
            notes.push("no phone numbers found".to_string());
        }
        if name_candidates.is_empty() {
            notes.push("no name candidates found".to_string());
        }

        info!(
            "Extracted {} socials, {} emails, {} phones, {} name candidates from {}",
            socials.len(),
            emails.len(),
            phones.len(),
            name_candidates.len(),
            url
        );

        ExtractionResult {
            url: url.to_string(),
            socials,
            emails,
            phones,
            name_candidates,
            notes,
        }
    }
}
