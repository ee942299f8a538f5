use serde::{Deserialize, Serialize};

/// One record per processed URL. Immutable after construction; written
/// out as part of the JSON report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub url: String,
    pub socials: Vec<String>,
    pub emails: Vec<String>,
    pub phones: Vec<PhoneNumber>,
    pub name_candidates: Vec<NameCandidate>,
    pub notes: Vec<String>,
}

impl ExtractionResult {
    /// Record for a URL whose fetch failed before extraction could run.
    pub fn fetch_failure(url: &str, reason: &str) -> Self {
        Self {
            url: url.to_string(),
            socials: Vec::new(),
            emails: Vec::new(),
            phones: Vec::new(),
            name_candidates: Vec::new(),
            notes: vec![format!("fetch failed: {reason}")],
        }
    }
}

/// Display form as found on the page, plus the digit-normalized form
/// (leading `+` kept) used for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub original: String,
    pub normalized: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameCandidate {
    pub value: String,
    pub confidence: Confidence,
    /// Every source that produced this value.
    pub source: Vec<NameSource>,
}

/// Fixed heuristic tiers; derived `Ord` puts `High` last so candidates
/// sort with a reversed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Low,
    Medium,
    MediumHigh,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameSource {
    MetaAuthor,
    Title,
    Heading,
    AttributeHint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_expected_field_names() {
        let result = ExtractionResult {
            url: "https://example.com/".to_string(),
            socials: vec!["https://twitter.com/acme".to_string()],
            emails: vec!["jane@example.com".to_string()],
            phones: vec![PhoneNumber {
                original: "(415) 555-0134".to_string(),
                normalized: "4155550134".to_string(),
            }],
            name_candidates: vec![NameCandidate {
                value: "Jane Doe".to_string(),
                confidence: Confidence::High,
                source: vec![NameSource::MetaAuthor, NameSource::Heading],
            }],
            notes: vec![],
        };

        let value = serde_json::to_value(&result).unwrap();
        for key in ["url", "socials", "emails", "phones", "name_candidates", "notes"] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(value["phones"][0]["normalized"], "4155550134");
        assert_eq!(value["name_candidates"][0]["confidence"], "high");
        assert_eq!(value["name_candidates"][0]["source"][0], "meta-author");
    }

    #[test]
    fn confidence_tiers_are_ordered() {
        assert!(Confidence::High > Confidence::MediumHigh);
        assert!(Confidence::MediumHigh > Confidence::Medium);
        assert!(Confidence::Medium > Confidence::Low);
    }

    #[test]
    fn fetch_failure_record_is_empty_apart_from_the_note() {
        let result = ExtractionResult::fetch_failure("https://down.example", "connection refused");
        assert!(result.socials.is_empty());
        assert!(result.emails.is_empty());
        assert!(result.phones.is_empty());
        assert!(result.name_candidates.is_empty());
        assert_eq!(result.notes, vec!["fetch failed: connection refused"]);
    }
}
