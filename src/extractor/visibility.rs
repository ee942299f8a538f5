use scraper::node::Element;
use scraper::{ElementRef, Html};

/// Tags whose subtree never renders in a browser.
pub const EXCLUDED_TAGS: &[&str] = &["script", "style", "noscript", "template", "iframe"];

/// Whitespace-collapsed concatenation of every text node that survives
/// the visibility filter. This is the corpus the email and phone regexes
/// run against.
pub fn visible_text(document: &Html) -> String {
    let mut pieces = Vec::new();
    collect_text(document.root_element(), &mut pieces);
    pieces
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn collect_text(element: ElementRef, pieces: &mut Vec<String>) {
    if is_excluded(element.value()) {
        return;
    }

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pieces.push(trimmed.to_string());
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, pieces);
        }
    }
}

/// True when neither the element itself nor any ancestor is excluded or
/// inline-hidden. An excluded ancestor hides the whole subtree.
pub fn is_visible(element: &ElementRef) -> bool {
    if is_excluded(element.value()) {
        return false;
    }
    for ancestor in element.ancestors() {
        if let Some(el) = ElementRef::wrap(ancestor) {
            if is_excluded(el.value()) {
                return false;
            }
        }
    }
    true
}

fn is_excluded(element: &Element) -> bool {
    EXCLUDED_TAGS.contains(&element.name()) || is_inline_hidden(element)
}

fn is_inline_hidden(element: &Element) -> bool {
    if let Some(style) = element.attr("style") {
        let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.to_lowercase().contains("display:none") {
            return true;
        }
    }

    element.attr("aria-hidden") == Some("true") || element.attr("hidden").is_some()
}
