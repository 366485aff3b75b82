//! Link extraction from markup documents
//!
//! One parse pass over the document, three scans:
//! - every anchor href
//! - every script src
//! - every link/anchor/iframe href whose resolved form ends in ".php",
//!   since server-side markup references are not always reachable via the
//!   plain anchor scan
//!
//! All candidates are resolved against the current address; anything
//! unparseable or without an authority is dropped. Malformed markup
//! degrades to "fewer links found", never an error.

use crate::url::resolve;
use scraper::{Html, Selector};
use url::Url;

/// Extracts candidate addresses from a markup document
///
/// Returns candidates in document order across the three scans. The same
/// address can appear more than once (the anchor scan and the ".php"
/// re-scan overlap by design); deduplication is the visited set's job.
pub fn extract_candidates(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for element in document.select(&anchor_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(url) = resolve(base, href) {
                    candidates.push(url);
                }
            }
        }
    }

    if let Ok(script_selector) = Selector::parse("script[src]") {
        for element in document.select(&script_selector) {
            if let Some(src) = element.value().attr("src") {
                if let Some(url) = resolve(base, src) {
                    candidates.push(url);
                }
            }
        }
    }

    if let Ok(markup_selector) = Selector::parse("link[href], a[href], iframe[href]") {
        for element in document.select(&markup_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(url) = resolve(base, href) {
                    if url.as_str().ends_with(".php") {
                        candidates.push(url);
                    }
                }
            }
        }
    }

    candidates
}
