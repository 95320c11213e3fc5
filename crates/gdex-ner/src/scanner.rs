//! Gene-symbol mention scanner.
//!
//! Two patterns are recognised:
//! - explicit: a symbol token followed by a parenthesised HGNC identifier,
//!   e.g. "COL4A3 (HGNC:2204)"; the inline id is carried on the mention and
//!   wins over symbol lookup later.
//! - contextual: a bare token equal (case-sensitively) to an allowlisted
//!   symbol, unless an explicit match already covers that span.
//!
//! Mentions come back in document order. Zero mentions is a valid result.

use std::sync::OnceLock;

use regex::Regex;

use crate::symbols::SymbolSet;
use gdex_common::{GeneMention, Span};

/// Symbol token followed by "(... HGNC:nnn ...)". The span of interest is
/// the symbol token itself, not the parenthetical.
fn explicit_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([A-Z][A-Z0-9-]*)\s*\([^)]*HGNC:(\d+)[^)]*\)")
            .expect("explicit mention pattern must compile")
    })
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// True when `start..end` sits on token boundaries: "HERC2" must not match
/// inside "HERC22" or "SHERC2".
fn on_token_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !text[..start].chars().next_back().is_some_and(is_token_char);
    let after_ok = end == text.len() || !text[end..].chars().next().is_some_and(is_token_char);
    before_ok && after_ok
}

/// Scan `text` for gene mentions against the allowlist.
pub fn scan(text: &str, symbols: &SymbolSet) -> Vec<GeneMention> {
    let mut mentions: Vec<GeneMention> = Vec::new();

    for caps in explicit_pattern().captures_iter(text) {
        let (Some(token), Some(id)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Ok(hgnc_id) = id.as_str().parse::<u32>() else {
            continue;
        };
        mentions.push(GeneMention::explicit(
            token.as_str(),
            Span::new(token.start(), token.end()),
            hgnc_id,
        ));
    }

    let explicit_spans: Vec<Span> = mentions.iter().map(|m| m.span).collect();

    for mat in symbols.automaton().find_iter(text) {
        let span = Span::new(mat.start(), mat.end());
        if !on_token_boundary(text, span.start, span.end) {
            continue;
        }
        // explicit form wins over a contextual match at the same spot
        if explicit_spans.iter().any(|e| e.intersects(&span)) {
            continue;
        }
        mentions.push(GeneMention::contextual(&text[span.start..span.end], span));
    }

    mentions.sort_by_key(|m| (m.span.start, m.span.end));
    mentions
}
