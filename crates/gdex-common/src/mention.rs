//! Mention types produced by scanning and disease NER.
//!
//! Both are ephemeral: created while a single article is processed and
//! discarded once the per-gene records have been assembled.

use serde::{Deserialize, Serialize};

/// Byte-offset span into the article text. Half-open: `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A single gene-symbol occurrence in the article text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneMention {
    pub symbol: String,
    pub span: Span,
    /// HGNC id given inline in the text, e.g. "COL4A3 (HGNC:2204)".
    /// Wins over symbol-based lookup during enrichment.
    pub hgnc_id: Option<u32>,
}

impl GeneMention {
    pub fn contextual(symbol: impl Into<String>, span: Span) -> Self {
        Self { symbol: symbol.into(), span, hgnc_id: None }
    }

    pub fn explicit(symbol: impl Into<String>, span: Span, hgnc_id: u32) -> Self {
        Self { symbol: symbol.into(), span, hgnc_id: Some(hgnc_id) }
    }
}

/// A disease entity emitted by the NER capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseMention {
    pub text: String,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_intersection() {
        let a = Span::new(10, 20);
        assert!(a.intersects(&Span::new(15, 25)));
        assert!(a.intersects(&Span::new(0, 11)));
        assert!(a.intersects(&Span::new(12, 14)));
        // Half-open: touching spans do not intersect
        assert!(!a.intersects(&Span::new(20, 30)));
        assert!(!a.intersects(&Span::new(0, 10)));
    }
}
