//! Positional gene–disease association.
//!
//! A symmetric window of `window` characters (byte offsets) is centred on
//! each gene mention; every disease entity whose span intersects the window
//! counts as a hit. Hits are unioned across all of a gene's mentions and
//! deduplicated case-insensitively, first-seen casing kept. This is a
//! co-occurrence heuristic, not relation extraction: a disease inside the
//! window is associated whether or not the sentence actually links the two.

use gdex_common::{DiseaseMention, GeneMention, Span};

/// Characters of context searched on each side of a mention. PMC body text
/// runs ~120–150 characters per sentence once whitespace is collapsed, so
/// 300 reaches the mention's sentence plus one neighbour each way.
pub const DEFAULT_WINDOW: usize = 300;

/// The window around one mention, clamped to the document bounds.
pub fn window_around(mention: &GeneMention, window: usize, text_len: usize) -> Span {
    Span::new(
        mention.span.start.saturating_sub(window),
        mention.span.end.saturating_add(window).min(text_len),
    )
}

/// Disease hits whose span intersects the window around `mention`.
pub fn hits_near<'a>(
    mention: &GeneMention,
    window: usize,
    text_len: usize,
    entities: &'a [DiseaseMention],
) -> impl Iterator<Item = &'a DiseaseMention> {
    let w = window_around(mention, window, text_len);
    entities.iter().filter(move |e| e.span.intersects(&w))
}

/// Union of window hits for every mention of one gene, case-insensitively
/// deduplicated. Returned in first-hit document order.
pub fn collect_diseases(
    mentions: &[GeneMention],
    window: usize,
    text_len: usize,
    entities: &[DiseaseMention],
) -> Vec<String> {
    let mut diseases: Vec<String> = Vec::new();
    for mention in mentions {
        for hit in hits_near(mention, window, text_len, entities) {
            let name = hit.text.trim();
            if name.is_empty() {
                continue;
            }
            if !diseases.iter().any(|d| d.eq_ignore_ascii_case(name)) {
                diseases.push(name.to_string());
            }
        }
    }
    diseases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(start: usize, end: usize) -> GeneMention {
        GeneMention::contextual("RRAGD", Span::new(start, end))
    }

    fn entity(text: &str, start: usize, end: usize) -> DiseaseMention {
        DiseaseMention { text: text.to_string(), span: Span::new(start, end) }
    }

    #[test]
    fn test_window_is_clamped_to_document() {
        let w = window_around(&mention(5, 10), 300, 120);
        assert_eq!(w, Span::new(0, 120));
    }

    #[test]
    fn test_only_intersecting_entities_hit() {
        let entities = vec![entity("near", 30, 34), entity("far", 500, 503)];
        let hits: Vec<_> = hits_near(&mention(10, 15), 50, 600, &entities).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "near");
    }

    #[test]
    fn test_partial_overlap_at_window_edge_counts() {
        // window [0, 25); entity straddles the right edge
        let entities = vec![entity("edge", 24, 30)];
        let hits: Vec<_> = hits_near(&mention(10, 15), 10, 600, &entities).collect();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_widening_window_is_monotonic() {
        let entities = vec![
            entity("tubulopathy", 40, 51),
            entity("hypomagnesemia", 200, 214),
            entity("cardiomyopathy", 700, 714),
        ];
        let mentions = [mention(100, 105)];
        let mut previous: Vec<String> = Vec::new();
        for window in [10, 50, 100, 300, 800] {
            let current = collect_diseases(&mentions, window, 1000, &entities);
            assert!(
                previous.iter().all(|d| current.contains(d)),
                "window {window} lost a previous hit"
            );
            previous = current;
        }
        assert_eq!(previous.len(), 3);
    }

    #[test]
    fn test_union_across_mentions_deduplicates() {
        let entities = vec![
            entity("tubulopathy", 10, 21),
            entity("Tubulopathy", 400, 411),
            entity("hypokalemia", 420, 431),
        ];
        let mentions = [mention(5, 10), mention(395, 400)];
        let diseases = collect_diseases(&mentions, 50, 1000, &entities);
        assert_eq!(diseases, vec!["tubulopathy".to_string(), "hypokalemia".to_string()]);
    }
}
