//! JATS full-text XML → plain body text.
//!
//! Only descendant text of the `<body>` element is collected; front-matter
//! (title, authors, abstract) and back-matter (references, acknowledgements)
//! are excluded. Whitespace runs are collapsed to single spaces so mention
//! offsets are stable across formatting differences between articles.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

use gdex_common::Result;

/// Extract the plain text of the `<body>` section of a JATS document.
///
/// Returns an empty string when the document has no `<body>` (e.g. an
/// abstract-only record); the caller treats that as zero mentions, not an
/// error.
pub fn extract_body_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut body_depth = 0usize;
    let mut pieces: Vec<String> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if e.local_name().as_ref() == b"body" || body_depth > 0 {
                    body_depth += 1;
                }
            }
            Ok(Event::Text(ref e)) => {
                if body_depth > 0 {
                    let text = e.unescape().unwrap_or_default();
                    if !text.is_empty() {
                        pieces.push(text.into_owned());
                    }
                }
            }
            Ok(Event::End(_)) => {
                body_depth = body_depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!("XML parse error: {}", e);
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(normalize_whitespace(&pieces.join(" ")))
}

/// Collapse all whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_JATS: &str = r#"<?xml version="1.0"?>
<article>
  <front>
    <article-meta>
      <title-group><article-title>Variants in RRAGD</article-title></title-group>
      <abstract><p>Abstract text stays out.</p></abstract>
    </article-meta>
  </front>
  <body>
    <sec>
      <title>Introduction</title>
      <p>RRAGD variants cause   a novel
      tubulopathy.</p>
    </sec>
  </body>
  <back>
    <ref-list><ref>Reference stays out.</ref></ref-list>
  </back>
</article>"#;

    #[test]
    fn test_extracts_only_body_text() {
        let text = extract_body_text(MINIMAL_JATS).unwrap();
        assert_eq!(text, "Introduction RRAGD variants cause a novel tubulopathy.");
        assert!(!text.contains("Abstract"));
        assert!(!text.contains("Reference"));
    }

    #[test]
    fn test_no_body_yields_empty_string() {
        let xml = "<article><front><article-title>Only a title</article-title></front></article>";
        assert_eq!(extract_body_text(xml).unwrap(), "");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = "<article><body><p>TP53 &amp; MDM2</p></body></article>";
        assert_eq!(extract_body_text(xml).unwrap(), "TP53 & MDM2");
    }
}
