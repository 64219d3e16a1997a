//! Text extraction from transcript XML.
//!
//! Extraction is split in two: a [`MarkupParser`] recovers the raw text nodes of a
//! document, and [`TextExtractor`] normalizes whitespace and enforces the character
//! budget. The default parser, [`RecoveringXmlParser`], accepts the kind of damaged
//! markup found in real transcript dumps and never resolves DTD or external entities.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use quick_xml::{
    Reader,
    encoding::Decoder,
    escape::{resolve_predefined_entity, unescape_with},
    events::Event,
};

use crate::ExtractError;

/// Appended to text cut at the character budget.
pub const TRUNCATION_MARKER: &str = " ...";

/// Text recovered from one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Recovered text.
    pub text: String,
    /// The syntax error that ended parsing early, if any.
    ///
    /// When set, `text` holds only the content read before the error.
    pub recovered_error: Option<String>,
}

impl Extraction {
    /// Returns true if parsing stopped before the end of the document.
    pub fn is_partial(&self) -> bool {
        self.recovered_error.is_some()
    }
}

/// Recovers text content from markup.
pub trait MarkupParser {
    /// Returns every text-bearing node of the root element, in document order,
    /// joined by single spaces.
    ///
    /// Fails only when no document structure can be recovered at all.
    fn parse(&self, bytes: &[u8]) -> Result<Extraction, ExtractError>;
}

/// A lenient XML parser built on quick-xml.
///
/// Recovery behaviour:
/// - mismatched and unmatched end tags are accepted
/// - predefined and numeric character references are decoded; any other entity
///   reference is dropped, never expanded
/// - a syntax error after the first element ends parsing, keeping the text read so
///   far and reporting the error in [`Extraction::recovered_error`]
/// - content after the root element closes is ignored
/// - there is no nesting depth limit
///
/// Text is decoded with the encoding named by the BOM or the XML declaration.
/// UTF-16 input must carry a BOM. DOCTYPE declarations are skipped without being
/// interpreted, so internal and external entity definitions have no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveringXmlParser;

impl MarkupParser for RecoveringXmlParser {
    fn parse(&self, bytes: &[u8]) -> Result<Extraction, ExtractError> {
        let transcoded = transcode_utf16(bytes);
        let source = transcoded.as_deref().map_or(bytes, str::as_bytes);

        let mut reader = Reader::from_reader(source);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.check_comments = false;

        let mut buf = Vec::new();
        let mut pieces: Vec<String> = Vec::new();
        let mut seen_element = false;
        let mut depth = 0usize;
        let mut recovered_error = None;

        loop {
            // Transcoded input is already UTF-8 whatever its declaration says.
            let decoder = transcoded.is_none().then(|| reader.decoder());
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(_)) => {
                    seen_element = true;
                    depth += 1;
                }
                Ok(Event::Empty(_)) => {
                    seen_element = true;
                    if depth == 0 {
                        break;
                    }
                }
                Ok(Event::End(_)) => {
                    depth = depth.saturating_sub(1);
                    if seen_element && depth == 0 {
                        break;
                    }
                }
                Ok(Event::Text(text)) if seen_element => {
                    pieces.push(unescape_text(&decode(decoder, &text)));
                }
                Ok(Event::CData(cdata)) if seen_element => pieces.push(decode(decoder, &cdata)),
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) if seen_element => {
                    recovered_error = Some(format!("{e} (at byte {})", reader.buffer_position()));
                    break;
                }
                Err(e) => {
                    return Err(ExtractError::Malformed {
                        message: format!("{e} (at byte {})", reader.buffer_position()),
                    });
                }
            }
            buf.clear();
        }

        if !seen_element {
            return Err(ExtractError::NoRootElement);
        }

        Ok(Extraction {
            text: pieces.join(" "),
            recovered_error,
        })
    }
}

/// Converts BOM-marked UTF-16 input to UTF-8.
///
/// Returns `None` for every other input, which the reader decodes itself.
fn transcode_utf16(bytes: &[u8]) -> Option<String> {
    let (encoding, _) = Encoding::for_bom(bytes)?;
    if encoding != UTF_16LE && encoding != UTF_16BE {
        return None;
    }
    let (text, _) = encoding.decode_with_bom_removal(bytes);
    Some(text.into_owned())
}

/// Decodes raw event content, replacing sequences the encoding cannot represent.
fn decode(decoder: Option<Decoder>, raw: &[u8]) -> String {
    match decoder.map(|d| d.decode(raw)) {
        Some(Ok(text)) => text.into_owned(),
        _ => String::from_utf8_lossy(raw).into_owned(),
    }
}

/// Resolves predefined entities and drops every other named reference.
fn resolve_or_drop(entity: &str) -> Option<&'static str> {
    resolve_predefined_entity(entity).or(Some(""))
}

/// Decodes character and entity references in a text node.
fn unescape_text(raw: &str) -> String {
    if let Ok(text) = unescape_with(raw, resolve_or_drop) {
        return text.into_owned();
    }

    // A bare `&` or a bad character reference fails the whole node, so resolve
    // references one at a time and keep stray ampersands literally.
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail[1..].find(|c: char| c == ';' || c == '&' || c.is_whitespace()) {
            Some(end) if tail.as_bytes()[end + 1] == b';' => {
                let reference = &tail[..end + 2];
                if let Ok(value) = unescape_with(reference, resolve_or_drop) {
                    out.push_str(&value);
                }
                rest = &tail[end + 2..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Flattens documents into bounded, whitespace-normalized text.
#[derive(Debug, Clone)]
pub struct TextExtractor<P = RecoveringXmlParser> {
    /// Markup recovery strategy.
    parser: P,
    /// Character budget before truncation.
    max_chars: usize,
}

impl TextExtractor {
    /// Creates an extractor using [`RecoveringXmlParser`].
    pub fn new(max_chars: usize) -> Self {
        Self::with_parser(RecoveringXmlParser, max_chars)
    }
}

impl<P: MarkupParser> TextExtractor<P> {
    /// Creates an extractor with a custom parser.
    pub fn with_parser(parser: P, max_chars: usize) -> Self {
        Self { parser, max_chars }
    }

    /// Extracts normalized text from a document.
    ///
    /// Text longer than the budget is cut at exactly `max_chars` characters and
    /// [`TRUNCATION_MARKER`] is appended. A recovered syntax error is passed through.
    pub fn extract(&self, bytes: &[u8]) -> Result<Extraction, ExtractError> {
        let parsed = self.parser.parse(bytes)?;
        Ok(Extraction {
            text: truncate_with_marker(normalize_whitespace(&parsed.text), self.max_chars),
            recovered_error: parsed.recovered_error,
        })
    }
}

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `text` to `max_chars` characters and appends the marker if it was longer.
pub fn truncate_with_marker(mut text: String, max_chars: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(max_chars) {
        text.truncate(cut);
        text.push_str(TRUNCATION_MARKER);
    }
    text
}

#[cfg(test)]
mod test {
    use super::*;

    fn extract(xml: &[u8]) -> Result<Extraction, ExtractError> {
        TextExtractor::new(1_000).extract(xml)
    }

    fn parse(xml: &str) -> Result<String, ExtractError> {
        extract(xml.as_bytes()).map(|extraction| extraction.text)
    }

    #[test]
    fn flattens_text_nodes_in_document_order() {
        let xml = r#"<?xml version="1.0"?>
<hansard>
  <session date="2025-02-10">
    <speech><speaker>Senator SMITH</speaker><p>I rise   to speak.</p></speech>
    <speech><speaker>The PRESIDENT</speaker><p>Order!</p></speech>
  </session>
</hansard>"#;
        assert_eq!(
            parse(xml).unwrap(),
            "Senator SMITH I rise to speak. The PRESIDENT Order!"
        );
    }

    #[test]
    fn adjacent_elements_are_space_separated() {
        assert_eq!(parse("<a><b>one</b><b>two</b></a>").unwrap(), "one two");
    }

    #[test]
    fn includes_cdata_and_predefined_entities() {
        let xml = "<a>Fish &amp; chips <![CDATA[<raw> text]]></a>";
        assert_eq!(parse(xml).unwrap(), "Fish & chips <raw> text");
    }

    #[test]
    fn unknown_entities_do_not_block_predefined_ones() {
        let xml = "<a>Fish &amp; chips &nbsp; now</a>";
        assert_eq!(parse(xml).unwrap(), "Fish & chips now");
    }

    #[test]
    fn character_references_and_stray_ampersands() {
        let xml = "<a>caf&#233; &#x2014; salt & vinegar &lt;ok&gt; &bogus;</a>";
        assert_eq!(parse(xml).unwrap(), "café \u{2014} salt & vinegar <ok>");
    }

    #[test]
    fn honours_declared_single_byte_encoding() {
        let xml = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>caf\xE9 debate</a>";
        assert_eq!(extract(xml).unwrap().text, "café debate");
    }

    #[test]
    fn transcodes_utf16_with_bom() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-16\"?><a>Senate débat</a>";
        let mut little_endian = vec![0xFF, 0xFE];
        little_endian.extend(xml.encode_utf16().flat_map(u16::to_le_bytes));
        assert_eq!(extract(&little_endian).unwrap().text, "Senate débat");

        let mut big_endian = vec![0xFE, 0xFF];
        big_endian.extend("<a>Senate debate</a>".encode_utf16().flat_map(u16::to_be_bytes));
        assert_eq!(extract(&big_endian).unwrap().text, "Senate debate");
    }

    #[test]
    fn utf8_bom_is_skipped() {
        let xml = b"\xEF\xBB\xBF<a>Question time</a>";
        assert_eq!(extract(xml).unwrap().text, "Question time");
    }

    #[test]
    fn recovers_from_mismatched_end_tags() {
        let xml = "<a><b>kept</c> also kept</a></z>";
        let extraction = extract(xml.as_bytes()).unwrap();
        assert_eq!(extraction.text, "kept also kept");
        assert!(!extraction.is_partial());
    }

    #[test]
    fn recovers_text_before_truncated_markup() {
        let xml = "<a><p>complete paragraph</p><p attr=\"unterminated";
        let extraction = extract(xml.as_bytes()).unwrap();
        assert_eq!(extraction.text, "complete paragraph");
        assert!(extraction.is_partial());
    }

    #[test]
    fn syntax_error_mid_document_is_reported() {
        let extraction = extract(b"<a><p>one</p><!x><p>two</p></a>").unwrap();
        assert_eq!(extraction.text, "one");
        let error = extraction.recovered_error.unwrap();
        assert!(error.contains("at byte"), "{error}");
    }

    #[test]
    fn well_formed_document_is_not_partial() {
        let extraction = extract(b"<a><p>one</p><p>two</p></a>").unwrap();
        assert_eq!(extraction.recovered_error, None);
    }

    #[test]
    fn content_after_root_is_ignored() {
        let extraction = extract(b"<a>x</a><b>y</b> trailing <").unwrap();
        assert_eq!(extraction.text, "x");
        assert!(!extraction.is_partial());
        assert_eq!(parse("<a/><b>second root</b>").unwrap(), "");
    }

    #[test]
    fn entities_are_never_expanded() {
        let xml = r#"<!DOCTYPE a [
  <!ENTITY secret SYSTEM "file:///etc/passwd">
  <!ENTITY boom "boomboomboom">
]>
<a>before &secret; &boom; after</a>"#;
        assert_eq!(parse(xml).unwrap(), "before after");
    }

    #[test]
    fn deep_nesting_is_accepted() {
        let depth = 5_000;
        let xml = format!("{}deep{}", "<n>".repeat(depth), "</n>".repeat(depth));
        assert_eq!(parse(&xml).unwrap(), "deep");
    }

    #[test]
    fn empty_input_has_no_root() {
        assert_eq!(parse(""), Err(ExtractError::NoRootElement));
        assert_eq!(parse("   \n"), Err(ExtractError::NoRootElement));
    }

    #[test]
    fn plain_text_has_no_root() {
        assert_eq!(
            parse("this is not xml at all"),
            Err(ExtractError::NoRootElement)
        );
    }

    #[test]
    fn element_without_text_is_empty_string() {
        assert_eq!(parse("<a><b/></a>").unwrap(), "");
    }

    #[test]
    fn truncates_to_budget_with_marker() {
        let budget = 10;
        let extractor = TextExtractor::new(budget);
        let xml = format!("<a>{}</a>", "abcdefghij".repeat(5));
        let text = extractor.extract(xml.as_bytes()).unwrap().text;

        assert_eq!(text.chars().count(), budget + TRUNCATION_MARKER.len());
        assert!(text.ends_with(" ..."));
        assert_eq!(text, "abcdefghij ...");
    }

    #[test]
    fn text_at_budget_is_untouched() {
        let extractor = TextExtractor::new(5);
        assert_eq!(extractor.extract(b"<a>hello</a>").unwrap().text, "hello");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let truncated = truncate_with_marker("ééééé".to_string(), 3);
        assert_eq!(truncated, "ééé ...");
    }

    #[test]
    fn normalize_collapses_and_trims() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace(""), "");
    }

    /// Parser that always fails, for checking error propagation.
    struct RejectingParser;

    impl MarkupParser for RejectingParser {
        fn parse(&self, _bytes: &[u8]) -> Result<Extraction, ExtractError> {
            Err(ExtractError::Malformed {
                message: "rejected".to_string(),
            })
        }
    }

    #[test]
    fn custom_parser_errors_propagate() {
        let extractor = TextExtractor::with_parser(RejectingParser, 10);
        assert!(matches!(
            extractor.extract(b"<a/>"),
            Err(ExtractError::Malformed { .. })
        ));
    }
}
