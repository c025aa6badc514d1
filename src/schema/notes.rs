//! Aggregation of research notes into a single cell

use itertools::Itertools;
use roxmltree::Node;

use crate::config::ConverterConfig;
use crate::models::person::{leading_text, own_text};

/// Format a single note, or `None` when it has no text of its own
///
/// Only the note's direct text is used; line breaks are replaced by `line_break_marker`
/// so that multi-line notes stay within one CSV cell.
#[must_use]
pub fn format_note(note_type: Option<&str>, text: &str, line_break_marker: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let text = text.lines().join(line_break_marker);
    Some(match note_type {
        Some(note_type) => format!("{note_type}: {text}"),
        None => text,
    })
}

/// Concatenate all non-empty notes with the multi-value delimiter
///
/// A note is kept only when the text before its first child element is non-blank;
/// its content is then the concatenation of all its direct text nodes.
#[must_use]
pub fn aggregate_notes(notes: &[Node<'_, '_>], config: &ConverterConfig) -> String {
    config.join(
        notes
            .iter()
            .filter(|note| !leading_text(note).trim().is_empty())
            .filter_map(|note| {
                format_note(note.attribute("type"), &own_text(note), &config.line_break_marker)
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_typed_and_untyped_notes() {
        let doc = Document::parse(
            r#"<person>
                <note type="biographical">Born in York</note>
                <note>Uncertain</note>
            </person>"#,
        )
        .unwrap();
        let notes: Vec<_> = doc.root_element().children().filter(Node::is_element).collect();

        assert_eq!(
            aggregate_notes(&notes, &ConverterConfig::default()),
            "biographical: Born in York$Uncertain"
        );
    }

    #[test]
    fn test_whitespace_notes_dropped() {
        let doc = Document::parse(
            r#"<person>
                <note type="relations">
                    <listRelation><relation name="sibling" mutual="a b"/></listRelation>
                </note>
            </person>"#,
        )
        .unwrap();
        let notes: Vec<_> = doc.root_element().children().filter(Node::is_element).collect();

        assert_eq!(aggregate_notes(&notes, &ConverterConfig::default()), "");
    }

    #[test]
    fn test_note_without_leading_text_dropped() {
        let doc = Document::parse(
            r#"<person>
                <note type="general"><hi>x</hi> tail</note>
                <note type="biographical">Born <hi>in</hi> York</note>
            </person>"#,
        )
        .unwrap();
        let notes: Vec<_> = doc.root_element().children().filter(Node::is_element).collect();

        assert_eq!(
            aggregate_notes(&notes, &ConverterConfig::default()),
            "biographical: Born  York"
        );
    }

    #[test]
    fn test_line_breaks_replaced() {
        assert_eq!(
            format_note(None, "\n  First line\nsecond line\n", "<br/>").as_deref(),
            Some("First line<br/>second line")
        );
    }

    #[test]
    fn test_empty_note() {
        assert_eq!(format_note(Some("general"), "  \n ", "<br/>"), None);
    }
}
