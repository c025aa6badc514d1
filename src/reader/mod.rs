//! Module for reading TEI personography documents.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Result;
use crate::models::person::{PersonRecord, is_tei_element};

/// Parse XML text into a document tree
///
/// Document type declarations are allowed since TEI files often carry one.
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(text, options)?)
}

/// The first `listPerson` element of the document, in document order
#[must_use]
pub fn person_list<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    doc.descendants().find(|node| is_tei_element(node, "listPerson"))
}

/// The direct `person` children of the first `listPerson`, in document order
///
/// Returns an empty list when the document has no person list. Fails on the first
/// person without an `xml:id`.
pub fn persons<'a, 'input>(doc: &'a Document<'input>) -> Result<Vec<PersonRecord<'a, 'input>>> {
    let Some(list) = person_list(doc) else {
        return Ok(Vec::new());
    };

    list.children()
        .filter(|node| is_tei_element(node, "person"))
        .enumerate()
        .map(|(i, node)| PersonRecord::from_node(node, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <text><body>
    <listPerson>
      <person xml:id="p1"/>
      <note>not a person</note>
      <person xml:id="p2"><listPerson><person xml:id="nested"/></listPerson></person>
    </listPerson>
    <listPerson>
      <person xml:id="second-list"/>
    </listPerson>
  </body></text>
</TEI>"#;

    #[test]
    fn test_only_first_list_direct_children() {
        let doc = parse_document(DOC).unwrap();
        let ids: Vec<_> = persons(&doc).unwrap().iter().map(PersonRecord::xml_id).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_no_person_list() {
        let doc = parse_document(r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"/>"#).unwrap();
        assert!(persons(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_xml_is_error() {
        assert!(matches!(parse_document("<TEI><unclosed></TEI>"), Err(ConvertError::Xml(_))));
    }

    #[test]
    fn test_dtd_allowed() {
        let text = r#"<!DOCTYPE TEI [<!ENTITY h "Hamilton">]>
<TEI xmlns="http://www.tei-c.org/ns/1.0"><listPerson><person xml:id="p1"/></listPerson></TEI>"#;
        let doc = parse_document(text).unwrap();
        assert_eq!(persons(&doc).unwrap().len(), 1);
    }
}
