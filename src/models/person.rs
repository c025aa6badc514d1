//! Read-only view over one TEI `person` element
//!
//! Sub-structures of a person are reached through path queries over TEI-namespaced
//! element names, so callers never walk the raw tree themselves.

use roxmltree::Node;

use crate::error::{ConvertError, Result};
use crate::models::relationship::RelationshipDeclaration;

/// TEI namespace URI
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";

/// XML namespace URI (for `xml:id`)
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Element paths below `person`, as sequences of TEI local names
pub mod paths {
    pub const SURNAME: &[&str] = &["persName", "surname"];
    pub const FORENAME: &[&str] = &["persName", "forename"];
    pub const ALTERNATE_NAMES: &[&str] = &["persName", "rs"];
    pub const SEX: &[&str] = &["sex"];
    pub const BIRTH: &[&str] = &["birth"];
    pub const DEATH: &[&str] = &["death"];
    pub const NOTES: &[&str] = &["note"];
    pub const REFERENCES: &[&str] = &["listBibl", "bibl", "ref"];
    pub const RELATIONS: &[&str] = &["note", "listRelation", "relation"];
}

/// Whether a node is the TEI element with the given local name
#[must_use]
pub fn is_tei_element(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(TEI_NS)
}

/// Text before the first child element, or an empty string
#[must_use]
pub fn leading_text<'a>(node: &Node<'a, '_>) -> &'a str {
    node.text().unwrap_or_default()
}

/// Concatenated direct text children of a node, ignoring text inside child elements
#[must_use]
pub fn own_text(node: &Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|child| child.text())
        .collect()
}

/// One person record from the person list
#[derive(Debug, Clone, Copy)]
pub struct PersonRecord<'a, 'input> {
    node: Node<'a, 'input>,
    id: &'a str,
    position: usize,
}

impl<'a, 'input> PersonRecord<'a, 'input> {
    /// Wrap a `person` element
    ///
    /// `position` is the 1-based index of the person within its list and is only
    /// used for error reporting.
    pub fn from_node(node: Node<'a, 'input>, position: usize) -> Result<Self> {
        let id = node
            .attribute((XML_NS, "id"))
            .ok_or(ConvertError::MissingIdentifier { position })?;
        Ok(Self { node, id, position })
    }

    /// The person's `xml:id`
    #[must_use]
    pub fn xml_id(&self) -> &'a str {
        self.id
    }

    /// 1-based position within the person list
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// First descendant element reached by following `path`
    #[must_use]
    pub fn find(&self, path: &[&str]) -> Option<Node<'a, 'input>> {
        self.find_all(path).into_iter().next()
    }

    /// All descendant elements reached by following `path`, in document order
    #[must_use]
    pub fn find_all(&self, path: &[&str]) -> Vec<Node<'a, 'input>> {
        let mut found = Vec::new();
        collect_path(self.node, path, &mut found);
        found
    }

    /// Leading text of the first element at `path`, or an empty string
    #[must_use]
    pub fn text_at(&self, path: &[&str]) -> &'a str {
        self.find(path).map(|node| leading_text(&node)).unwrap_or_default()
    }

    /// Relationship declarations nested in this person's notes
    #[must_use]
    pub fn relationship_declarations(&self) -> Vec<RelationshipDeclaration> {
        self.find_all(paths::RELATIONS)
            .iter()
            .map(RelationshipDeclaration::from_node)
            .collect()
    }
}

fn collect_path<'a, 'input>(
    node: Node<'a, 'input>,
    path: &[&str],
    found: &mut Vec<Node<'a, 'input>>,
) {
    match path.split_first() {
        None => found.push(node),
        Some((step, rest)) => {
            for child in node.children().filter(|c| is_tei_element(c, step)) {
                collect_path(child, rest, found);
            }
        }
    }
}
