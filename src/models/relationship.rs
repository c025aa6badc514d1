//! Relationship declarations as encoded in the source, and resolved relationship records

use roxmltree::Node;
use serde::Serialize;

/// Marker prefixed to participant references (`#p1`)
pub const ID_PREFIX_MARKER: char = '#';

/// Column headers of the relationships table
pub const RELATIONSHIP_HEADERS: [&str; 3] = ["Source", "Target", "Relationship Type"];

/// A `relation` element found in a person's notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipDeclaration {
    /// Relationship type name (`@name`)
    pub name: Option<String>,
    /// Symmetric participant list (`@mutual`)
    pub mutual: Option<String>,
    /// Participants that are the relationship target (`@active`)
    pub active: Option<String>,
    /// Participants that are the relationship source (`@passive`)
    pub passive: Option<String>,
}

/// How a declaration encodes its participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipShape {
    /// Every participant relates to every other
    Mutual(Vec<String>),
    /// Every passive participant relates to every active participant
    Directed {
        active: Vec<String>,
        passive: Vec<String>,
    },
    /// Neither a mutual list nor an active/passive pair
    Unrecognized,
}

impl RelationshipDeclaration {
    /// Read the declaration attributes from a `relation` element
    #[must_use]
    pub fn from_node(node: &Node<'_, '_>) -> Self {
        let attr = |name: &str| node.attribute(name).map(str::to_owned);
        Self {
            name: attr("name"),
            mutual: attr("mutual"),
            active: attr("active"),
            passive: attr("passive"),
        }
    }

    /// A declaration with a type name and no participants
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the mutual participant list
    #[must_use]
    pub fn with_mutual(mut self, mutual: impl Into<String>) -> Self {
        self.mutual = Some(mutual.into());
        self
    }

    /// Set the active and passive participant lists
    #[must_use]
    pub fn with_directed(mut self, active: impl Into<String>, passive: impl Into<String>) -> Self {
        self.active = Some(active.into());
        self.passive = Some(passive.into());
        self
    }

    /// Classify the participant encoding; `@mutual` takes precedence
    #[must_use]
    pub fn shape(&self) -> RelationshipShape {
        match (&self.mutual, &self.active, &self.passive) {
            (Some(mutual), _, _) => RelationshipShape::Mutual(parse_participants(mutual)),
            (None, Some(active), Some(passive)) => RelationshipShape::Directed {
                active: parse_participants(active),
                passive: parse_participants(passive),
            },
            _ => RelationshipShape::Unrecognized,
        }
    }
}

/// Split a whitespace-separated participant list into bare identifiers
#[must_use]
pub fn parse_participants(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .map(|token| token.trim_start_matches(ID_PREFIX_MARKER))
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// One row of the relationships table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelationshipRecord {
    pub source: String,
    pub target: String,
    pub label: String,
}

impl RelationshipRecord {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}
