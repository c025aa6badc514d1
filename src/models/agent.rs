//! Agent rows: one flat, string-valued row per person

/// A fully resolved row of the agents table
///
/// Values are kept in output field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRow {
    fields: Vec<(&'static str, String)>,
}

impl AgentRow {
    #[must_use]
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        Self { fields }
    }

    /// Value of a named field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Field names in output order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Values in output order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
