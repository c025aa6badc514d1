//! Declarative mapping from person records to agent table fields
//!
//! Each output column is paired with the function that extracts its value. The table
//! order is the column order of the agents CSV.

use crate::config::ConverterConfig;
use crate::models::agent::AgentRow;
use crate::models::person::{PersonRecord, leading_text, paths};
use crate::schema::date::normalize_date;
use crate::schema::notes::aggregate_notes;

/// Extraction function for one agent field
pub type FieldExtractor = fn(&PersonRecord<'_, '_>, &ConverterConfig) -> String;

/// An output field and how to fill it
#[derive(Clone, Copy)]
pub struct FieldMapping {
    /// Column header in the agents table
    pub name: &'static str,
    /// Extraction function
    pub extractor: FieldExtractor,
}

impl FieldMapping {
    /// Extract this field's value for a person
    #[must_use]
    pub fn extract(&self, person: &PersonRecord<'_, '_>, config: &ConverterConfig) -> String {
        (self.extractor)(person, config)
    }
}

impl std::fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldMapping").field("name", &self.name).finish()
    }
}

/// Agent fields in output order
pub static AGENT_FIELD_MAPPINGS: [FieldMapping; 9] = [
    FieldMapping { name: "XML ID", extractor: xml_id },
    FieldMapping { name: "Surname", extractor: surname },
    FieldMapping { name: "Forename", extractor: forename },
    FieldMapping { name: "Alternate Name(s) / title(s)", extractor: alternate_names },
    FieldMapping { name: "Gender", extractor: gender },
    FieldMapping { name: "Birth Date", extractor: birth_date },
    FieldMapping { name: "Death Date", extractor: death_date },
    FieldMapping { name: "Research Notes", extractor: research_notes },
    FieldMapping { name: "URL(s)", extractor: urls },
];

/// Column headers of the agents table
pub fn agent_headers() -> impl Iterator<Item = &'static str> {
    AGENT_FIELD_MAPPINGS.iter().map(|mapping| mapping.name)
}

/// Build the agent row for one person
#[must_use]
pub fn extract_agent_row(person: &PersonRecord<'_, '_>, config: &ConverterConfig) -> AgentRow {
    AgentRow::new(
        AGENT_FIELD_MAPPINGS
            .iter()
            .map(|mapping| (mapping.name, mapping.extract(person, config)))
            .collect(),
    )
}

fn xml_id(person: &PersonRecord<'_, '_>, _: &ConverterConfig) -> String {
    person.xml_id().to_string()
}

fn surname(person: &PersonRecord<'_, '_>, _: &ConverterConfig) -> String {
    person.text_at(paths::SURNAME).to_string()
}

fn forename(person: &PersonRecord<'_, '_>, _: &ConverterConfig) -> String {
    person.text_at(paths::FORENAME).to_string()
}

fn alternate_names(person: &PersonRecord<'_, '_>, config: &ConverterConfig) -> String {
    config.join(
        person
            .find_all(paths::ALTERNATE_NAMES)
            .iter()
            .map(leading_text),
    )
}

fn gender(person: &PersonRecord<'_, '_>, _: &ConverterConfig) -> String {
    person.text_at(paths::SEX).to_string()
}

fn birth_date(person: &PersonRecord<'_, '_>, _: &ConverterConfig) -> String {
    normalize_date(person.find(paths::BIRTH))
}

fn death_date(person: &PersonRecord<'_, '_>, _: &ConverterConfig) -> String {
    normalize_date(person.find(paths::DEATH))
}

fn research_notes(person: &PersonRecord<'_, '_>, config: &ConverterConfig) -> String {
    aggregate_notes(&person.find_all(paths::NOTES), config)
}

fn urls(person: &PersonRecord<'_, '_>, config: &ConverterConfig) -> String {
    config.join(
        person
            .find_all(paths::REFERENCES)
            .iter()
            .filter_map(|reference| reference.attribute("target")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn row_for(xml: &str) -> AgentRow {
        let doc = Document::parse(xml).unwrap();
        let person = PersonRecord::from_node(doc.root_element(), 1).unwrap();
        extract_agent_row(&person, &ConverterConfig::default())
    }

    #[test]
    fn test_header_order() {
        let headers: Vec<_> = agent_headers().collect();
        assert_eq!(headers.len(), 9);
        assert_eq!(headers[0], "XML ID");
        assert_eq!(headers[8], "URL(s)");
    }

    #[test]
    fn test_full_person() {
        let row = row_for(
            r#"<person xmlns="http://www.tei-c.org/ns/1.0" xml:id="HAM1">
                <persName>
                    <surname>Hamilton</surname>
                    <forename>Mary</forename>
                    <rs>Mrs Dickenson</rs>
                    <rs>Lady Mary</rs>
                </persName>
                <sex>F</sex>
                <birth when="1756-03-08"/>
                <death notBefore="1816"/>
                <note type="biographical">Courtier and diarist</note>
                <listBibl>
                    <bibl><ref target="https://example.org/a"/></bibl>
                    <bibl><ref target="https://example.org/b"/></bibl>
                </listBibl>
            </person>"#,
        );

        assert_eq!(row.get("XML ID"), Some("HAM1"));
        assert_eq!(row.get("Surname"), Some("Hamilton"));
        assert_eq!(row.get("Forename"), Some("Mary"));
        assert_eq!(row.get("Alternate Name(s) / title(s)"), Some("Mrs Dickenson$Lady Mary"));
        assert_eq!(row.get("Gender"), Some("F"));
        assert_eq!(row.get("Birth Date"), Some("1756-03-08"));
        assert_eq!(
            row.get("Death Date"),
            Some("[ |VER=1|TYP=p|TPQ=1816|TAQ=|DET=0|CLD=Gregorian|SPF=0|EPF=0 ]")
        );
        assert_eq!(row.get("Research Notes"), Some("biographical: Courtier and diarist"));
        assert_eq!(row.get("URL(s)"), Some("https://example.org/a$https://example.org/b"));
    }

    #[test]
    fn test_sparse_person_yields_empty_strings() {
        let row = row_for(r#"<person xmlns="http://www.tei-c.org/ns/1.0" xml:id="p2"/>"#);

        assert_eq!(row.len(), 9);
        assert_eq!(row.get("XML ID"), Some("p2"));
        for field in agent_headers().skip(1) {
            assert_eq!(row.get(field), Some(""), "field {field}");
        }
    }
}
