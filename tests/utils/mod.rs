//! Shared helpers for the integration tests
#![allow(dead_code)]

use prosopo_csv::{ConversionSummary, ConverterConfig, MemorySink, PersonographyConverter};

/// Wrap person elements in a minimal TEI document with one person list
#[must_use]
pub fn tei_document(persons: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <teiHeader><fileDesc><titleStmt><title>Test personography</title></titleStmt></fileDesc></teiHeader>
  <text>
    <body>
      <listPerson>
{persons}
      </listPerson>
    </body>
  </text>
</TEI>"#
    )
}

/// Converter configuration for tests: no progress bar, minimal quoting
#[must_use]
pub fn test_config() -> ConverterConfig {
    ConverterConfig::default()
        .with_progress(false)
        .with_quote_all(false)
}

/// Convert a document into in-memory rows
pub fn extract(xml: &str) -> (MemorySink, ConversionSummary) {
    PersonographyConverter::new(test_config())
        .unwrap()
        .extract(xml)
        .unwrap()
}

/// Convert a document into the text of both CSV tables
pub fn convert_to_strings(xml: &str, config: ConverterConfig) -> (String, String) {
    let mut agents = Vec::new();
    let mut relationships = Vec::new();
    PersonographyConverter::new(config)
        .unwrap()
        .convert_str(xml, &mut agents, &mut relationships)
        .unwrap();
    (
        String::from_utf8(agents).unwrap(),
        String::from_utf8(relationships).unwrap(),
    )
}

/// Relationship rows as `(source, target, label)` tuples
#[must_use]
pub fn relationship_triples(sink: &MemorySink) -> Vec<(&str, &str, &str)> {
    sink.relationships
        .iter()
        .map(|r| (r.source.as_str(), r.target.as_str(), r.label.as_str()))
        .collect()
}
