//! Conversion of a whole personography document
//!
//! Persons are visited strictly in document order. Each agent row is handed to the
//! sink as soon as it is extracted, while relationships are accumulated and only
//! handed over after the last person, since inverse suppression depends on the
//! persons seen so far.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use roxmltree::Document;
use rustc_hash::FxHashSet;

use crate::algorithm::relations::{RelationshipSet, ResolveStats, resolve};
use crate::config::{ConverterConfig, OutputPaths};
use crate::error::Result;
use crate::error::util::{safe_create_file, safe_read_to_string};
use crate::models::agent::AgentRow;
use crate::models::person::PersonRecord;
use crate::models::relationship::RelationshipRecord;
use crate::reader;
use crate::schema::extract_agent_row;
use crate::utils::logging::{
    create_main_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
    log_summary, log_warning,
};
use crate::writer::{CsvSink, RowSink};

/// Counts describing a finished conversion
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Agent rows written
    pub persons: usize,
    /// Relationship rows written
    pub relationships: usize,
    /// Persons whose `xml:id` was already used by an earlier person
    pub duplicate_ids: usize,
    /// Relationship resolution counters over all persons
    pub relations: ResolveStats,
}

/// Sink collecting rows in memory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    pub agents: Vec<AgentRow>,
    pub relationships: Vec<RelationshipRecord>,
}

impl RowSink for MemorySink {
    fn write_agent(&mut self, row: &AgentRow) -> Result<()> {
        self.agents.push(row.clone());
        Ok(())
    }

    fn write_relationships(&mut self, records: &[RelationshipRecord]) -> Result<()> {
        self.relationships.extend_from_slice(records);
        Ok(())
    }
}

/// Converts TEI personographies into agent and relationship tables
#[derive(Debug, Clone)]
pub struct PersonographyConverter {
    config: ConverterConfig,
}

impl PersonographyConverter {
    /// Create a converter, rejecting invalid configurations
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Agent row for one person
    #[must_use]
    pub fn agent_row(&self, person: &PersonRecord<'_, '_>) -> AgentRow {
        extract_agent_row(person, &self.config)
    }

    /// Walk every person of the document into `sink`
    pub fn walk(&self, doc: &Document<'_>, sink: &mut impl RowSink) -> Result<ConversionSummary> {
        if reader::person_list(doc).is_none() {
            log_warning("Document contains no listPerson element");
        }
        let persons = reader::persons(doc)?;

        let mut summary = ConversionSummary::default();
        let mut accumulated = RelationshipSet::new();
        let mut seen_ids = FxHashSet::default();

        let pb = create_main_progress_bar(
            persons.len() as u64,
            Some("Converting persons"),
            self.config.show_progress,
        );

        for person in &persons {
            if !seen_ids.insert(person.xml_id()) {
                warn!(
                    "Person #{} reuses xml:id '{}'",
                    person.position(),
                    person.xml_id()
                );
                summary.duplicate_ids += 1;
            }

            sink.write_agent(&self.agent_row(person))?;
            summary.persons += 1;

            let stats = resolve(person, &mut accumulated);
            summary.relations.absorb(stats);
            pb.inc(1);
        }

        finish_progress_bar(&pb, Some("Persons converted"));

        let records = accumulated.into_records();
        sink.write_relationships(&records)?;
        summary.relationships = records.len();

        Ok(summary)
    }

    /// Convert XML text, writing both tables as CSV
    pub fn convert_str<A: Write, R: Write>(
        &self,
        xml: &str,
        agents: A,
        relationships: R,
    ) -> Result<ConversionSummary> {
        let doc = reader::parse_document(xml)?;
        let mut sink = CsvSink::new(agents, relationships, &self.config)?;
        let summary = self.walk(&doc, &mut sink)?;
        sink.finish()?;
        Ok(summary)
    }

    /// Convert XML text into in-memory rows
    pub fn extract(&self, xml: &str) -> Result<(MemorySink, ConversionSummary)> {
        let doc = reader::parse_document(xml)?;
        let mut sink = MemorySink::default();
        let summary = self.walk(&doc, &mut sink)?;
        Ok((sink, summary))
    }

    /// Convert an XML file into the two CSV files named by `outputs`
    pub fn convert_file(&self, input: &Path, outputs: &OutputPaths) -> Result<ConversionSummary> {
        let start = Instant::now();
        log_operation_start("Reading personography", input);

        let xml = safe_read_to_string(input, "personography input")?;
        let agents = open_output(&outputs.agents, "agents table")?;
        let relationships = open_output(&outputs.relationships, "relationships table")?;

        let summary = self.convert_str(&xml, agents, relationships)?;

        log_operation_complete("wrote", &outputs.agents, summary.persons, None);
        log_operation_complete(
            "wrote",
            &outputs.relationships,
            summary.relationships,
            Some(start.elapsed()),
        );
        log_summary(&summary);
        info!("Conversion of {} finished", input.display());

        Ok(summary)
    }
}

fn open_output(path: &Path, purpose: &str) -> Result<BufWriter<File>> {
    safe_create_file(path, purpose).map(BufWriter::new)
}
