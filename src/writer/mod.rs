//! CSV output for the agents and relationships tables
//!
//! Both tables use `\n` row terminators and double-quote escaping. With `quote_all`
//! every field is quoted, as Heurist's importer receives from the `unix` CSV dialect.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::ConverterConfig;
use crate::error::Result;
use crate::models::agent::AgentRow;
use crate::models::relationship::{RELATIONSHIP_HEADERS, RelationshipRecord};
use crate::schema::agent_headers;

fn builder(config: &ConverterConfig) -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(if config.quote_all {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        });
    builder
}

/// Writer for the agents table
pub struct AgentWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> AgentWriter<W> {
    /// Create the writer and emit the header row
    pub fn new(writer: W, config: &ConverterConfig) -> Result<Self> {
        let mut inner = builder(config).from_writer(writer);
        inner.write_record(agent_headers())?;
        Ok(Self { inner, rows: 0 })
    }

    /// Write one agent row
    pub fn write_row(&mut self, row: &AgentRow) -> Result<()> {
        self.inner.write_record(row.values())?;
        self.rows += 1;
        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush()?;
        Ok(self.rows)
    }
}

/// Writer for the relationships table
pub struct RelationshipWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> RelationshipWriter<W> {
    /// Create the writer and emit the header row
    pub fn new(writer: W, config: &ConverterConfig) -> Result<Self> {
        let mut inner = builder(config).from_writer(writer);
        inner.write_record(RELATIONSHIP_HEADERS)?;
        Ok(Self { inner, rows: 0 })
    }

    /// Write relationship records in the given order
    pub fn write_all<'r>(
        &mut self,
        records: impl IntoIterator<Item = &'r RelationshipRecord>,
    ) -> Result<()> {
        for record in records {
            self.inner.serialize(record)?;
            self.rows += 1;
        }
        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush()?;
        Ok(self.rows)
    }
}

/// Destination for the rows produced by a conversion
pub trait RowSink {
    /// Receive one agent row, in document order
    fn write_agent(&mut self, row: &AgentRow) -> Result<()>;

    /// Receive all relationship rows once the person scan is complete
    fn write_relationships(&mut self, records: &[RelationshipRecord]) -> Result<()>;
}

/// Sink writing both tables as CSV
pub struct CsvSink<A: Write, R: Write> {
    agents: AgentWriter<A>,
    relationships: RelationshipWriter<R>,
}

impl<A: Write, R: Write> CsvSink<A, R> {
    /// Create both writers and emit their header rows
    pub fn new(agents: A, relationships: R, config: &ConverterConfig) -> Result<Self> {
        Ok(Self {
            agents: AgentWriter::new(agents, config)?,
            relationships: RelationshipWriter::new(relationships, config)?,
        })
    }

    /// Flush both tables, returning the agent and relationship row counts
    pub fn finish(self) -> Result<(usize, usize)> {
        Ok((self.agents.finish()?, self.relationships.finish()?))
    }
}

impl<A: Write, R: Write> RowSink for CsvSink<A, R> {
    fn write_agent(&mut self, row: &AgentRow) -> Result<()> {
        self.agents.write_row(row)
    }

    fn write_relationships(&mut self, records: &[RelationshipRecord]) -> Result<()> {
        self.relationships.write_all(records)
    }
}
