use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use prosopo_csv::config::{DEFAULT_INPUT, DEFAULT_OUTPUT_STUB};
use prosopo_csv::{ConverterConfig, OutputPaths, PersonographyConverter};

#[derive(Parser)]
#[command(name = "prosopo-csv")]
#[command(about = "Convert personography xml to csv", long_about = None)]
#[command(version)]
struct Cli {
    /// XML file to convert
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Filename stub for the created csvs: `<output>_agents.csv` and `<output>_relationships.csv`
    #[arg(short, long, default_value = DEFAULT_OUTPUT_STUB)]
    output: String,

    /// Do not display a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Quote fields only when necessary instead of quoting every field
    #[arg(long)]
    minimal_quoting: bool,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = ConverterConfig::default()
        .with_progress(!cli.no_progress)
        .with_quote_all(!cli.minimal_quoting);
    let converter = PersonographyConverter::new(config).context("Invalid converter configuration")?;

    let outputs = OutputPaths::from_stub(&cli.output);
    let summary = converter
        .convert_file(&cli.input, &outputs)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    info!(
        "Wrote {} agents to {} and {} relationships to {}",
        summary.persons,
        outputs.agents.display(),
        summary.relationships,
        outputs.relationships.display()
    );
    Ok(())
}
