mod cli;
mod telemetry;

use crate::cli::{OutputFormat, CLI};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tracing::info;
use uniseq_generator::{Generator, GeneratorSettings, Label, SharedSequence};

fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format)?;

    let alphabet = config.alphabet().context("invalid alphabet")?;

    info!(
        radix = alphabet.len(),
        count = config.count,
        offset = config.offset,
        prefix = %config.prefix,
        format = %config.format,
        "generating labels"
    );

    let generator = SharedSequence::new(
        GeneratorSettings::builder()
            .alphabet(alphabet)
            .offset(config.offset)
            .prefix(config.prefix.as_str())
            .build(),
    );
    let labels = take(&generator, config.count)?;

    let stdout = io::stdout();
    render(&labels, config.format, &mut BufWriter::new(stdout.lock()))
        .context("failed to write labels")?;

    Ok(())
}

fn take<G: Generator>(generator: &G, count: u64) -> anyhow::Result<Vec<Label>> {
    (0..count)
        .map(|index| {
            generator
                .generate()
                .map(Into::into)
                .with_context(|| format!("failed to generate label #{index}"))
        })
        .collect()
}

fn render<W: Write>(labels: &[Label], format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => {
            for label in labels {
                writeln!(out, "{label}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, labels)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
