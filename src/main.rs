//! Main entry point for the mkzip CLI application.
//!
//! This binary assembles a ZIP archive from explicitly named input files,
//! each with its own internal name and compression settings. Input items
//! are validated during argument parsing, so a malformed item aborts the
//! run before the output file is ever created.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use mkzip::{ArchiveWriter, Cli, effective_compression};

/// Application entry point.
///
/// Parses command-line arguments and builds the requested archive. Any
/// failure is reported with a human-readable message and a non-zero exit
/// status.
fn main() -> Result<()> {
    let cli = Cli::parse();
    build_archive(&cli)
}

/// Build the output archive described by the CLI options.
///
/// Input items are processed strictly in the order given, which fixes the
/// physical entry order in the archive. Each source file is read fully
/// into memory, the minimum-size policy is applied, and the entry is
/// handed to the writer. The first error aborts the whole run; re-running
/// the command is the recovery path.
fn build_archive(cli: &Cli) -> Result<()> {
    let mut archive = ArchiveWriter::create(&cli.output)?;
    let mut total_bytes = 0u64;

    for item in &cli.inputs {
        let data = fs::read(&item.path)
            .with_context(|| format!("Failed to read input file: {}", item.path))?;

        let (compression, level) =
            effective_compression(item, data.len() as u64, cli.min_comp_size);

        if cli.is_verbose() {
            eprintln!(
                "  adding: {} ({}, {} bytes)",
                item.internal_name,
                compression,
                data.len()
            );
        }

        archive.add_entry(&item.internal_name, &data, compression, level)?;
        total_bytes += data.len() as u64;
    }

    archive.finish()?;

    if cli.is_verbose() {
        eprintln!(
            "{}: {} entries, {} bytes",
            cli.output.display(),
            cli.inputs.len(),
            total_bytes
        );
    }

    Ok(())
}
