//! # mkzip
//!
//! Deterministic ZIP archive assembly for build pipelines.
//!
//! This library backs the `mkzip` command-line tool: every archive entry
//! is named explicitly on the command line, together with its own
//! compression method (stored, deflate, or zstd) and optional level, and
//! entries are written in exactly the order given. A minimum-size
//! threshold can force small files to be stored uncompressed, where
//! compression overhead would only grow them.
//!
//! ## Features
//!
//! - Per-entry compression method and level
//! - Stable, input-defined entry order
//! - Size threshold below which compression is skipped
//! - Compact one-token-per-entry input grammar, friendly to generated
//!   build scripts
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use mkzip::{ArchiveWriter, effective_compression, parse_input};
//!
//! fn main() -> anyhow::Result<()> {
//!     let item = parse_input("README.md,readme.txt,deflate")?;
//!
//!     let data = std::fs::read(&item.path)?;
//!     let (compression, level) = effective_compression(&item, data.len() as u64, Some(64));
//!
//!     let mut archive = ArchiveWriter::create(Path::new("out.zip"))?;
//!     archive.add_entry(&item.internal_name, &data, compression, level)?;
//!     archive.finish()?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod input;
pub mod zip;

pub use cli::Cli;
pub use input::{InputItem, parse_input};
pub use self::zip::{ArchiveWriter, Compression, effective_compression};
