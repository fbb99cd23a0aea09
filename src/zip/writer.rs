use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::options::Compression;

/// Writer assembling one ZIP archive entry by entry.
///
/// Thin wrapper over [`zip::ZipWriter`]: container framing, CRC32 and the
/// compression codecs all live in the `zip` crate. Entries appear in the
/// archive in exactly the order they are added.
#[derive(Debug)]
pub struct ArchiveWriter {
    inner: ZipWriter<File>,
}

impl ArchiveWriter {
    /// Create the output archive at `path`, truncating any existing file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            inner: ZipWriter::new(file),
        })
    }

    /// Add one entry named `name` with the given contents.
    ///
    /// A `level` of `None` uses the algorithm's default. The `zip` crate
    /// rejects out-of-range levels for the chosen method at this point.
    pub fn add_entry(
        &mut self,
        name: &str,
        data: &[u8],
        compression: Compression,
        level: Option<i64>,
    ) -> Result<()> {
        let options = SimpleFileOptions::default()
            .compression_method(compression.as_zip_method())
            .compression_level(level);

        self.inner
            .start_file(name, options)
            .with_context(|| format!("Failed to add entry: {}", name))?;
        self.inner
            .write_all(data)
            .with_context(|| format!("Failed to add entry: {}", name))?;

        Ok(())
    }

    /// Finish the archive, writing the central directory.
    ///
    /// Must be called for the archive to be readable; an unfinished
    /// archive has no central directory.
    pub fn finish(self) -> Result<()> {
        self.inner.finish().context("Failed to finalize archive")?;
        Ok(())
    }
}
