use std::fmt;

use crate::input::InputItem;

/// Compression methods selectable per entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Stored,
    Deflate,
    Zstd,
}

impl Compression {
    /// Map to the `zip` crate's method selector.
    pub fn as_zip_method(&self) -> zip::CompressionMethod {
        match self {
            Compression::Stored => zip::CompressionMethod::Stored,
            Compression::Deflate => zip::CompressionMethod::Deflated,
            Compression::Zstd => zip::CompressionMethod::Zstd,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Stored => write!(f, "stored"),
            Compression::Deflate => write!(f, "deflate"),
            Compression::Zstd => write!(f, "zstd"),
        }
    }
}

/// Compute the (method, level) actually written for an entry.
///
/// When a minimum compression size is set, entries strictly smaller than
/// that many bytes are stored uncompressed with no level, regardless of
/// what the item requested. Otherwise the requested pair is returned
/// unchanged. The item itself is never modified.
pub fn effective_compression(
    item: &InputItem,
    data_len: u64,
    min_comp_size: Option<u64>,
) -> (Compression, Option<i64>) {
    if let Some(min) = min_comp_size {
        if data_len < min {
            return (Compression::Stored, None);
        }
    }
    (item.compression, item.level)
}
