//! ZIP archive assembly.
//!
//! Everything archive-side of the tool lives here:
//!
//! - `options`: the per-entry compression selector and the minimum-size
//!   policy deciding what actually gets compressed
//! - `writer`: a thin writer over the `zip` crate that adds entries in
//!   order and finalizes the central directory on finish
//!
//! Container framing, checksums and the compression codecs themselves are
//! delegated entirely to the `zip` crate, compiled with its `deflate` and
//! `zstd` backends. Nothing in this crate touches ZIP binary structures.
//!
//! ## Supported Methods
//!
//! - STORED (no compression)
//! - DEFLATE
//! - Zstandard
//!
//! ## Limitations
//!
//! - Each input is read fully into memory before it is written; there is
//!   no streaming path for very large files
//! - No encryption, no archive update/append

mod options;
mod writer;

pub use options::{Compression, effective_compression};
pub use writer::ArchiveWriter;
