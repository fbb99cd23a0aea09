//! Parsing of input items from positional arguments.
//!
//! Each positional argument plans one archive entry using a compact
//! comma-separated grammar, so a whole entry stays a single shell token
//! even when generated programmatically from a build script:
//!
//! ```text
//! path,internal_name[,compression_method[,compression_level]]
//! ```
//!
//! - `path` (required): the input file path.
//! - `internal_name` (required): the name of the file as added to the
//!   ZIP archive.
//! - `compression_method` (optional): `none` (default), `deflate`, or
//!   `zstd`. An empty field also means `none`.
//! - `compression_level` (optional): algorithm-dependent integer; absent
//!   or empty means the algorithm's default level.
//!
//! Fields are taken literally: no whitespace trimming and no case
//! folding. `" deflate"` is not a valid method token.

use std::str::FromStr;

use anyhow::{Result, bail};

use crate::zip::Compression;

/// One planned archive entry, parsed from a positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputItem {
    /// Filesystem path of the input file
    pub path: String,
    /// Name the file will have inside the archive
    pub internal_name: String,
    /// Requested compression method
    pub compression: Compression,
    /// Requested compression level; `None` means the algorithm's default
    pub level: Option<i64>,
}

/// Parse one input item argument.
///
/// Used directly by clap as the value parser for positional arguments,
/// so every item is validated before any file is opened. Error messages
/// echo the offending argument back to the user.
pub fn parse_input(raw: &str) -> Result<InputItem> {
    let fields: Vec<&str> = raw.split(',').collect();

    if fields[0].is_empty() {
        bail!("Missing path in input item: {}", raw);
    } else if fields.len() < 2 {
        bail!("Missing internal name in input item: {}", raw);
    } else if fields.len() > 4 {
        bail!("Too many parameters in input item: {}", raw);
    }

    if fields[1].is_empty() {
        bail!("Missing internal name in input item: {}", raw);
    }

    let compression = match fields.get(2) {
        None | Some(&"") | Some(&"none") => Compression::Stored,
        Some(&"deflate") => Compression::Deflate,
        Some(&"zstd") => Compression::Zstd,
        Some(_) => bail!("Invalid compression method in input item: {}", raw),
    };

    let level = match fields.get(3) {
        Some(field) if !field.is_empty() => match field.parse::<i64>() {
            Ok(level) => Some(level),
            Err(_) => bail!("Invalid compression level in input item: {}", raw),
        },
        _ => None,
    };

    Ok(InputItem {
        path: fields[0].to_string(),
        internal_name: fields[1].to_string(),
        compression,
        level,
    })
}

impl FromStr for InputItem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_input(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_field_item_defaults_to_stored() {
        let item = parse_input("src/a.txt,a.txt").unwrap();
        assert_eq!(item.path, "src/a.txt");
        assert_eq!(item.internal_name, "a.txt");
        assert_eq!(item.compression, Compression::Stored);
        assert_eq!(item.level, None);
    }

    #[test]
    fn method_tokens_map_exactly() {
        assert_eq!(
            parse_input("a,b,deflate").unwrap().compression,
            Compression::Deflate
        );
        assert_eq!(parse_input("a,b,zstd").unwrap().compression, Compression::Zstd);
        assert_eq!(parse_input("a,b,none").unwrap().compression, Compression::Stored);
        assert_eq!(parse_input("a,b,").unwrap().compression, Compression::Stored);
    }

    #[test]
    fn method_tokens_are_case_sensitive() {
        assert!(parse_input("a,b,Deflate").is_err());
        assert!(parse_input("a,b,ZSTD").is_err());
    }

    #[test]
    fn level_is_parsed_when_present() {
        assert_eq!(parse_input("a,b,zstd,19").unwrap().level, Some(19));
        assert_eq!(parse_input("a,b,deflate,-1").unwrap().level, Some(-1));
        assert_eq!(parse_input("a,b,deflate,").unwrap().level, None);
    }

    #[test]
    fn missing_internal_name_is_rejected() {
        let err = parse_input("only_path.txt").unwrap_err();
        assert!(err.to_string().contains("Missing internal name"));
        assert!(err.to_string().contains("only_path.txt"));

        let err = parse_input("a,").unwrap_err();
        assert!(err.to_string().contains("Missing internal name"));
    }

    #[test]
    fn missing_path_is_rejected() {
        let err = parse_input(",b").unwrap_err();
        assert!(err.to_string().contains("Missing path"));

        let err = parse_input("").unwrap_err();
        assert!(err.to_string().contains("Missing path"));
    }

    #[test]
    fn too_many_fields_is_rejected() {
        let err = parse_input("a,b,zstd,19,extra").unwrap_err();
        assert!(err.to_string().contains("Too many parameters"));
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = parse_input("a,b,gzip").unwrap_err();
        assert!(err.to_string().contains("Invalid compression method"));
        assert!(err.to_string().contains("a,b,gzip"));
    }

    #[test]
    fn non_numeric_level_is_rejected() {
        let err = parse_input("path,name,zstd,abc").unwrap_err();
        assert!(err.to_string().contains("Invalid compression level"));
    }

    #[test]
    fn fields_are_taken_literally() {
        let item = parse_input(" a.txt , name ").unwrap();
        assert_eq!(item.path, " a.txt ");
        assert_eq!(item.internal_name, " name ");
    }
}
