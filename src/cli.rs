use std::path::PathBuf;

use clap::Parser;

use crate::input::{InputItem, parse_input};

#[derive(Parser, Debug)]
#[command(name = "mkzip")]
#[command(version)]
#[command(about = "Build a ZIP archive from explicitly named input files", long_about = None)]
#[command(after_help = "Examples:\n  \
  mkzip README.md,readme.txt -o docs.zip            add one file, stored uncompressed\n  \
  mkzip notes.txt,notes.txt,deflate,9 -o out.zip    deflate at maximum level\n  \
  mkzip data.bin,data,zstd,19 logo.png,logo -o assets.zip\n  \
  mkzip a.txt,a b.txt,b --min-comp-size 4096 -o out.zip   store entries under 4 KiB")]
pub struct Cli {
    /// Input items with the format: path,internal_name[,compression_method[,compression_level]]
    #[arg(value_name = "ITEM", required = true, value_parser = parse_input)]
    pub inputs: Vec<InputItem>,

    /// Path of the ZIP file to create
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Do not compress files smaller than this many bytes
    #[arg(long = "min-comp-size", value_name = "NBYTES")]
    pub min_comp_size: Option<u64>,

    /// Report each entry as it is added
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Quiet mode (suppresses -v output)
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}
