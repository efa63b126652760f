use std::path::PathBuf;

use clap::Parser;

/// Convert a CIS benchmark PDF into JSON and Excel records.
#[derive(Debug, Parser)]
#[command(name = "benchsift", about, version)]
pub struct Cli {
    /// Path to the benchmark PDF
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output base name without extension; writes <OUT_BASE>.json and
    /// <OUT_BASE>.xlsx
    #[arg(value_name = "OUT_BASE")]
    pub out_base: String,
}
