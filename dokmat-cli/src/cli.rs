use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sparse integer matrix arithmetic", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Description file of the left operand
    #[arg(long, default_value = "matrix.txt", value_hint = ValueHint::FilePath)]
    pub lhs: PathBuf,

    /// Description file of the right operand, defaults to the left one
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub rhs: Option<PathBuf>,

    /// Print every element of the result instead of its non-zero entries
    #[arg(long)]
    pub dense: bool,

    /// One of `add`, `subtract` or `multiply`; prompted for when absent
    pub operation: Option<String>,
}

impl Cli {
    pub fn rhs_path(&self) -> &Path {
        self.rhs.as_deref().unwrap_or(&self.lhs)
    }
}
