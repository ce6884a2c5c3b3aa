use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "treesum",
    about = "Content-addressable file tree manifests and digest diffs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a directory tree and emit a manifest document
    Scan(ScanArgs),
    /// Compare two manifest documents by content digest
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to scan
    pub directory: String,

    /// Write the manifest document to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct CompareArgs {
    /// First manifest document
    pub file1: String,

    /// Second manifest document
    pub file2: String,

    /// Emit the diff document (digests present on only one side)
    #[arg(long)]
    pub diff: bool,

    /// Emit the same document (digests present on both sides)
    #[arg(long)]
    pub same: bool,

    /// Emit both documents
    #[arg(long)]
    pub both: bool,

    /// Where to write the diff document
    #[arg(long, default_value = "diff.json")]
    pub diff_output: String,

    /// Where to write the same document
    #[arg(long, default_value = "same.json")]
    pub same_output: String,
}
