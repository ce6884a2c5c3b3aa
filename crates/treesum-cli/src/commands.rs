use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;
use colored::Colorize;
use treesum_diff::{diff, DiffDocument, SameDocument};
use treesum_manifest::{scan_directory, ManifestDocument};

use crate::cli::{Cli, Command, CompareArgs, ScanArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Scan(args) => cmd_scan(args),
        Command::Compare(args) => cmd_compare(args),
    }
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<()> {
    let manifest = scan_directory(Path::new(&args.directory))
        .with_context(|| format!("failed to scan '{}'", args.directory))?;

    let document = ManifestDocument::from_manifest(&manifest);
    match &args.output {
        Some(path) => {
            document
                .save(Path::new(path))
                .with_context(|| format!("failed to write manifest to '{path}'"))?;
            println!("Results written to: {}", path.bold());
        }
        None => {
            let json = document.to_json_pretty()?;
            println!("{json}");
        }
    }

    println!(
        "{} Scan complete: {} files from {}",
        "✓".green().bold(),
        manifest.file_count.to_string().bold(),
        manifest.root.display().to_string().bold(),
    );
    if manifest.error_count > 0 {
        println!(
            "  {} {} files skipped due to read errors",
            "!".yellow().bold(),
            manifest.error_count,
        );
    }
    Ok(())
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<()> {
    let want_diff = args.diff || args.both;
    let want_same = args.same || args.both;
    if !want_diff && !want_same {
        bail!("select --diff, --same, or --both");
    }

    let a = ManifestDocument::load(Path::new(&args.file1))
        .with_context(|| format!("failed to load '{}'", args.file1))?
        .into_manifest();
    let b = ManifestDocument::load(Path::new(&args.file2))
        .with_context(|| format!("failed to load '{}'", args.file2))?
        .into_manifest();

    let result = diff(&a, &b);
    let now = Utc::now();

    if want_diff {
        DiffDocument::from_result(&result, &args.file1, &args.file2, now)
            .save(Path::new(&args.diff_output))
            .with_context(|| format!("failed to write '{}'", args.diff_output))?;
        println!(
            "Files with different/unique digests: {} (saved to {})",
            result.differing_count().to_string().bold(),
            args.diff_output.bold(),
        );
    }
    if want_same {
        SameDocument::from_result(&result, &args.file1, &args.file2, now)
            .save(Path::new(&args.same_output))
            .with_context(|| format!("failed to write '{}'", args.same_output))?;
        println!(
            "Files with matching digests: {} (saved to {})",
            result.matched_count().to_string().bold(),
            args.same_output.bold(),
        );
    }

    println!("{} Comparison complete", "✓".green().bold());
    Ok(())
}
