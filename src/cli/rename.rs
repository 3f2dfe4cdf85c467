//! Rename command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::domain::ReadLayout;
use crate::rename::{CollisionPolicy, FailureMode, FileRenamer, RenameReport};

#[derive(Args)]
pub struct RenameArgs {
    /// Directory to search recursively for *.fastq.gz files [default: input_dir setting]
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Files are paired-end reads (SAMPLE_READ_..._SUFFIX.fastq.gz)
    #[arg(long)]
    pub paired_end: bool,

    /// What to do when the canonical name already exists
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_collision: Option<CollisionPolicy>,

    /// Keep going after a bad file name and report all failures at the end
    #[arg(long)]
    pub keep_going: bool,

    /// Print the planned renames without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: RenameArgs, settings: Settings) -> Result<()> {
    let root = args.dir.unwrap_or_else(|| settings.input_dir.clone());
    let policy = args.on_collision.unwrap_or(settings.on_collision);
    let keep_going = args.keep_going || settings.keep_going;

    rename_reads(
        &root,
        ReadLayout::from_paired(args.paired_end),
        policy,
        FailureMode::from_keep_going(keep_going),
        args.dry_run,
    )
}

pub fn rename_reads(
    root: &Path,
    layout: ReadLayout,
    policy: CollisionPolicy,
    mode: FailureMode,
    dry_run: bool,
) -> Result<()> {
    if !root.is_dir() {
        anyhow::bail!("Input path is not a directory: {}", root.display());
    }

    let report = FileRenamer::new(root, layout)
        .on_collision(policy)
        .failure_mode(mode)
        .dry_run(dry_run)
        .run()?;

    print_report(&report, dry_run);

    if !report.is_success() {
        anyhow::bail!("{} read file(s) could not be renamed", report.failures.len());
    }
    Ok(())
}

fn print_report(report: &RenameReport, dry_run: bool) {
    let verb = if dry_run { "Would rename" } else { "Renamed" };
    for file in &report.renamed {
        println!("{verb} {} -> {}", file.from.display(), file.to.display());
    }
    for file in &report.skipped {
        println!("Skipped {} ({} exists)", file.from.display(), file.to.display());
    }
    for failure in &report.failures {
        println!("Failed: {failure}");
    }
    println!(
        "{} renamed, {} skipped, {} failed",
        report.renamed.len(),
        report.skipped.len(),
        report.failures.len()
    );
}
