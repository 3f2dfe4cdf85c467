//! Directory walker that renames read files in place

use crate::domain::{compute_target_name, is_read_file, ReadLayout, FASTQ_EXTENSION};
use crate::error::{PrepError, Result};
use crate::rename::{CollisionPolicy, FailureMode};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of one renaming pass.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<RenamedFile>,
    /// Renames not performed because the target existed and the policy is `skip`.
    pub skipped: Vec<RenamedFile>,
    /// Per-file failures recorded in [`FailureMode::Collect`].
    pub failures: Vec<PrepError>,
}

impl RenameReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renames every `*.fastq.gz` below a root directory into canonical form.
pub struct FileRenamer {
    root: PathBuf,
    layout: ReadLayout,
    on_collision: CollisionPolicy,
    failure_mode: FailureMode,
    dry_run: bool,
}

impl FileRenamer {
    pub fn new(root: impl Into<PathBuf>, layout: ReadLayout) -> Self {
        Self {
            root: root.into(),
            layout,
            on_collision: CollisionPolicy::default(),
            failure_mode: FailureMode::default(),
            dry_run: false,
        }
    }

    pub fn on_collision(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    pub fn failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    /// Plan renames without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// All read files below the root, sorted by path.
    ///
    /// Collected up front so files renamed during the pass are not visited
    /// a second time. Symlinks to files count as read files; the link itself
    /// is renamed and its target is left alone.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                PrepError::io(path, e.into())
            })?;
            let file_type = entry.file_type();
            let is_file_link = file_type.is_symlink() && !entry.path().is_dir();
            if !file_type.is_file() && !is_file_link {
                continue;
            }
            let matches = entry.file_name().to_str().map(is_read_file).unwrap_or(false);
            if matches {
                files.push(entry.into_path());
            } else {
                tracing::debug!("skipping {}", entry.path().display());
            }
        }
        Ok(files)
    }

    pub fn run(&self) -> Result<RenameReport> {
        let candidates = self.candidates()?;
        tracing::debug!(
            "found {} read files under {} ({})",
            candidates.len(),
            self.root.display(),
            self.layout
        );

        let mut report = RenameReport::default();
        let mut planned = HashSet::new();
        for path in candidates {
            if let Err(e) = self.rename_one(&path, &mut planned, &mut report) {
                match self.failure_mode {
                    FailureMode::Abort => return Err(e),
                    FailureMode::Collect => {
                        tracing::warn!("{}", e);
                        report.failures.push(e);
                    }
                }
            }
        }
        Ok(report)
    }

    fn rename_one(
        &self,
        path: &Path,
        planned: &mut HashSet<PathBuf>,
        report: &mut RenameReport,
    ) -> Result<()> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PrepError::malformed(&path.to_string_lossy(), "not valid UTF-8"))?;
        let target_name = compute_target_name(name, self.layout)?;
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        let mut target = parent.join(&target_name);

        if self.is_taken(&target, planned) {
            match self.on_collision {
                CollisionPolicy::Overwrite => {
                    tracing::warn!("overwriting {} with {}", target.display(), path.display());
                }
                CollisionPolicy::Fail => {
                    return Err(PrepError::RenameCollision {
                        from: path.to_path_buf(),
                        to: target,
                    });
                }
                CollisionPolicy::Skip => {
                    tracing::warn!(
                        "skipping {}: {} already exists",
                        path.display(),
                        target.display()
                    );
                    report.skipped.push(RenamedFile { from: path.to_path_buf(), to: target });
                    return Ok(());
                }
                CollisionPolicy::Suffix => {
                    target = self.free_variant(parent, &target_name, planned);
                }
            }
        }

        if !self.dry_run {
            fs::rename(path, &target).map_err(|e| PrepError::io(path, e))?;
        }
        tracing::info!("renamed {} -> {}", path.display(), target.display());
        planned.insert(target.clone());
        report.renamed.push(RenamedFile { from: path.to_path_buf(), to: target });
        Ok(())
    }

    /// Dangling symlinks count as taken.
    fn is_taken(&self, target: &Path, planned: &HashSet<PathBuf>) -> bool {
        fs::symlink_metadata(target).is_ok() || (self.dry_run && planned.contains(target))
    }

    fn free_variant(
        &self,
        parent: &Path,
        target_name: &str,
        planned: &HashSet<PathBuf>,
    ) -> PathBuf {
        let stem = target_name.strip_suffix(FASTQ_EXTENSION).unwrap_or(target_name);
        let mut n = 1usize;
        loop {
            let candidate = parent.join(format!("{stem}-{n}{FASTQ_EXTENSION}"));
            if !self.is_taken(&candidate, planned) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Rename every read file under `root_dir` with the default policies
/// (overwrite on collision, abort on the first failure).
pub fn rename_all(root_dir: &Path, layout: ReadLayout) -> Result<RenameReport> {
    FileRenamer::new(root_dir, layout).run()
}
