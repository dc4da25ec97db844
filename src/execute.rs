//! Plan execution.
//! Runs plan steps one by one through the filesystem API and stops at the first failure.
//!
//! Notes:
//! - Moves never overwrite: an occupied destination fails the step (as `mv -i` declining would).
//! - There is no rollback. Steps that ran before a failure stay applied; the
//!   error lists entries left at their staging path so they can be recovered by hand.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::errors::ExecutionError;
use crate::fs_helpers::with_hint;
use crate::platform::{fsync_dir, is_cross_device, rename_noreplace};
use crate::plan::{Phase, RenamePlan, Step};
use crate::shutdown;

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionReport {
    pub directories_created: usize,
    pub entries_renamed: usize,
}

fn make_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir).map_err(with_hint("create directory", dir))?;
    debug!(dir = %dir.display(), "created directory");
    Ok(())
}

fn move_entry(src: &Path, dst: &Path) -> io::Result<()> {
    if let Err(e) = rename_noreplace(src, dst) {
        if is_cross_device(&e) {
            warn!(src = %src.display(), dst = %dst.display(), "destination is on another filesystem");
        }
        return Err(with_hint("rename", src)(e));
    }
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        // Best-effort; a failed fsync does not undo a completed rename.
        let _ = fsync_dir(parent);
    }
    debug!(src = %src.display(), dst = %dst.display(), "moved");
    Ok(())
}

/// Execute `plan` in order.
pub fn execute(plan: &RenamePlan) -> Result<ExecutionReport, ExecutionError> {
    let total = plan.len();
    let mut report = ExecutionReport::default();
    // Staging paths currently holding an entry.
    let mut parked: HashSet<PathBuf> = HashSet::new();

    for (i, (phase, step)) in plan.steps().enumerate() {
        let result = if shutdown::is_requested() {
            Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted by user"))
        } else {
            match step {
                Step::MakeDir(dir) => make_dir(dir),
                Step::Move { src, dst } => move_entry(src, dst),
            }
        };

        if let Err(source) = result {
            let stranded: Vec<(PathBuf, PathBuf)> = plan
                .staged()
                .iter()
                .filter(|s| parked.contains(&s.staging))
                .map(|s| (s.staging.clone(), s.old.clone()))
                .collect();
            error!(
                step = i + 1,
                total,
                %phase,
                action = %step,
                stranded = stranded.len(),
                error = %source,
                "Rename step failed; earlier steps are not rolled back"
            );
            return Err(ExecutionError {
                number: i + 1,
                total,
                phase,
                step: step.clone(),
                source,
                stranded,
            });
        }

        match (phase, step) {
            (_, Step::MakeDir(_)) => report.directories_created += 1,
            (Phase::Stage, Step::Move { dst, .. }) => {
                parked.insert(dst.clone());
            }
            (Phase::Commit, Step::Move { src, .. }) => {
                parked.remove(src);
                report.entries_renamed += 1;
            }
        }
    }

    info!(
        renamed = report.entries_renamed,
        directories = report.directories_created,
        "Rename plan executed"
    );
    Ok(report)
}
