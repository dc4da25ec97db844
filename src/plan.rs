//! Rename plan construction.
//!
//! A plan has two phases. The stage phase creates the missing destination
//! directories, then parks every source at a fresh sibling path. A directory
//! that lies under a source being moved away is created after the parking
//! moves instead. The commit phase moves each parked entry to its final name. Since
//! every source is vacated before any destination is written, swaps and
//! cycles (`a -> b`, `b -> c`, `c -> a`) never clobber a file still waiting
//! to move.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::temp_name::{NameSource, ProcessNames, fresh_name_with};

/// One requested rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub old: PathBuf,
    pub new: PathBuf,
}

impl RenamePair {
    pub fn new(old: impl Into<PathBuf>, new: impl Into<PathBuf>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    #[inline]
    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stage,
    Commit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Stage => "stage",
            Phase::Commit => "commit",
        })
    }
}

/// A single filesystem operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Create a directory and any missing parents.
    MakeDir(PathBuf),
    /// Rename `src` to `dst`; never overwrites.
    Move { src: PathBuf, dst: PathBuf },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::MakeDir(p) => write!(f, "mkdir -p '{}'", p.display()),
            Step::Move { src, dst } => write!(f, "move '{}' -> '{}'", src.display(), dst.display()),
        }
    }
}

/// Where one entry travels: old -> staging -> new.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedPair {
    pub old: PathBuf,
    pub staging: PathBuf,
    pub new: PathBuf,
}

/// Ordered operations: all of `stage`, then all of `commit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    stage: Vec<Step>,
    commit: Vec<Step>,
    staged: Vec<StagedPair>,
}

impl RenamePlan {
    pub fn stage(&self) -> &[Step] {
        &self.stage
    }

    pub fn commit(&self) -> &[Step] {
        &self.commit
    }

    pub fn staged(&self) -> &[StagedPair] {
        &self.staged
    }

    /// Every step in execution order, tagged with its phase.
    pub fn steps(&self) -> impl Iterator<Item = (Phase, &Step)> {
        self.stage
            .iter()
            .map(|s| (Phase::Stage, s))
            .chain(self.commit.iter().map(|s| (Phase::Commit, s)))
    }

    /// Directories the plan will create.
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.stage.iter().filter_map(|s| match s {
            Step::MakeDir(p) => Some(p.as_path()),
            Step::Move { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.stage.len() + self.commit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stage.is_empty() && self.commit.is_empty()
    }
}

/// Directory holding `p`; `.` for bare relative names.
fn parent_dir(p: &Path) -> PathBuf {
    match p.parent() {
        Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Builds [`RenamePlan`]s. Deterministic when the name source is.
#[derive(Debug, Default)]
pub struct PlanBuilder<N: NameSource = ProcessNames> {
    names: N,
}

impl PlanBuilder<ProcessNames> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: NameSource> PlanBuilder<N> {
    pub fn with_names(names: N) -> Self {
        Self { names }
    }

    pub fn build(&mut self, pairs: &[RenamePair]) -> io::Result<RenamePlan> {
        let mut reserved: HashSet<PathBuf> = HashSet::new();
        let mut vacated: Vec<PathBuf> = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let old = std::path::absolute(&pair.old)?;
            reserved.insert(old.clone());
            reserved.insert(std::path::absolute(&pair.new)?);
            vacated.push(old);
        }

        // Parents to create, in pair order. Those under a vacated source can
        // only be created once the stage moves have run.
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut early: Vec<PathBuf> = Vec::new();
        let mut late: Vec<PathBuf> = Vec::new();
        for pair in pairs {
            let Some(dir) = pair.new.parent().filter(|d| !d.as_os_str().is_empty()) else {
                continue;
            };
            let abs = std::path::absolute(dir)?;
            if seen.contains(&abs) {
                continue;
            }
            let moving_away = vacated.iter().any(|v| abs.starts_with(v));
            if dir.is_dir() && !moving_away {
                continue;
            }
            debug!(dir = %dir.display(), after_stage = moving_away, "planned directory creation");
            reserved.insert(abs.clone());
            seen.insert(abs);
            if moving_away {
                late.push(dir.to_path_buf());
            } else {
                early.push(dir.to_path_buf());
            }
        }

        let mut plan = RenamePlan::default();
        plan.stage.extend(early.into_iter().map(Step::MakeDir));

        for pair in pairs {
            let dir = parent_dir(&pair.old);
            let staging = fresh_name_with(&mut self.names, &dir, |c| {
                std::path::absolute(c)
                    .map(|a| reserved.contains(&a))
                    .unwrap_or(true)
            })?;
            reserved.insert(std::path::absolute(&staging)?);
            debug!(old = %pair.old.display(), staging = %staging.display(), new = %pair.new.display(), "planned rename");

            plan.stage.push(Step::Move {
                src: pair.old.clone(),
                dst: staging.clone(),
            });
            plan.commit.push(Step::Move {
                src: staging.clone(),
                dst: pair.new.clone(),
            });
            plan.staged.push(StagedPair {
                old: pair.old.clone(),
                staging,
                new: pair.new.clone(),
            });
        }

        plan.stage.extend(late.into_iter().map(Step::MakeDir));
        Ok(plan)
    }
}

/// Build a plan using process-unique staging names.
pub fn build_plan(pairs: &[RenamePair]) -> io::Result<RenamePlan> {
    PlanBuilder::new().build(pairs)
}
