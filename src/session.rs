//! One interactive rename cycle.
//!
//! list file -> editor -> validate -> review file -> editor -> parse -> plan
//! -> (script) -> execute. Both text files live in the system temp dir and
//! are removed when the cycle ends, whatever the outcome.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::editor::Editor;
use crate::errors::BulkRenameError;
use crate::execute::{ExecutionReport, execute};
use crate::listing::{parse_list, parse_review, render_list, render_review};
use crate::output as out;
use crate::plan::{RenamePlan, build_plan};
use crate::script::render_script;
use crate::shutdown;
use crate::validate::{names_from_paths, validate};

pub const PROGRAM: &str = "bulk_rename";

/// How a session ended when nothing went wrong.
#[derive(Debug)]
pub enum Outcome {
    /// Planned only; the filesystem was not touched.
    DryRun(RenamePlan),
    Renamed {
        plan: RenamePlan,
        report: ExecutionReport,
    },
}

pub struct Session<'a, E: Editor> {
    config: &'a Config,
    editor: E,
}

impl<'a, E: Editor> Session<'a, E> {
    pub fn new(config: &'a Config, editor: E) -> Self {
        Self { config, editor }
    }

    pub fn run(&self, paths: &[PathBuf]) -> Result<Outcome, BulkRenameError> {
        if paths.is_empty() {
            return Err(BulkRenameError::Usage(PROGRAM.to_string()));
        }

        let old = names_from_paths(paths)?;
        let edited = self.edit_text(&render_list(&old))?;
        let new = parse_list(&edited);
        let pairs = validate(&old, &new)?;

        let reviewed = self.edit_text(&render_review(&pairs))?;
        let pairs = parse_review(&reviewed)?;

        let plan = build_plan(&pairs).map_err(|e| BulkRenameError::io("plan renames", e))?;
        for s in plan.staged() {
            out::print_user(&format!(
                "{} -> {} -> {}",
                s.old.display(),
                s.staging.display(),
                s.new.display()
            ));
        }

        if let Some(script) = &self.config.script_path {
            fs::write(script, render_script(&plan)).map_err(|e| {
                BulkRenameError::io(format!("write script '{}'", script.display()), e)
            })?;
            info!(path = %script.display(), "Wrote rename script");
        }

        if self.config.dry_run {
            info!(steps = plan.len(), "dry-run: nothing renamed");
            return Ok(Outcome::DryRun(plan));
        }

        let report = execute(&plan)?;
        Ok(Outcome::Renamed { plan, report })
    }

    /// Write `text` to a fresh temp file, let the user edit it, read it back.
    fn edit_text(&self, text: &str) -> Result<String, BulkRenameError> {
        let io_err = |ctx: &str, e| BulkRenameError::io(ctx.to_string(), e);

        let mut file = tempfile::Builder::new()
            .prefix("bulk_rename.")
            .suffix(".txt")
            .tempfile()
            .map_err(|e| io_err("create temp file", e))?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| io_err("write temp file", e))?;
        // Close our handle so editors that replace the file can do so.
        let path = file.into_temp_path();
        debug!(path = %path.display(), "Wrote edit file");

        self.editor.edit(&path)?;
        if shutdown::is_requested() {
            return Err(BulkRenameError::Interrupted);
        }

        fs::read_to_string(&path).map_err(|e| io_err("read edited file", e))
    }
}
