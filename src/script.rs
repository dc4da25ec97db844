//! Shell rendering of a rename plan.
//! The script is an audit/dry-run artifact only; execution never goes through a shell.

use std::path::Path;

use crate::escape::shell_escape;
use crate::plan::{RenamePlan, Step};

#[inline]
fn esc(p: &Path) -> String {
    shell_escape(&p.to_string_lossy())
}

/// One shell command per step, in plan order.
pub fn render_step(step: &Step) -> String {
    match step {
        Step::MakeDir(dir) => format!("mkdir -vp -- {}", esc(dir)),
        Step::Move { src, dst } => format!("mv -i -- {} {}", esc(src), esc(dst)),
    }
}

/// Render the whole plan as a POSIX shell script.
pub fn render_script(plan: &RenamePlan) -> String {
    let mut out = String::from("#!/bin/sh\nset -e\n");
    for (_, step) in plan.steps() {
        out.push_str(&render_step(step));
        out.push('\n');
    }
    out
}
