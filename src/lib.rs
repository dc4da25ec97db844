//! Core library for `bulk_rename`.
//!
//! Renaming happens in two edits and one plan. The user edits a list of
//! names, then reviews the `old -> new` pairs. The pairs become a two-phase
//! [`RenamePlan`] that parks every source at a unique staging path before any
//! destination is written, so swaps and cycles are safe. The plan is executed
//! with direct filesystem calls and can also be rendered as a shell script.

pub mod cli;
pub mod config;
pub mod editor;
pub mod errors;
pub mod escape;
pub mod execute;
pub mod fs_helpers;
pub mod listing;
pub mod output;
pub mod plan;
pub mod platform;
pub mod script;
pub mod session;
pub mod shutdown;
pub mod temp_name;
pub mod validate;

pub use config::{Config, Environment, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use editor::{CommandEditor, Editor};
pub use errors::{BulkRenameError, ExecutionError};
pub use escape::{shell_escape, shell_quote, split_words};
pub use execute::{ExecutionReport, execute};
pub use listing::{parse_list, parse_review, render_list, render_review};
pub use plan::{Phase, PlanBuilder, RenamePair, RenamePlan, StagedPair, Step, build_plan};
pub use script::render_script;
pub use session::{Outcome, Session};
pub use temp_name::{NameSource, ProcessNames, fresh_name, fresh_name_with};
pub use validate::{names_from_paths, validate};
