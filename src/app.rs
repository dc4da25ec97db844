//! Application orchestrator.
//! Captures the environment, layers config, initializes logging, installs the
//! Ctrl-C handler and runs one rename session.

use anyhow::Result;
use tracing::{debug, error, warn};

use bulk_rename::cli::Args;
use bulk_rename::output as out;
use bulk_rename::render_script;
use bulk_rename::session::PROGRAM;
use bulk_rename::{
    BulkRenameError, CommandEditor, Environment, Outcome, Session, config, default_config_path,
    shutdown,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let env = Environment::capture();

    // Handle --print-config before logging init
    if args.print_config {
        match default_config_path(&env) {
            Some(p) => {
                out::print_info(&format!("bulk_rename config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Example:\n\n<config>\n  <editor>nvim</editor>\n  <log_level>normal</log_level>\n  <log_file>/path/to/bulk_rename.log</log_file>\n</config>\n");
                }
                if env.config_path.is_some() {
                    out::print_info("Set by BULK_RENAME_CONFIG; unset it to use the default location.");
                }
            }
            None => out::print_error("Could not determine a default config path"),
        }
        return Ok(());
    }

    if args.paths.is_empty() {
        return Err(BulkRenameError::Usage(PROGRAM.to_string()).into());
    }

    let (mut cfg, cfg_path) = config::load(&env)?;
    args.apply_overrides(&mut cfg);

    // Hold the guard until exit so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    if let Err(e) = ctrlc::set_handler(|| {
        shutdown::request();
        out::print_warn("Received interrupt; stopping before the next step...");
    }) {
        warn!(error = %e, "Could not install interrupt handler");
    }

    debug!(?args, ?cfg, config_file = ?cfg_path, "Starting bulk_rename");

    let editor = CommandEditor::new(cfg.editor.clone());
    match Session::new(&cfg, &editor).run(&args.paths) {
        Ok(Outcome::DryRun(plan)) => {
            if cfg.script_path.is_none() {
                out::print_user(&render_script(&plan));
            }
            out::print_info(&format!(
                "Dry-run: {} rename(s) planned, nothing changed",
                plan.staged().len()
            ));
            Ok(())
        }
        Ok(Outcome::Renamed { report, .. }) => {
            out::print_success(&format!("Renamed {} entries", report.entries_renamed));
            Ok(())
        }
        Err(e) => {
            let code = e.code();
            match &e {
                BulkRenameError::Execution(ex) => {
                    error!(code, kind = %ex.kind(), step = ex.number, total = ex.total, "Rename failed part-way");
                    if ex.number > 1 {
                        out::print_warn(&format!(
                            "Steps 1-{} were applied and are not rolled back.",
                            ex.number - 1
                        ));
                    }
                    for (staging, old) in &ex.stranded {
                        out::print_warn(&format!(
                            "'{}' is still parked at '{}'",
                            old.display(),
                            staging.display()
                        ));
                    }
                }
                BulkRenameError::EditorFailed { command, .. } => {
                    error!(code, editor = %command, "Editor failed");
                }
                other => debug!(code, error = %other, "Session ended without renaming"),
            }
            Err(e.into())
        }
    }
}
