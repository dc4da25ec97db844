use bulk_rename::cli::Args;
use bulk_rename::config::types::{Config, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn paths_keep_their_order() {
    let args = Args::parse_from(["bulk_rename", "b.txt", "a.txt", "dir/"]);
    assert_eq!(args.paths, ["b.txt", "a.txt", "dir/"].map(PathBuf::from));
}

#[test]
fn no_paths_parses_so_usage_can_be_reported() {
    let args = Args::parse_from(["bulk_rename"]);
    assert!(args.paths.is_empty());
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["bulk_rename", "-d", "--log-level", "quiet", "x"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["bulk_rename", "--log-level", "VERBOSE", "x"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["bulk_rename", "x"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn invalid_log_level_is_rejected_by_clap() {
    let err = Args::try_parse_from(["bulk_rename", "--log-level", "loud", "x"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains("loud"));
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "bulk_rename",
        "--editor",
        "code --wait",
        "-n",
        "--script",
        "/tmp/plan.sh",
        "--log-level",
        "info",
        "f",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.editor, "code --wait");
    assert!(cfg.dry_run);
    assert_eq!(cfg.script_path.as_deref(), Some(PathBuf::from("/tmp/plan.sh").as_path()));
    assert_eq!(cfg.log_level, LogLevel::Info);
}

#[test]
fn unset_flags_leave_config_alone() {
    let mut cfg = Config {
        editor: "nano".into(),
        log_level: LogLevel::Quiet,
        ..Config::default()
    };
    let before = cfg.clone();
    Args::parse_from(["bulk_rename", "f"]).apply_overrides(&mut cfg);
    assert_eq!(cfg, before);
}

#[test]
fn blank_editor_flag_is_ignored() {
    let mut cfg = Config::default();
    Args::parse_from(["bulk_rename", "--editor", "  ", "f"]).apply_overrides(&mut cfg);
    assert_eq!(cfg.editor, "vim");
}

#[test]
fn log_level_names() {
    for (s, lvl) in [
        ("quiet", LogLevel::Quiet),
        ("Error", LogLevel::Quiet),
        ("normal", LogLevel::Normal),
        ("detailed", LogLevel::Info),
        ("TRACE", LogLevel::Debug),
    ] {
        assert_eq!(s.parse::<LogLevel>(), Ok(lvl.clone()), "{s}");
        assert_eq!(lvl.to_string().parse::<LogLevel>(), Ok(lvl));
    }
    assert!("".parse::<LogLevel>().is_err());
}
