use std::path::PathBuf;

use bulk_rename::{BulkRenameError, RenamePair, names_from_paths, parse_list, validate};

#[test]
fn count_mismatch_is_reported_before_anything_else() {
    let err = validate(&["a.txt", "b.txt"], &["a.txt", "b.txt", "c.txt"]).unwrap_err();
    match err {
        BulkRenameError::CountMismatch { old, new } => assert_eq!((old, new), (2, 3)),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(
        err_msg(&["a"], &[]).contains("does not match"),
        "message should explain the mismatch"
    );
}

fn err_msg(old: &[&str], new: &[&str]) -> String {
    validate(old, new).unwrap_err().to_string()
}

#[test]
fn unchanged_list_is_no_change() {
    let err = validate(&["a.txt", "b.txt"], &["a.txt", "b.txt"]).unwrap_err();
    assert!(matches!(err, BulkRenameError::NoChange));
    assert_eq!(err.to_string(), "No renaming to be done.");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn unchanged_entries_are_filtered_out() {
    let pairs = validate(&["a", "b", "c"], &["a", "B", "c"]).unwrap();
    assert_eq!(pairs, vec![RenamePair::new("b", "B")]);
}

#[test]
fn order_of_pairs_follows_the_list() {
    let pairs = validate(&["x", "y", "z"], &["z", "x", "y"]).unwrap();
    let news: Vec<_> = pairs.iter().map(|p| p.new.clone()).collect();
    assert_eq!(news, ["z", "x", "y"].map(PathBuf::from));
}

#[test]
fn editor_output_round_trip() {
    // What a typical editor writes back: edited lines plus a final newline.
    let new = parse_list("one.md\nsub/two.md\n");
    let pairs = validate(&["one.txt", "two.txt"], &new).unwrap();
    assert_eq!(pairs[1], RenamePair::new("two.txt", "sub/two.md"));
}

#[test]
fn deleted_line_is_a_count_mismatch() {
    let new = parse_list("a2\n");
    assert!(matches!(
        validate(&["a", "b"], &new),
        Err(BulkRenameError::CountMismatch { old: 2, new: 1 })
    ));
}

#[test]
fn duplicate_targets_pass_validation() {
    let pairs = validate(&["a", "b"], &["same", "same"]).unwrap();
    assert_eq!(pairs.len(), 2);
}

#[test]
fn names_keep_argument_order_and_spelling() {
    let paths = ["./x y", "dir/", "caf\u{e9}"].map(PathBuf::from);
    assert_eq!(names_from_paths(&paths).unwrap(), ["./x y", "dir/", "caf\u{e9}"]);
}

#[test]
fn newline_in_name_is_rejected() {
    let err = names_from_paths(&[PathBuf::from("bad\nname")]).unwrap_err();
    assert_eq!(err.code(), "newline_in_name");
}

#[test]
fn carriage_return_in_name_is_rejected() {
    // Read back from the list, "report\r" would lose its last character.
    for name in ["report\r", "a\rb"] {
        let err = names_from_paths(&[PathBuf::from(name), PathBuf::from("b")]).unwrap_err();
        assert!(matches!(err, BulkRenameError::NewlineInName(ref n) if n == name));
    }
}

#[test]
fn crlf_list_of_plain_names_is_unchanged() {
    let old = names_from_paths(&[PathBuf::from("report"), PathBuf::from("b")]).unwrap();
    let new = parse_list("report\r\nb\r\n");
    assert!(matches!(validate(&old, &new), Err(BulkRenameError::NoChange)));
}

#[cfg(unix)]
#[test]
fn non_utf8_name_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    let p = PathBuf::from(OsStr::from_bytes(b"bad\xffname"));
    let err = names_from_paths(&[p]).unwrap_err();
    assert!(matches!(err, BulkRenameError::NonUtf8Path(_)));
}
