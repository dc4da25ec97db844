use bulk_rename::{shell_escape, shell_quote, split_words};
use proptest::prelude::*;

/// Walk a quoted token and return the text that sits outside single quotes.
fn outside_quotes(token: &str) -> String {
    let mut out = String::new();
    let mut inside = false;
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        match (inside, c) {
            (_, '\'') => inside = !inside,
            (false, '\\') => {
                out.push(c);
                out.extend(chars.next());
            }
            (false, _) => out.push(c),
            (true, _) => {}
        }
    }
    out
}

fn unescape_one(token: &str) -> String {
    let recs = split_words(token).expect("escaped token must tokenize");
    assert_eq!(recs.len(), 1, "token {token:?} spans several records");
    assert_eq!(recs[0].words.len(), 1, "token {token:?} splits into several words");
    recs[0].words[0].text.clone()
}

#[test]
fn high_and_control_chars_force_single_quotes() {
    for name in ["caf\u{e9}.txt", "it's caf\u{e9}", "del\u{7f}", "bell\u{7}", "line\nbreak", "\u{80}x", "日本.txt"] {
        let esc = shell_escape(name);
        assert!(esc.starts_with('\'') && esc.ends_with('\''), "not quoted: {esc:?}");
        let outside = outside_quotes(&esc);
        assert!(
            outside.replace("\\'", "").is_empty(),
            "raw chars leaked outside quotes for {name:?}: {outside:?}"
        );
    }
}

#[test]
fn tab_alone_is_backslash_escaped() {
    assert_eq!(shell_escape("a\tb"), "a\\\tb");
}

#[test]
fn embedded_single_quote_round_trips() {
    for name in ["it's", "'", "''", "caf\u{e9} it's", "a'b'c"] {
        assert_eq!(unescape_one(&shell_escape(name)), name);
        assert_eq!(unescape_one(&shell_quote(name)), name);
    }
}

#[test]
fn arrow_inside_name_is_not_bare() {
    let esc = shell_escape("a -> b");
    assert_eq!(esc, "a\\ -\\>\\ b");
    let recs = split_words(&esc).unwrap();
    assert_eq!(recs[0].words.len(), 1);
    assert!(!recs[0].words[0].bare);
}

#[cfg(unix)]
#[test]
fn real_shell_agrees() {
    use std::process::Command;
    // Glob characters are left bare by the escaper, so keep them out of this check.
    let names = [
        "plain.txt",
        "with space",
        "it's",
        "semi;colon & amp",
        "$HOME `cmd` \"dq\"",
        "back\\slash",
        "paren (1) [2] <3> #4 !5 |6",
        "caf\u{e9} it's",
        "new\nline",
    ];
    for name in names {
        let out = Command::new("sh")
            .arg("-c")
            .arg(format!("printf '%s' {}", shell_escape(name)))
            .output()
            .expect("spawn sh");
        assert!(out.status.success());
        assert_eq!(String::from_utf8(out.stdout).unwrap(), name, "shell disagreed for {name:?}");
    }
}

proptest! {
    #[test]
    fn split_words_inverts_shell_escape(name in "\\PC{1,24}|[ -~]{1,24}|.{1,12}") {
        let recs = split_words(&shell_escape(&name)).unwrap();
        prop_assert_eq!(recs.len(), 1);
        prop_assert_eq!(recs[0].words.len(), 1);
        prop_assert_eq!(&recs[0].words[0].text, &name);
    }
}
