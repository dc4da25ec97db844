//! Shell escaping for names shown in the review file and the generated script.
//!
//! `shell_escape` backslash-escapes metacharacters, falling back to single
//! quoting when the name holds characters a backslash cannot carry (control
//! characters and anything outside ASCII). `split_words` reads such text back
//! into literal words so the review file can be parsed without a shell.

use std::fmt;

/// Characters that get a backslash prefix when escaping.
const META_CHARS: &[char] = &[
    ' ', '\'', '"', '`', '&', '|', ';', '#', '$', '!', '(', ')', '[', ']', '<', '>', '\t',
];

/// Control characters (TAB excepted), DEL and every non-ASCII character.
#[inline]
fn is_unescapable(c: char) -> bool {
    (c.is_ascii_control() && c != '\t') || !c.is_ascii()
}

/// Escape by quoting: wrap in single quotes, turning each `'` into `'\''`.
pub fn shell_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    out.push_str(&s.replace('\'', "'\\''"));
    out.push('\'');
    out
}

/// Escape by adding backslashes; quotes the whole string if it must.
pub fn shell_escape(s: &str) -> String {
    if s.chars().any(is_unescapable) {
        return shell_quote(s);
    }
    // Backslashes first, otherwise the ones added below would be doubled too.
    let doubled = s.replace('\\', "\\\\");
    let mut out = String::with_capacity(doubled.len() + 8);
    for c in doubled.chars() {
        if META_CHARS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// One shell word after quote removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    /// True when the word was written without any quoting or escaping.
    pub bare: bool,
}

/// Words on one logical line, with the 1-based line number it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub raw: String,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    UnterminatedQuote { line: usize, quote: char },
    DanglingBackslash { line: usize },
}

impl WordError {
    pub fn line(&self) -> usize {
        match self {
            WordError::UnterminatedQuote { line, .. } | WordError::DanglingBackslash { line } => *line,
        }
    }
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::UnterminatedQuote { line, quote } => {
                write!(f, "unterminated {quote} quote starting on line {line}")
            }
            WordError::DanglingBackslash { line } => {
                write!(f, "backslash at end of input on line {line}")
            }
        }
    }
}

impl std::error::Error for WordError {}

#[derive(Default)]
struct Pending {
    text: String,
    started: bool,
    bare: bool,
}

impl Pending {
    fn push(&mut self, c: char, bare: bool) {
        if !self.started {
            self.started = true;
            self.bare = true;
        }
        self.bare &= bare;
        self.text.push(c);
    }

    /// Mark a word as started even if it ends up empty (e.g. `''`).
    fn open_quoted(&mut self) {
        self.started = true;
        self.bare = false;
    }

    fn finish(&mut self, words: &mut Vec<Word>) {
        if self.started {
            words.push(Word {
                text: std::mem::take(&mut self.text),
                bare: self.bare,
            });
        }
        *self = Pending::default();
    }
}

/// Split `text` into records of words, POSIX-shell style.
///
/// Unquoted spaces and tabs separate words; unquoted newlines separate
/// records. Backslash, single and double quotes are honoured. Blank records
/// are dropped.
pub fn split_words(text: &str) -> Result<Vec<Record>, WordError> {
    let mut records = Vec::new();
    let mut words = Vec::new();
    let mut cur = Pending::default();
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut raw = String::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\n' {
            raw.push(c);
        }
        match c {
            '\n' => {
                cur.finish(&mut words);
                if !words.is_empty() {
                    records.push(Record {
                        line: record_line,
                        raw: std::mem::take(&mut raw),
                        words: std::mem::take(&mut words),
                    });
                }
                raw.clear();
                line += 1;
                record_line = line;
            }
            ' ' | '\t' | '\r' => cur.finish(&mut words),
            '\\' => match chars.next() {
                // Line continuation.
                Some('\n') => {
                    raw.push('\n');
                    line += 1;
                }
                Some(n) => {
                    raw.push(n);
                    cur.push(n, false);
                }
                None => return Err(WordError::DanglingBackslash { line }),
            },
            '\'' => {
                let start = line;
                cur.open_quoted();
                loop {
                    match chars.next() {
                        Some('\'') => {
                            raw.push('\'');
                            break;
                        }
                        Some(q) => {
                            raw.push(q);
                            if q == '\n' {
                                line += 1;
                            }
                            cur.push(q, false);
                        }
                        None => {
                            return Err(WordError::UnterminatedQuote {
                                line: start,
                                quote: '\'',
                            });
                        }
                    }
                }
            }
            '"' => {
                let start = line;
                cur.open_quoted();
                loop {
                    match chars.next() {
                        Some('"') => {
                            raw.push('"');
                            break;
                        }
                        Some('\\') => {
                            raw.push('\\');
                            match chars.next() {
                                Some(e @ ('\\' | '"' | '$' | '`')) => {
                                    raw.push(e);
                                    cur.push(e, false);
                                }
                                Some('\n') => {
                                    raw.push('\n');
                                    line += 1;
                                }
                                Some(other) => {
                                    raw.push(other);
                                    cur.push('\\', false);
                                    cur.push(other, false);
                                }
                                None => {
                                    return Err(WordError::UnterminatedQuote {
                                        line: start,
                                        quote: '"',
                                    });
                                }
                            }
                        }
                        Some(q) => {
                            raw.push(q);
                            if q == '\n' {
                                line += 1;
                            }
                            cur.push(q, false);
                        }
                        None => {
                            return Err(WordError::UnterminatedQuote {
                                line: start,
                                quote: '"',
                            });
                        }
                    }
                }
            }
            other => cur.push(other, true),
        }
    }

    cur.finish(&mut words);
    if !words.is_empty() {
        records.push(Record {
            line: record_line,
            raw,
            words,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(shell_escape("report-2024.txt"), "report-2024.txt");
    }

    #[test]
    fn metacharacters_get_backslashes() {
        assert_eq!(shell_escape("a b"), "a\\ b");
        assert_eq!(shell_escape("x&y;z"), "x\\&y\\;z");
        assert_eq!(shell_escape("it's"), "it\\'s");
        assert_eq!(shell_escape("tab\there"), "tab\\\there");
    }

    #[test]
    fn backslashes_doubled_before_metachars() {
        // One literal backslash followed by a space: `\\` then `\ `.
        assert_eq!(shell_escape("a\\ b"), "a\\\\\\ b");
    }

    #[test]
    fn newline_forces_quoting() {
        assert_eq!(shell_escape("a\nb"), "'a\nb'");
    }

    #[test]
    fn quoted_single_quote_is_closed_and_reopened() {
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn split_marks_bare_words() {
        let recs = split_words("a\\ b -> 'c'").unwrap();
        assert_eq!(recs.len(), 1);
        let w = &recs[0].words;
        assert_eq!(w.len(), 3);
        assert_eq!(w[0], Word { text: "a b".into(), bare: false });
        assert_eq!(w[1], Word { text: "->".into(), bare: true });
        assert_eq!(w[2], Word { text: "c".into(), bare: false });
    }

    #[test]
    fn split_tracks_line_numbers_across_quoted_newlines() {
        let recs = split_words("'x\ny' -> z\n\nq -> r").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].line, 1);
        assert_eq!(recs[0].words[0].text, "x\ny");
        assert_eq!(recs[1].line, 4);
    }

    #[test]
    fn split_reports_unterminated_quote() {
        let err = split_words("ok\n'broken").unwrap_err();
        assert_eq!(err, WordError::UnterminatedQuote { line: 2, quote: '\'' });
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        let recs = split_words("'' -> b").unwrap();
        assert_eq!(recs[0].words[0], Word { text: String::new(), bare: false });
    }
}
