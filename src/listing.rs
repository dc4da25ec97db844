//! The two text files the user edits.
//!
//! - List file: one name per line, in argument order.
//! - Review file: one `<old> -> <new>` line per changed entry, both sides
//!   shell-escaped. Parsing goes through [`split_words`], so the separator is
//!   only recognised as a bare `->` word; an escaped name that happens to
//!   contain ` -> ` stays in one piece.

use crate::errors::BulkRenameError;
use crate::escape::{shell_escape, split_words};
use crate::plan::RenamePair;
use crate::validate::warn_duplicate_targets;

const SEPARATOR: &str = "->";

pub fn render_list(names: &[String]) -> String {
    names.join("\n")
}

/// Split an edited list back into names. One trailing newline is ignored.
pub fn parse_list(text: &str) -> Vec<String> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

pub fn render_review(pairs: &[RenamePair]) -> String {
    pairs
        .iter()
        .map(|p| {
            format!(
                "{} {SEPARATOR} {}",
                shell_escape(&p.old.to_string_lossy()),
                shell_escape(&p.new.to_string_lossy())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse an edited review file into the pairs still wanted.
///
/// Blank lines are skipped and so are lines whose two sides are equal. A file
/// with nothing left to rename is [`BulkRenameError::NoChange`].
pub fn parse_review(text: &str) -> Result<Vec<RenamePair>, BulkRenameError> {
    let records = split_words(text).map_err(|e| BulkRenameError::MalformedPair {
        line: e.line(),
        content: e.to_string(),
    })?;

    let mut pairs = Vec::with_capacity(records.len());
    for rec in records {
        let ok = rec.words.len() == 3
            && rec.words[1].bare
            && rec.words[1].text == SEPARATOR
            && !rec.words[0].text.is_empty()
            && !rec.words[2].text.is_empty();
        if !ok {
            return Err(BulkRenameError::MalformedPair {
                line: rec.line,
                content: rec.raw,
            });
        }
        let pair = RenamePair::new(&rec.words[0].text, &rec.words[2].text);
        if !pair.is_noop() {
            pairs.push(pair);
        }
    }

    if pairs.is_empty() {
        return Err(BulkRenameError::NoChange);
    }
    warn_duplicate_targets(&pairs);
    Ok(pairs)
}
