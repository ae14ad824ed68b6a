//! Line classification and block assimilation
//!
//! `parse` splits a buffer into lines, classifies every line into a
//! single-line [`Block`], then folds the blocks left to right so that
//! neighbouring lines of the same kind end up in one block.

use crate::block::Block;
use crate::language::Language;

/// Split `text` on `\r\n`, `\r` or `\n`.
///
/// Mixed line endings are fine. A trailing line break yields a trailing empty
/// line, so no line of the input is lost.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Classify one line. Blank wins over comment, and comment wins over code.
pub fn classify(line: &str, language: &Language) -> Block {
    if language.is_empty(line) {
        Block::blank()
    } else if language.is_comment(line) {
        Block::prose(language.parse_comment(line))
    } else {
        Block::code(line, language.name())
    }
}

/// Fold single-line blocks into merged blocks.
///
/// Each incoming block is merged into the last accumulated one when
/// [`Block::can_assimilate`] allows it, and pushed as a new block otherwise.
pub fn assimilate(blocks: impl IntoIterator<Item = Block>) -> Vec<Block> {
    blocks.into_iter().fold(Vec::new(), |mut merged: Vec<Block>, block| {
        match merged.last_mut() {
            Some(last) if last.can_assimilate(&block) => last.assimilate(block),
            _ => merged.push(block),
        }
        merged
    })
}

/// Parse a whole buffer into merged blocks.
pub fn parse(text: &str, language: &Language) -> Vec<Block> {
    let lines = split_lines(text);
    let line_count = lines.len();
    let blocks = assimilate(lines.into_iter().map(|line| classify(line, language)));

    tracing::debug!(
        "Parsed {} {} lines into {} blocks",
        line_count,
        language.name(),
        blocks.len()
    );
    blocks
}
