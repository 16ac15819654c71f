use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Result};

/// Row-number column from a spreadsheet paste: digits, then tabs or a wide gap.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\s*(?:\t+|\s{2,})").unwrap());

pub fn is_header_candidate(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

/// Split raw pasted text into one block per section.
///
/// A header candidate starts a new block, a blank line ends the current one.
pub fn split_into_blocks(raw: &str) -> Result<Vec<String>> {
    let normalized = raw.replace("\r\n", "\n");
    if normalized.trim().is_empty() {
        return Err(ParseError::EmptyCatalog);
    }

    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.split('\n') {
        if line.trim().is_empty() {
            flush(&mut current, &mut blocks);
            continue;
        }
        if is_header_candidate(line) && !current.is_empty() {
            flush(&mut current, &mut blocks);
        }
        current.push(line);
    }
    flush(&mut current, &mut blocks);

    if blocks.is_empty() {
        return Err(ParseError::NoBlocksFound);
    }
    Ok(blocks)
}

fn flush(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let block = current.join("\n").trim().to_string();
    if !block.is_empty() {
        blocks.push(block);
    }
    current.clear();
}
