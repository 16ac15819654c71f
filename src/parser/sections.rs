use tracing::debug;

use super::meetings::{is_meeting_line, parse_meeting_line};
use super::utils::{normalize_open_flag, parse_optional_number, split_cells};
use crate::error::{ParseError, Result};
use crate::model::{Kind, Meeting, Section};

const HEADER_MIN_CELLS: usize = 6;
const META_MIN_CELLS: usize = 5;

/// One block decoded into a section plus the course key that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    pub course_code: String,
    pub course_name: String,
    pub units: Option<u32>,
    pub section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningMeetings,
    ConsumedMetadata,
}

/// Meeting lines and the metadata line split out of a block body.
#[derive(Debug, Default, PartialEq, Eq)]
struct BlockBody<'a> {
    meeting_lines: Vec<&'a str>,
    meta_line: Option<String>,
}

/// Meeting lines run until the first non-meeting line; that line and every
/// line after it form the single logical metadata line.
fn scan_body<'a>(lines: &[&'a str]) -> BlockBody<'a> {
    let mut state = ScanState::ScanningMeetings;
    let mut body = BlockBody::default();
    let mut meta_parts: Vec<&str> = Vec::new();

    for &line in lines {
        match state {
            ScanState::ScanningMeetings if is_meeting_line(line) => {
                body.meeting_lines.push(line);
            }
            ScanState::ScanningMeetings => {
                meta_parts.push(line);
                state = ScanState::ConsumedMetadata;
            }
            ScanState::ConsumedMetadata => meta_parts.push(line),
        }
    }

    if state == ScanState::ConsumedMetadata {
        body.meta_line = Some(meta_parts.join(" "));
    }
    body
}

/// Decode one block. Any failure aborts the block and is logged with its kind.
pub fn parse_section_block(block: &str) -> Result<ParsedSection> {
    decode_block(block).inspect_err(|err| {
        debug!(kind = ?err.kind(), text = err.offending_text(), "section block rejected");
    })
}

fn decode_block(block: &str) -> Result<ParsedSection> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let Some((&header_line, rest)) = lines.split_first() else {
        return Err(ParseError::MalformedHeader(block.to_string()));
    };

    let header = split_cells(header_line);
    if header.len() < HEADER_MIN_CELLS {
        return Err(ParseError::MalformedHeader(header_line.to_string()));
    }
    let (row_no, course_code, course_name, units_raw, section_code) =
        (header[0], header[2], header[3], header[4], header[5]);
    if [row_no, course_code, course_name, section_code]
        .iter()
        .any(|cell| cell.is_empty())
    {
        return Err(ParseError::MalformedHeader(header_line.to_string()));
    }
    let units = parse_optional_number(Some(units_raw));

    let body = scan_body(rest);
    if body.meeting_lines.is_empty() {
        return Err(ParseError::NoMeetingLines(block.to_string()));
    }
    let Some(meta_line) = body.meta_line else {
        return Err(ParseError::MissingMetadata(block.to_string()));
    };

    let meetings = body
        .meeting_lines
        .iter()
        .map(|line| parse_meeting_line(line))
        .collect::<Result<Vec<_>>>()?;

    let meta = split_cells(&meta_line);
    if meta.len() < META_MIN_CELLS {
        return Err(ParseError::MalformedMetadata(meta_line));
    }
    let room_group = meta[0];

    let component = if meetings.iter().any(|m| m.kind == Kind::Lab) {
        Kind::Lab
    } else {
        Kind::Lec
    };
    let linked_group = derive_linked_group(course_code, room_group, &meetings);

    let section = Section {
        id: format!("{course_code}-{section_code}"),
        section_code: section_code.to_string(),
        component,
        linked_group,
        capacity: parse_optional_number(meta.get(1).copied()),
        enrolled: parse_optional_number(meta.get(2).copied()),
        waitlist: parse_optional_number(meta.get(3).copied()),
        open: normalize_open_flag(meta.get(4).copied()),
        meetings,
    };

    Ok(ParsedSection {
        course_code: course_code.to_string(),
        course_name: course_name.to_string(),
        units,
        section,
    })
}

/// Tag a section whose room group lists both a lecture and a lab slot.
fn derive_linked_group(course_code: &str, room_group: &str, meetings: &[Meeting]) -> Option<String> {
    if !room_group.contains('/') {
        return None;
    }
    let has_lab = meetings.iter().any(|m| m.kind == Kind::Lab);
    let has_lec = meetings.iter().any(|m| m.kind == Kind::Lec);
    (has_lab && has_lec).then(|| format!("{course_code}:{room_group}"))
}
