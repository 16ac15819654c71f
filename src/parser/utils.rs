//! Cell-level helpers shared by header and metadata parsing.

/// Split a pasted table row into cells.
///
/// Tab-delimited cells win when the row has more than one of them; interior
/// empty cells are kept so positional columns stay aligned. Otherwise the row
/// is split on runs of whitespace.
pub fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim();
    let tab_cells: Vec<&str> = line.split('\t').map(str::trim).collect();
    if tab_cells.iter().filter(|cell| !cell.is_empty()).count() > 1 {
        return tab_cells;
    }
    line.split_whitespace().collect()
}

/// Lenient integer read: leading ASCII digits, anything after is ignored.
/// Absent or non-numeric cells yield `None`.
pub fn parse_optional_number(raw: Option<&str>) -> Option<u32> {
    let raw = raw?.trim();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits_end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(raw.len(), |(i, _)| i);
    raw[..digits_end].parse().ok()
}

/// The source column reads like "Closed": `yes` means not open.
pub fn normalize_open_flag(raw: Option<&str>) -> Option<bool> {
    let token = raw?.trim();
    if token.eq_ignore_ascii_case("yes") {
        Some(false)
    } else if token.eq_ignore_ascii_case("no") {
        Some(true)
    } else {
        None
    }
}
