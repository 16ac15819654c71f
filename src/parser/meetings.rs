use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::{ParseError, Result};
use crate::model::{Kind, Meeting};

static MEETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(TH|SAT|SU|M|T|W|F|S)\s+([0-9]{1,2}:[0-9]{2})(AM|PM)-([0-9]{1,2}:[0-9]{2})(AM|PM)\s+([A-Z0-9]+(?:[ -][A-Z0-9]+)*)\s+(LEC|LAB|SEM|LEC/LAB)$",
    )
    .unwrap()
});

/// Day tokens, Monday = 1. `S` and `SAT` both mean Saturday.
const DAY_TOKENS: &[(&str, u8)] = &[
    ("M", 1),
    ("T", 2),
    ("W", 3),
    ("TH", 4),
    ("F", 5),
    ("S", 6),
    ("SAT", 6),
    ("SU", 7),
];

const KIND_TOKENS: &[(&str, Kind)] = &[
    ("LEC", Kind::Lec),
    ("LAB", Kind::Lab),
    ("SEM", Kind::Sem),
    ("LEC/LAB", Kind::Oth),
];

pub fn is_meeting_line(line: &str) -> bool {
    MEETING_RE.is_match(line.trim())
}

/// Decode `<DAY> <H:MM><AM|PM>-<H:MM><AM|PM> <ROOM> <KIND>`.
pub fn parse_meeting_line(line: &str) -> Result<Meeting> {
    let line = line.trim();
    let caps = MEETING_RE
        .captures(line)
        .ok_or_else(|| ParseError::InvalidTimeToken(line.to_string()))?;

    let day = parse_day(&caps[1])?;
    let start = parse_clock(&caps[2], &caps[3])?;
    let end = parse_clock(&caps[4], &caps[5])?;
    if end <= start {
        return Err(ParseError::NonPositiveDuration(line.to_string()));
    }

    let kind = KIND_TOKENS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(&caps[7]))
        .map_or(Kind::Oth, |(_, kind)| *kind);

    trace!(day, start, end, kind = kind.as_str(), "decoded meeting line");
    Ok(Meeting {
        day,
        start,
        end,
        room: Some(caps[6].to_string()),
        kind,
    })
}

pub fn parse_day(token: &str) -> Result<u8> {
    DAY_TOKENS
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(token.trim()))
        .map(|(_, day)| *day)
        .ok_or_else(|| ParseError::UnknownDayToken(token.to_string()))
}

/// `H:MM` plus meridiem to minutes since midnight. `12:xxAM` is just after
/// midnight, `12:xxPM` just after noon.
pub fn parse_clock(time: &str, meridiem: &str) -> Result<u16> {
    let invalid = || ParseError::InvalidTimeToken(format!("{time}{meridiem}"));

    let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;
    let hour: u16 = hour.parse().map_err(|_| invalid())?;
    let minute: u16 = minute.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    let mut h = hour % 12;
    if meridiem.eq_ignore_ascii_case("PM") {
        h += 12;
    } else if !meridiem.eq_ignore_ascii_case("AM") {
        return Err(invalid());
    }
    Ok(h * 60 + minute)
}

/// Minutes since midnight back to the 12-hour `H:MMAM` form.
pub fn format_time(minutes: u16) -> String {
    let h = minutes / 60;
    let m = minutes % 60;
    let meridiem = if h >= 12 { "PM" } else { "AM" };
    let hour12 = match h % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{m:02}{meridiem}")
}

/// Canonical token for a day number; Saturday renders as `SAT`.
pub fn day_label(day: u8) -> &'static str {
    match day {
        1 => "M",
        2 => "T",
        3 => "W",
        4 => "TH",
        5 => "F",
        6 => "SAT",
        7 => "SU",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_basic_line() {
        let m = parse_meeting_line("M 9:00AM-9:50AM SCI-100 LEC").unwrap();
        assert_eq!(m.day, 1);
        assert_eq!(m.start, 540);
        assert_eq!(m.end, 590);
        assert_eq!(m.room.as_deref(), Some("SCI-100"));
        assert_eq!(m.kind, Kind::Lec);
    }

    #[test]
    fn case_insensitive_and_multi_token_room() {
        let m = parse_meeting_line("th 1:30pm-4:20pm eng 2 b-14 lab").unwrap();
        assert_eq!(m.day, 4);
        assert_eq!(m.start, 810);
        assert_eq!(m.end, 980);
        assert_eq!(m.room.as_deref(), Some("eng 2 b-14"));
        assert_eq!(m.kind, Kind::Lab);
    }

    #[test]
    fn lec_lab_is_generic() {
        let m = parse_meeting_line("F 10:00AM-11:50AM HUM 120 LEC/LAB").unwrap();
        assert_eq!(m.kind, Kind::Oth);
    }

    #[test]
    fn day_tokens() {
        assert_eq!(parse_day("S").unwrap(), 6);
        assert_eq!(parse_day("sat").unwrap(), 6);
        assert_eq!(parse_day("SU").unwrap(), 7);
        assert_eq!(parse_day("T").unwrap(), 2);
        assert_eq!(parse_day("TH").unwrap(), 4);
        assert!(matches!(parse_day("X"), Err(ParseError::UnknownDayToken(t)) if t == "X"));
    }

    #[test]
    fn saturday_and_sunday_lines() {
        assert_eq!(parse_meeting_line("SAT 8:00AM-9:00AM A1 SEM").unwrap().day, 6);
        assert_eq!(parse_meeting_line("S 8:00AM-9:00AM A1 SEM").unwrap().day, 6);
        assert_eq!(parse_meeting_line("SU 8:00AM-9:00AM A1 SEM").unwrap().day, 7);
    }

    #[test]
    fn midnight_and_noon_boundaries() {
        let m = parse_meeting_line("M 12:00AM-1:00AM X1 LEC").unwrap();
        assert_eq!((m.start, m.end), (0, 60));
        let m = parse_meeting_line("M 12:00PM-1:00PM X1 LEC").unwrap();
        assert_eq!((m.start, m.end), (720, 780));
    }

    #[test]
    fn zero_duration_rejected() {
        let err = parse_meeting_line("M 9:00AM-9:00AM SCI-100 LEC").unwrap_err();
        assert!(matches!(err, ParseError::NonPositiveDuration(_)));
    }

    #[test]
    fn no_wrap_past_midnight() {
        let err = parse_meeting_line("F 11:00PM-12:30AM SCI-100 LEC").unwrap_err();
        assert!(matches!(err, ParseError::NonPositiveDuration(_)));
    }

    #[test]
    fn out_of_range_clock() {
        assert!(matches!(parse_clock("13:00", "PM"), Err(ParseError::InvalidTimeToken(t)) if t == "13:00PM"));
        assert!(parse_clock("9:75", "AM").is_err());
        assert!(parse_clock("0:30", "AM").is_err());
        let err = parse_meeting_line("M 9:00AM-13:00PM SCI-100 LEC").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimeToken(_)));
    }

    #[test]
    fn not_meeting_lines() {
        assert!(!is_meeting_line("100/200\t30\t28\t0\tNo"));
        assert!(!is_meeting_line("M 9:00AM-9:50AM SCI-100"));
        assert!(!is_meeting_line("MW 9:00AM-9:50AM SCI-100 LEC"));
        assert!(!is_meeting_line("M 9:00 AM-9:50 AM SCI-100 LEC"));
        assert!(is_meeting_line("  W 9:00AM-9:50AM SCI-100 LEC  "));
    }

    #[test]
    fn only_ascii_digits_form_times() {
        assert!(!is_meeting_line("M \u{0669}:00AM-9:50AM X1 LEC"));
        assert!(!is_meeting_line("M 9:00AM-\u{FF19}:50AM X1 LEC"));
    }

    #[test]
    fn clock_round_trip() {
        for hour in 1..=12u16 {
            for minute in 0..60u16 {
                for meridiem in ["AM", "PM"] {
                    let label = format!("{hour}:{minute:02}{meridiem}");
                    let minutes = parse_clock(&format!("{hour}:{minute:02}"), meridiem).unwrap();
                    assert!(minutes < 1440);
                    assert_eq!(format_time(minutes), label);
                }
            }
        }
    }

    #[test]
    fn day_round_trip() {
        for day in 1..=7u8 {
            assert_eq!(parse_day(day_label(day)).unwrap(), day);
        }
    }
}
