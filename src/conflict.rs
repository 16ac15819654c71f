use crate::model::{Meeting, Section};

/// Same day and the half-open `[start, end)` intervals intersect. Back-to-back
/// meetings do not conflict.
pub fn overlaps(a: &Meeting, b: &Meeting) -> bool {
    if a.day != b.day {
        return false;
    }
    a.start.max(b.start) < a.end.min(b.end)
}

/// Any meeting of `a` overlaps any meeting of `b`.
pub fn sections_overlap(a: &Section, b: &Section) -> bool {
    a.meetings
        .iter()
        .any(|ma| b.meetings.iter().any(|mb| overlaps(ma, mb)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;

    fn meeting(day: u8, start: u16, end: u16) -> Meeting {
        Meeting {
            day,
            start,
            end,
            room: None,
            kind: Kind::Lec,
        }
    }

    fn section(meetings: Vec<Meeting>) -> Section {
        Section {
            id: "X 1-01".to_string(),
            section_code: "01".to_string(),
            meetings,
            component: Kind::Lec,
            linked_group: None,
            capacity: None,
            enrolled: None,
            waitlist: None,
            open: None,
        }
    }

    #[test]
    fn partial_overlap() {
        assert!(overlaps(&meeting(1, 540, 600), &meeting(1, 570, 630)));
        assert!(overlaps(&meeting(1, 570, 630), &meeting(1, 540, 600)));
    }

    #[test]
    fn containment() {
        assert!(overlaps(&meeting(3, 480, 720), &meeting(3, 540, 590)));
    }

    #[test]
    fn touching_endpoints_do_not_conflict() {
        assert!(!overlaps(&meeting(1, 540, 590), &meeting(1, 590, 640)));
    }

    #[test]
    fn different_days_never_conflict() {
        assert!(!overlaps(&meeting(1, 540, 590), &meeting(2, 540, 590)));
    }

    #[test]
    fn section_level() {
        let mwf = section(vec![meeting(1, 540, 590), meeting(3, 540, 590), meeting(5, 540, 590)]);
        let tth = section(vec![meeting(2, 540, 615), meeting(4, 540, 615)]);
        let friday_lab = section(vec![meeting(5, 570, 750)]);
        assert!(!sections_overlap(&mwf, &tth));
        assert!(sections_overlap(&mwf, &friday_lab));
        assert!(sections_overlap(&friday_lab, &mwf));
    }
}
