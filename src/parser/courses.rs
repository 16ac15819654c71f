use std::collections::{HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::sections::ParsedSection;
use crate::model::{push_distinct, Course, Kind, ParsedCatalog, Section};

/// Working state for one course code while a batch is folded.
#[derive(Debug)]
struct CourseAggregate {
    code: String,
    /// Distinct names with their counts, in first-seen order.
    names: Vec<(String, usize)>,
    units: Option<u32>,
    has_lab: bool,
    sections: Vec<Section>,
}

impl CourseAggregate {
    fn new(code: String) -> Self {
        CourseAggregate {
            code,
            names: Vec::new(),
            units: None,
            has_lab: false,
            sections: Vec::new(),
        }
    }

    fn absorb(&mut self, parsed: ParsedSection) {
        match self.names.iter_mut().find(|(name, _)| *name == parsed.course_name) {
            Some((_, count)) => *count += 1,
            None => self.names.push((parsed.course_name, 1)),
        }
        self.units = self.units.or(parsed.units);
        self.has_lab |= parsed.section.component == Kind::Lab;
        self.sections.push(parsed.section);
    }

    /// Most frequent name; an equal count never displaces an earlier name.
    fn canonical_name(&self) -> &str {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.names {
            if best.map_or(true, |(_, count)| entry.1 > *count) {
                best = Some(entry);
            }
        }
        best.map_or("", |(name, _)| name.as_str())
    }

    /// Names seen so far, once there is more than one.
    fn conflict_warning(&self) -> Option<String> {
        if self.names.len() < 2 {
            return None;
        }
        let names: Vec<&str> = self.names.iter().map(|(name, _)| name.as_str()).collect();
        Some(format!(
            "Conflicting course names detected for {}: {}",
            self.code,
            names.join(", ")
        ))
    }

    fn finish(self) -> Course {
        let name = self.canonical_name().to_string();
        let components = if self.has_lab {
            vec![Kind::Lec, Kind::Lab]
        } else {
            vec![Kind::Lec]
        };
        Course {
            id: self.code.clone(),
            sections: dedupe_sections(self.sections),
            code: self.code,
            name,
            units: self.units,
            components,
        }
    }
}

/// First occurrence of each section code + meeting slot sequence wins.
fn dedupe_sections(sections: Vec<Section>) -> Vec<Section> {
    let mut seen = HashSet::new();
    sections
        .into_iter()
        .filter(|section| {
            let fresh = seen.insert(section.dedup_key());
            if !fresh {
                trace!(section = %section.id, "dropping duplicate section");
            }
            fresh
        })
        .collect()
}

/// Group parsed sections by course code into sorted courses plus warnings.
pub fn aggregate_courses(parsed: Vec<ParsedSection>) -> ParsedCatalog {
    let mut aggregates: Vec<CourseAggregate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut warnings: Vec<String> = Vec::new();

    for item in parsed {
        let idx = *index.entry(item.course_code.clone()).or_insert_with(|| {
            aggregates.push(CourseAggregate::new(item.course_code.clone()));
            aggregates.len() - 1
        });
        aggregates[idx].absorb(item);
        if let Some(warning) = aggregates[idx].conflict_warning() {
            if push_distinct(&mut warnings, warning.clone()) {
                warn!(warning = %warning, "course name conflict");
            }
        }
    }

    let mut courses: Vec<Course> = aggregates.into_iter().map(CourseAggregate::finish).collect();
    courses.sort_by(|a, b| a.code.cmp(&b.code));
    debug!(courses = courses.len(), warnings = warnings.len(), "aggregated courses");

    ParsedCatalog { courses, warnings }
}
