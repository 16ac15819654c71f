use serde::{Deserialize, Serialize};

/// Meeting or section component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "LEC")]
    Lec,
    #[serde(rename = "LAB")]
    Lab,
    #[serde(rename = "SEM")]
    Sem,
    #[serde(rename = "OTH")]
    Oth,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Lec => "LEC",
            Kind::Lab => "LAB",
            Kind::Sem => "SEM",
            Kind::Oth => "OTH",
        }
    }
}

/// One weekly time slot. `day` is 1 (Mon) through 7 (Sun); `start` and `end`
/// are minutes since midnight with `end > start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub day: u8,
    pub start: u16,
    pub end: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub kind: Kind,
}

impl Meeting {
    /// Short display label, e.g. `M 9:00AM-9:50AM`.
    pub fn label(&self) -> String {
        format!(
            "{} {}-{}",
            crate::parser::meetings::day_label(self.day),
            crate::parser::meetings::format_time(self.start),
            crate::parser::meetings::format_time(self.end),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub section_code: String,
    pub meetings: Vec<Meeting>,
    pub component: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waitlist: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
}

impl Section {
    /// Closed when explicitly flagged so, or when enrollment has reached capacity.
    pub fn is_closed(&self) -> bool {
        if self.open == Some(false) {
            return true;
        }
        match (self.capacity, self.enrolled) {
            (Some(capacity), Some(enrolled)) => enrolled >= capacity,
            _ => false,
        }
    }

    /// Key used to drop repeated pastes of the same section within a batch.
    pub(crate) fn dedup_key(&self) -> String {
        let slots: Vec<String> = self
            .meetings
            .iter()
            .map(|m| format!("{}-{}-{}", m.day, m.start, m.end))
            .collect();
        format!("{}:{}", self.section_code, slots.join("|"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<u32>,
    #[serde(default)]
    pub components: Vec<Kind>,
    pub sections: Vec<Section>,
}

/// Result of one parse call: courses in code order plus distinct warnings in
/// the order they were first raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCatalog {
    pub courses: Vec<Course>,
    pub warnings: Vec<String>,
}

/// Append `warning` unless an identical string is already present. Warnings
/// stay in the order they were first raised.
pub(crate) fn push_distinct(warnings: &mut Vec<String>, warning: String) -> bool {
    if warnings.contains(&warning) {
        return false;
    }
    warnings.push(warning);
    true
}
