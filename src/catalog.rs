//! The accumulated catalog and the rules for folding new batches into it.
//!
//! A [`Catalog`] is a value: [`Catalog::merge`] returns a new catalog and never
//! mutates the one it was called on, so a caller can keep the previous state
//! around or discard the result without side effects.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::model::{push_distinct, Course, ParsedCatalog, Section};
use crate::parser::parse_catalog_detailed;

/// Courses keyed by code, plus every distinct warning raised by the imports
/// that built them. Iteration is always in ascending code order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CatalogRepr", into = "CatalogRepr")]
pub struct Catalog {
    courses: BTreeMap<String, Course>,
    warnings: Vec<String>,
}

/// Wire form: courses as a code-ordered list.
#[derive(Serialize, Deserialize)]
struct CatalogRepr {
    courses: Vec<Course>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a parsed batch into a copy of this catalog.
    pub fn merge(&self, batch: &[Course]) -> Catalog {
        let mut next = self.clone();
        let mut inserted = 0usize;
        let mut updated = 0usize;

        for incoming in batch {
            match next.courses.get_mut(&incoming.code) {
                Some(current) => {
                    merge_course(current, incoming);
                    updated += 1;
                }
                None => {
                    next.courses.insert(incoming.code.clone(), incoming.clone());
                    inserted += 1;
                }
            }
        }

        debug!(inserted, updated, courses = next.courses.len(), "merged batch into catalog");
        next
    }

    /// Merge a parse result, folding its warnings into the running set.
    pub fn merge_parsed(&self, parsed: &ParsedCatalog) -> Catalog {
        let mut next = self.merge(&parsed.courses);
        for warning in &parsed.warnings {
            push_distinct(&mut next.warnings, warning.clone());
        }
        next
    }

    /// Parse pasted text and merge it. On a parse failure nothing is merged.
    pub fn import(&self, raw: &str) -> Result<Catalog> {
        let parsed = parse_catalog_detailed(raw)?;
        Ok(self.merge_parsed(&parsed))
    }

    /// Distinct warnings across every merged batch, oldest first.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn into_courses(self) -> Vec<Course> {
        self.courses.into_values().collect()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.courses().flat_map(|course| course.sections.iter())
    }

    /// Every section id, for pruning exclusions that no longer apply.
    pub fn section_ids(&self) -> BTreeSet<String> {
        self.sections().map(|section| section.id.clone()).collect()
    }

    /// Ids of sections that are flagged closed or already full.
    pub fn closed_section_ids(&self) -> BTreeSet<String> {
        self.sections()
            .filter(|section| section.is_closed())
            .map(|section| section.id.clone())
            .collect()
    }
}

/// Fold `incoming` into an existing course with the same code.
fn merge_course(current: &mut Course, incoming: &Course) {
    let mut position: HashMap<String, usize> = current
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| (section.id.clone(), i))
        .collect();

    for section in &incoming.sections {
        match position.get(&section.id) {
            Some(&i) => current.sections[i] = section.clone(),
            None => {
                position.insert(section.id.clone(), current.sections.len());
                current.sections.push(section.clone());
            }
        }
    }

    for kind in &incoming.components {
        if !current.components.contains(kind) {
            current.components.push(*kind);
        }
    }

    if current.name.is_empty() {
        current.name = incoming.name.clone();
    }
    if current.units.is_none() {
        current.units = incoming.units;
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        Catalog::new().merge(&courses)
    }
}

impl From<CatalogRepr> for Catalog {
    fn from(repr: CatalogRepr) -> Self {
        let mut catalog = Catalog::from(repr.courses);
        for warning in repr.warnings {
            push_distinct(&mut catalog.warnings, warning);
        }
        catalog
    }
}

impl From<Catalog> for CatalogRepr {
    fn from(catalog: Catalog) -> Self {
        CatalogRepr {
            courses: catalog.courses.into_values().collect(),
            warnings: catalog.warnings,
        }
    }
}
