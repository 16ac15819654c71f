//! Parse copy-pasted registrar catalog text into de-duplicated courses and
//! sections, and merge successive batches into one catalog.
//!
//! - **parser**: block segmentation, meeting lines, section blocks, course aggregation
//! - **catalog**: the accumulated catalog and its merge rules
//! - **conflict**: meeting/section overlap predicates for the scheduler
//! - **model**: courses, sections and meetings as handed to collaborators
//!
//! ```
//! use registrar_catalog::{parse_catalog_detailed, Catalog};
//!
//! let raw = "1\t\tCS 101\tIntro to CS\t4\t01\nM 9:00AM-9:50AM SCI-100 LEC\n100/200\t30\t28\t0\tNo";
//! let parsed = parse_catalog_detailed(raw).unwrap();
//! assert_eq!(parsed.courses[0].sections[0].id, "CS 101-01");
//!
//! let catalog = Catalog::new().merge(&parsed.courses);
//! assert!(catalog.section_ids().contains("CS 101-01"));
//! ```

pub mod catalog;
pub mod conflict;
pub mod error;
pub mod model;
pub mod parser;

pub use catalog::Catalog;
pub use conflict::{overlaps, sections_overlap};
pub use error::{ErrorKind, ParseError, Result};
pub use model::{Course, Kind, Meeting, ParsedCatalog, Section};
pub use parser::meetings::{day_label, format_time};
pub use parser::{parse_catalog, parse_catalog_detailed};
