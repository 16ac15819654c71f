pub mod blocks;
pub mod courses;
pub mod meetings;
pub mod sections;
pub mod utils;

use tracing::debug;

use crate::error::Result;
use crate::model::{Course, ParsedCatalog};

/// Segment the paste, decode every block, then fold the sections into sorted
/// courses with their name-conflict warnings.
///
/// All or nothing: the first block that fails to parse aborts the call.
pub fn parse_catalog_detailed(raw: &str) -> Result<ParsedCatalog> {
    let blocks = blocks::split_into_blocks(raw)?;
    debug!(blocks = blocks.len(), "segmented catalog");

    let parsed = blocks
        .iter()
        .map(|block| sections::parse_section_block(block))
        .collect::<Result<Vec<_>>>()?;
    debug!(sections = parsed.len(), "parsed section blocks");

    Ok(courses::aggregate_courses(parsed))
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Course>> {
    parse_catalog_detailed(raw).map(|parsed| parsed.courses)
}

/// Collects formatted `tracing` output so tests can assert on log events.
#[cfg(test)]
pub(crate) mod log_capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Sink {
        type Writer = Sink;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    pub fn capture(f: impl FnOnce()) -> String {
        let sink = Sink::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }
}
