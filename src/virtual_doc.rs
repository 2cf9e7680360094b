//! Synthetic capture document generation.
//!
//! Produces an in-memory multi-run document without touching the filesystem,
//! for the GUI's demo button and for tests. Generation is seeded so the same
//! seed always yields the same document.

use crate::doc::{CaptureDoc, CapturePage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MIN_ENTRIES: usize = 5;
const MAX_ENTRIES: usize = 120;

/// Generates a deterministic synthetic capture document with `page_count` runs.
///
/// Page titles are "Run 1".."Run N"; entry counts and durations are drawn from
/// a seeded generator for reproducibility.
pub fn generate_virtual_doc(page_count: usize, seed: u64) -> CaptureDoc {
    let mut rng = StdRng::seed_from_u64(seed);

    let pages = (0..page_count)
        .map(|i| {
            let entry_count = rng.gen_range(MIN_ENTRIES..=MAX_ENTRIES);
            // Roughly 20-60ms per entry keeps demo durations plausible.
            let duration_ms = entry_count as f64 * rng.gen_range(20.0..60.0);
            CapturePage {
                id: format!("page_{}", i + 1),
                title: format!("Run {}", i + 1),
                started: None,
                entry_count,
                duration_ms,
            }
        })
        .collect();

    CaptureDoc {
        version: "1.0".to_string(),
        creator: Some("rcascade virtual document".to_string()),
        pages,
    }
}
