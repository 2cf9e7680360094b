//! Capture document data model and JSON loader.
//!
//! A capture document is the pre-computed, fully in-memory result of
//! processing a multi-run data capture: one record per run ("page"), each
//! carrying a display title and summary metrics for the status bar.

use crate::traits::PageRecord;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One page of a capture document: a single run within a multi-run capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturePage {
    /// Stable identifier of the run within the document
    pub id: String,
    /// Human-readable title shown in the page selection control
    pub title: String,
    /// Timestamp the run started, as recorded by the capturing tool
    #[serde(default)]
    pub started: Option<String>,
    /// Number of entries (requests, samples) captured in this run
    #[serde(default)]
    pub entry_count: usize,
    /// Total duration of the run in milliseconds
    #[serde(default)]
    pub duration_ms: f64,
}

impl PageRecord for CapturePage {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A parsed multi-run capture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureDoc {
    /// Format version of the document
    pub version: String,
    /// Tool that produced the capture, if recorded
    #[serde(default)]
    pub creator: Option<String>,
    /// The pages of the document, in capture order
    pub pages: Vec<CapturePage>,
}

/// Loads a capture document from a JSON file.
///
/// An empty `pages` array parses successfully here; constructing a
/// `PageSelector` over it is what fails, with `PagingError::EmptyDocument`.
pub fn load_doc<P: AsRef<Path>>(path: P) -> Result<CaptureDoc> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open capture document: {}", path.display()))?;
    let reader = BufReader::new(file);
    let doc: CaptureDoc = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse capture document: {}", path.display()))?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "version": "1.0",
            "creator": "capture-tool 3.2",
            "pages": [
                {"id": "page_1", "title": "Run 1", "started": "2026-08-01T10:00:00Z", "entry_count": 42, "duration_ms": 1375.5},
                {"id": "page_2", "title": "Run 2", "started": "2026-08-01T10:05:00Z", "entry_count": 17, "duration_ms": 612.0}
            ]
        }"#;

        let doc: CaptureDoc = serde_json::from_str(json).unwrap();

        assert_eq!(doc.version, "1.0");
        assert_eq!(doc.creator.as_deref(), Some("capture-tool 3.2"));
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].title(), "Run 1");
        assert_eq!(doc.pages[1].entry_count, 17);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "version": "1.0",
            "pages": [{"id": "page_1", "title": "Run 1"}]
        }"#;

        let doc: CaptureDoc = serde_json::from_str(json).unwrap();

        assert_eq!(doc.creator, None);
        assert_eq!(doc.pages[0].started, None);
        assert_eq!(doc.pages[0].entry_count, 0);
        assert_eq!(doc.pages[0].duration_ms, 0.0);
    }

    #[test]
    fn test_load_doc_missing_file_reports_path() {
        let err = load_doc("/nonexistent/capture.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/capture.json"));
    }
}
