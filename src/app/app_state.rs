//! Centralized application state for the cascade viewer.
//!
//! Holds the loaded capture document, the persistent page-selection index,
//! and the retained select box widget the selector populates on load.

use crate::ui::select_box::PageSelectBox;
use rcascade::{CaptureDoc, PageSelector, PagingError};

/// Main application state for the viewer.
pub struct AppState {
    /// The currently loaded capture document (if any)
    pub doc: Option<CaptureDoc>,
    /// Index of the page currently shown, persisted across frames
    pub selected_index: usize,
    /// Retained page select box, populated when a document loads
    pub select_box: PageSelectBox,
    /// Status line describing the most recent page change (if any)
    pub last_change: Option<String>,
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with no document loaded.
    pub fn new() -> Self {
        Self {
            doc: None,
            selected_index: 0,
            select_box: PageSelectBox::new(),
            last_change: None,
            error_message: None,
        }
    }

    /// Installs a new capture document and rebinds the select box.
    ///
    /// The selection resets to the first page; single-page documents leave
    /// the select box hidden.
    pub fn load_doc(&mut self, doc: CaptureDoc) -> Result<(), PagingError> {
        {
            let selector = PageSelector::new(&doc.pages)?;
            selector.bind_selection_control(&mut self.select_box);
            self.selected_index = selector.selected_index();
        }

        self.doc = Some(doc);
        self.last_change = None;
        self.error_message = None;
        Ok(())
    }
}
