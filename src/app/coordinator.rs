//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like capture loading, demo document
//! generation, and translating select-box change events into page selection.

use crate::app::AppState;
use rcascade::{generate_virtual_doc, load_doc, CapturePage, PageRecord, PageSelector};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

const VIRTUAL_DOC_PAGES: usize = 5;
const VIRTUAL_DOC_SEED: u64 = 42;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Loading capture documents from disk
/// - Generating the in-memory demo document
/// - Applying select-box change events to the selection state
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads a capture document from a file and installs it.
    pub fn open_file(state: &mut AppState, path: PathBuf) {
        match load_doc(&path) {
            Ok(doc) => Self::install_doc(state, doc),
            Err(e) => {
                state.error_message = Some(format!("Error loading capture: {:#}", e));
            }
        }
    }

    /// Generates and installs an in-memory demo document.
    pub fn open_virtual_doc(state: &mut AppState) {
        let doc = generate_virtual_doc(VIRTUAL_DOC_PAGES, VIRTUAL_DOC_SEED);
        Self::install_doc(state, doc);
    }

    fn install_doc(state: &mut AppState, doc: rcascade::CaptureDoc) {
        if let Err(e) = state.load_doc(doc) {
            state.error_message = Some(format!("Error loading capture: {}", e));
        }
    }

    /// Applies a select-box change event to the page selection.
    ///
    /// Builds a selector over the loaded document at the current index,
    /// registers a subscriber that records the change for the status line,
    /// and forwards the control's value string to the selector.
    pub fn handle_page_change(state: &mut AppState, value: &str) {
        let AppState {
            doc,
            selected_index,
            last_change,
            error_message,
            ..
        } = state;
        let Some(doc) = doc.as_ref() else {
            return;
        };

        let changed: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
        match PageSelector::with_initial_index(&doc.pages, *selected_index) {
            Ok(mut selector) => {
                let sink = Rc::clone(&changed);
                selector.on_page_update(Box::new(move |i, page: &CapturePage| {
                    *sink.borrow_mut() =
                        Some(format!("Showing page {}: {}", i + 1, page.title()));
                }));

                match selector.handle_control_change(value) {
                    Ok(()) => {
                        *selected_index = selector.selected_index();
                        if let Some(msg) = changed.borrow_mut().take() {
                            *last_change = Some(msg);
                        }
                        *error_message = None;
                    }
                    Err(e) => {
                        *error_message = Some(format!("Page selection failed: {}", e));
                    }
                }
            }
            Err(e) => {
                *error_message = Some(format!("Page selection failed: {}", e));
            }
        }
    }
}
