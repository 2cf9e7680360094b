//! Header panel UI rendering
//!
//! Handles the top bar with file controls, the demo document button, and the
//! page select box.

use crate::app::AppState;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a capture document to open
    OpenFileRequested(PathBuf),
    /// User clicked the demo document button
    OpenVirtualDocRequested,
    /// User picked a different page in the select box (change event value)
    PageChanged(String),
}

/// Renders the application header with file controls and the page select box
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Capture").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Capture Documents", &["json", "har"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Demo Document").clicked() {
            interaction = Some(HeaderInteraction::OpenVirtualDocRequested);
        }

        if let Some(doc) = &state.doc {
            ui.separator();
            ui.label(format!("Pages: {}", doc.pages.len()));

            if let Some(value) = state.select_box.show(ui) {
                interaction = Some(HeaderInteraction::PageChanged(value));
            }

            if let Some(change) = &state.last_change {
                ui.separator();
                ui.label(change);
            }
        }
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
