//! Page detail panel rendering
//!
//! Shows the metadata of the currently selected page in the central panel.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Renders the central panel with the selected page's metadata
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_page_panel(ui: &mut egui::Ui, state: &AppState) {
    let Some(doc) = &state.doc else {
        ui.centered_and_justified(|ui| {
            ui.label("Open a capture document or generate a demo document to begin");
        });
        return;
    };

    let Some(page) = doc.pages.get(state.selected_index) else {
        return;
    };

    ui.heading(RichText::new(&page.title).strong());
    ui.separator();

    egui::Grid::new("page_details")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label("Id:");
            ui.label(&page.id);
            ui.end_row();

            ui.label("Started:");
            ui.label(page.started.as_deref().unwrap_or("unknown"));
            ui.end_row();

            ui.label("Entries:");
            ui.label(page.entry_count.to_string());
            ui.end_row();

            ui.label("Duration:");
            ui.label(format!("{:.1} ms", page.duration_ms));
            ui.end_row();
        });
}
