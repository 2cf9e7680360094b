//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying capture document totals.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window with document totals
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if let Some(doc) = &state.doc {
            let total_entries: usize = doc.pages.iter().map(|p| p.entry_count).sum();
            let total_duration_ms: f64 = doc.pages.iter().map(|p| p.duration_ms).sum();
            let creator = doc.creator.as_deref().unwrap_or("Unknown");

            ui.label(RichText::new(format!(
                "Page {} / {} | Creator: {} | Entries: {} | Total: {:.1} ms",
                state.selected_index + 1,
                doc.pages.len(),
                creator,
                total_entries,
                total_duration_ms
            )).strong());
        } else {
            ui.label(RichText::new("No capture loaded").strong());
        }
    });
}
