//! Page select box widget.
//!
//! A retained option list rendered as an egui combo box. The selector
//! populates it through the `SelectionControl` trait; each frame `show`
//! renders the current options and reports a change event when the user
//! picks a different page.

use eframe::egui;
use rcascade::SelectionControl;

struct SelectOption {
    label: String,
    value: String,
    selected: bool,
}

/// Retained state of the page selection combo box.
#[derive(Default)]
pub struct PageSelectBox {
    options: Vec<SelectOption>,
    visible: bool,
}

impl PageSelectBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the combo box and returns the chosen option's value when the
    /// user picks a different page (the change event). Hidden or unchanged
    /// controls return `None`.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<String> {
        if !self.visible {
            return None;
        }

        let current_label = self
            .options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.label.clone())
            .unwrap_or_default();

        let mut chosen: Option<usize> = None;
        egui::ComboBox::from_id_salt("page_select_box")
            .selected_text(current_label)
            .show_ui(ui, |ui| {
                for (i, option) in self.options.iter().enumerate() {
                    if ui.selectable_label(option.selected, &option.label).clicked() {
                        chosen = Some(i);
                    }
                }
            });

        let chosen = chosen?;
        if self.options[chosen].selected {
            // Re-picking the current page fires no change event.
            return None;
        }
        for (i, option) in self.options.iter_mut().enumerate() {
            option.selected = i == chosen;
        }
        Some(self.options[chosen].value.clone())
    }
}

impl SelectionControl for PageSelectBox {
    fn clear_options(&mut self) {
        self.options.clear();
    }

    fn add_option(&mut self, label: &str, value: &str, selected: bool) {
        self.options.push(SelectOption {
            label: label.to_string(),
            value: value.to_string(),
            selected,
        });
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
