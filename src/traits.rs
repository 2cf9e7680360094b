/// Callback invoked with `(new_index, new_page)` on every successful page change.
///
/// Subscribers are stored in registration order and called synchronously.
/// The lifetime `'d` ties the callback to the page collection it observes.
pub type PagingCallback<'d, P> = Box<dyn FnMut(usize, &P) + 'd>;

/// Trait for one page of a multi-run capture document.
///
/// A page is opaque to the selector; the only requirement is a human-readable
/// display title usable as a selection-control label.
pub trait PageRecord {
    /// Returns the display title of the page
    fn title(&self) -> &str;
}

/// Trait for a single-choice UI control representing pages by title.
///
/// The selector populates the control through this trait (options, visibility);
/// the control's owner translates change events back into selection by passing
/// the chosen option's value to `PageSelector::handle_control_change`. This
/// keeps the binding one-directional and testable without a real widget.
pub trait SelectionControl {
    /// Removes all existing options (placeholders from prior state included)
    fn clear_options(&mut self);

    /// Appends an option with the given label, string value, and selected flag
    fn add_option(&mut self, label: &str, value: &str, selected: bool);

    /// Shows or hides the control
    fn set_visible(&mut self, visible: bool);
}
