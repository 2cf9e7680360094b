//! Page selection state management.
//!
//! This module keeps track of which page of a multi-run capture document is
//! currently shown. It owns the selected index, validates transitions, and
//! notifies registered subscribers on every successful change.

use crate::traits::{PageRecord, PagingCallback, SelectionControl};
use thiserror::Error;

/// Errors raised by page selection operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PagingError {
    /// `select` was given an index outside the valid page range.
    #[error("page does not exist: invalid page index {index} (document has {page_count} pages)")]
    InvalidIndex { index: usize, page_count: usize },

    /// The capture document has no pages; a selector cannot be constructed.
    #[error("capture document has no pages")]
    EmptyDocument,

    /// A bound selection control delivered a change value that is not an index.
    #[error("selection control delivered a non-numeric value: {0:?}")]
    InvalidControlValue(String),
}

/// State tracking which page of a multi-run capture document is shown.
///
/// Responsibilities:
/// - Owning the selected page index and keeping it within bounds
/// - Validating selection transitions (`select`)
/// - Notifying subscribers in registration order on every change
/// - Populating a bound selection control with page options
///
/// The page collection is borrowed, not copied; the selector lives no longer
/// than the document it pages through. All mutation goes through `select` and
/// `on_page_update`, so exclusive ownership of the index and subscriber list
/// is enforced by `&mut self`.
pub struct PageSelector<'d, P: PageRecord> {
    /// The pages of the capture document, in display order
    pages: &'d [P],
    /// Index of the currently shown page, always in `0..pages.len()`
    selected_index: usize,
    /// Subscribers notified on every successful page change, in registration order
    subscribers: Vec<PagingCallback<'d, P>>,
}

impl<P: PageRecord> std::fmt::Debug for PageSelector<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSelector")
            .field("page_count", &self.pages.len())
            .field("selected_index", &self.selected_index)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<'d, P: PageRecord> PageSelector<'d, P> {
    /// Creates a selector over `pages` with the first page selected.
    ///
    /// # Errors
    /// Returns `PagingError::EmptyDocument` if `pages` is empty.
    pub fn new(pages: &'d [P]) -> Result<Self, PagingError> {
        Self::with_initial_index(pages, 0)
    }

    /// Creates a selector over `pages` with a caller-chosen initial page.
    ///
    /// An initial index past the end is clamped to the last page, a leniency
    /// for documents shorter than the caller expected. Construction performs
    /// no notification. Negative indices are unrepresentable (`usize`).
    ///
    /// # Errors
    /// Returns `PagingError::EmptyDocument` if `pages` is empty.
    pub fn with_initial_index(pages: &'d [P], initial_index: usize) -> Result<Self, PagingError> {
        if pages.is_empty() {
            return Err(PagingError::EmptyDocument);
        }

        // Fall back to the last page if the document has too few pages.
        let selected_index = initial_index.min(pages.len() - 1);

        Ok(Self {
            pages,
            selected_index,
            subscribers: Vec::new(),
        })
    }

    // ===== Selection Queries =====

    /// Returns the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the currently selected page.
    pub fn selected_page(&self) -> &P {
        &self.pages[self.selected_index]
    }

    /// Returns the index of the currently selected page (0 based).
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    // ===== Selection Mutation =====

    /// Updates which page index is currently shown and publishes the change.
    ///
    /// Selecting the already-selected page is a silent no-op. Otherwise the
    /// index is validated, updated, and every subscriber is invoked
    /// synchronously in registration order with `(index, page)`; `select`
    /// returns only after all subscribers ran. A panicking subscriber unwinds
    /// out of `select` and aborts the remaining notifications.
    ///
    /// # Errors
    /// Returns `PagingError::InvalidIndex` for an out-of-range index; the
    /// selection is left unchanged.
    pub fn select(&mut self, index: usize) -> Result<(), PagingError> {
        if index == self.selected_index {
            return Ok(());
        }
        if index >= self.pages.len() {
            return Err(PagingError::InvalidIndex {
                index,
                page_count: self.pages.len(),
            });
        }

        self.selected_index = index;
        let page = &self.pages[index];
        for subscriber in &mut self.subscribers {
            subscriber(index, page);
        }
        Ok(())
    }

    // ===== Subscription =====

    /// Registers a subscriber to be called whenever the page index updates.
    ///
    /// Single-page documents never fire page changes, so the subscription is
    /// rejected (`None`) when there is at most one page; callers may subscribe
    /// unconditionally without special-casing. Otherwise returns the 1-based
    /// position of the callback in the subscriber list. There is no
    /// unsubscribe; the list only grows for the selector's lifetime.
    pub fn on_page_update(&mut self, callback: PagingCallback<'d, P>) -> Option<usize> {
        if self.page_count() > 1 {
            self.subscribers.push(callback);
            Some(self.subscribers.len())
        } else {
            None
        }
    }

    // ===== Control Binding =====

    /// Populates a selection control with one option per page.
    ///
    /// With at most one page the control is hidden and left empty; there is
    /// nothing to choose between. Otherwise existing options are cleared
    /// (the control may carry placeholders from prior state), one option is
    /// added per page in order (label = title, value = index as string,
    /// selected flag on the current page), and the control is made visible.
    ///
    /// Population is one-directional: programmatic `select` calls do not
    /// re-sync the control. Change events flow back through
    /// `handle_control_change`, driven by the control's owner.
    pub fn bind_selection_control<C: SelectionControl>(&self, control: &mut C) {
        if self.page_count() <= 1 {
            control.set_visible(false);
            return;
        }

        control.clear_options();
        for (i, page) in self.pages.iter().enumerate() {
            control.add_option(page.title(), &i.to_string(), i == self.selected_index);
        }
        control.set_visible(true);
    }

    /// Translates a selection-control change event into a `select` call.
    ///
    /// `value` is the newly chosen option's value as delivered by the control
    /// (the page index as a string, per `bind_selection_control`).
    ///
    /// # Errors
    /// Returns `PagingError::InvalidControlValue` if the value does not parse
    /// as an index, or any error `select` raises for the parsed index.
    pub fn handle_control_change(&mut self, value: &str) -> Result<(), PagingError> {
        let index = value
            .parse::<usize>()
            .map_err(|_| PagingError::InvalidControlValue(value.to_string()))?;
        self.select(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestPage {
        title: String,
    }

    impl TestPage {
        fn named(title: &str) -> Self {
            Self { title: title.to_string() }
        }
    }

    impl PageRecord for TestPage {
        fn title(&self) -> &str {
            &self.title
        }
    }

    fn pages(titles: &[&str]) -> Vec<TestPage> {
        titles.iter().map(|t| TestPage::named(t)).collect()
    }

    /// Mock selection control recording every call made through the trait.
    #[derive(Default)]
    struct MockControl {
        options: Vec<(String, String, bool)>,
        visible: Option<bool>,
        clear_calls: usize,
    }

    impl SelectionControl for MockControl {
        fn clear_options(&mut self) {
            self.options.clear();
            self.clear_calls += 1;
        }

        fn add_option(&mut self, label: &str, value: &str, selected: bool) {
            self.options.push((label.to_string(), value.to_string(), selected));
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = Some(visible);
        }
    }

    #[test]
    fn test_new_selects_first_page() {
        let doc = pages(&["Run 1", "Run 2", "Run 3"]);
        let selector = PageSelector::new(&doc).unwrap();

        assert_eq!(selector.page_count(), 3);
        assert_eq!(selector.selected_index(), 0);
        assert_eq!(selector.selected_page().title(), "Run 1");
    }

    #[test]
    fn test_initial_index_past_end_clamps_to_last_page() {
        let doc = pages(&["Run 1", "Run 2", "Run 3"]);
        let selector = PageSelector::with_initial_index(&doc, 7).unwrap();

        assert_eq!(selector.selected_index(), selector.page_count() - 1);
        assert_eq!(selector.selected_page().title(), "Run 3");
    }

    #[test]
    fn test_empty_document_rejected_at_construction() {
        let doc: Vec<TestPage> = Vec::new();

        assert_eq!(PageSelector::new(&doc).err(), Some(PagingError::EmptyDocument));
        assert_eq!(
            PageSelector::with_initial_index(&doc, 2).err(),
            Some(PagingError::EmptyDocument)
        );
    }

    #[test]
    fn test_select_updates_index_and_notifies_once() {
        let doc = pages(&["Run 1", "Run 2", "Run 3"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let seen: Rc<RefCell<Vec<(usize, String)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        selector.on_page_update(Box::new(move |i, page| {
            sink.borrow_mut().push((i, page.title().to_string()));
        }));

        selector.select(2).unwrap();

        assert_eq!(selector.selected_index(), 2);
        assert_eq!(seen.borrow().as_slice(), &[(2, "Run 3".to_string())]);
    }

    #[test]
    fn test_select_current_index_is_silent_noop() {
        let doc = pages(&["Run 1", "Run 2"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        selector.on_page_update(Box::new(move |_, _| *sink.borrow_mut() += 1));

        selector.select(0).unwrap();

        assert_eq!(selector.selected_index(), 0);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_select_out_of_range_errors_and_leaves_state_unchanged() {
        let doc = pages(&["Run 1", "Run 2"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        selector.on_page_update(Box::new(move |_, _| *sink.borrow_mut() += 1));

        let err = selector.select(2).unwrap_err();

        assert_eq!(err, PagingError::InvalidIndex { index: 2, page_count: 2 });
        assert_eq!(selector.selected_index(), 0);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_selected_index_stays_in_bounds_after_selects() {
        let doc = pages(&["Run 1", "Run 2", "Run 3"]);
        let mut selector = PageSelector::with_initial_index(&doc, 99).unwrap();

        for index in [0usize, 2, 1, 1, 5, 0] {
            let _ = selector.select(index);
            assert!(selector.selected_index() < selector.page_count());
        }
    }

    #[test]
    fn test_subscribers_called_in_registration_order() {
        let doc = pages(&["Run 1", "Run 2"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let a = selector.on_page_update(Box::new(move |_, _| first.borrow_mut().push("first")));
        let b = selector.on_page_update(Box::new(move |_, _| second.borrow_mut().push("second")));

        assert_eq!(a, Some(1));
        assert_eq!(b, Some(2));

        selector.select(1).unwrap();

        assert_eq!(order.borrow().as_slice(), &["first", "second"]);
    }

    #[test]
    fn test_subscription_rejected_for_single_page_document() {
        let doc = pages(&["Only run"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let calls = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&calls);
        let handle = selector.on_page_update(Box::new(move |_, _| *sink.borrow_mut() += 1));

        assert_eq!(handle, None);
        // The only valid index is already selected; anything else errors.
        assert!(selector.select(0).is_ok());
        assert!(selector.select(1).is_err());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_bind_populates_options_and_shows_control() {
        let doc = pages(&["Run 1", "Run 2"]);
        let selector = PageSelector::new(&doc).unwrap();

        let mut control = MockControl::default();
        // Placeholder left over from prior state; bind must clear it.
        control.add_option("loading...", "", false);

        selector.bind_selection_control(&mut control);

        assert_eq!(control.clear_calls, 1);
        assert_eq!(control.visible, Some(true));
        assert_eq!(
            control.options,
            vec![
                ("Run 1".to_string(), "0".to_string(), true),
                ("Run 2".to_string(), "1".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_bind_marks_current_selection() {
        let doc = pages(&["Run 1", "Run 2", "Run 3"]);
        let selector = PageSelector::with_initial_index(&doc, 1).unwrap();

        let mut control = MockControl::default();
        selector.bind_selection_control(&mut control);

        let selected: Vec<&str> = control
            .options
            .iter()
            .filter(|(_, _, s)| *s)
            .map(|(label, _, _)| label.as_str())
            .collect();
        assert_eq!(selected, vec!["Run 2"]);
    }

    #[test]
    fn test_bind_hides_control_for_single_page_document() {
        let doc = pages(&["Only run"]);
        let selector = PageSelector::new(&doc).unwrap();

        let mut control = MockControl::default();
        selector.bind_selection_control(&mut control);

        assert_eq!(control.visible, Some(false));
        assert!(control.options.is_empty());
        assert_eq!(control.clear_calls, 0);
    }

    #[test]
    fn test_control_change_selects_and_notifies() {
        let doc = pages(&["Run 1", "Run 2", "Run 3"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        selector.on_page_update(Box::new(move |i, _| sink.borrow_mut().push(i)));

        selector.handle_control_change("1").unwrap();

        assert_eq!(selector.selected_index(), 1);
        assert_eq!(seen.borrow().as_slice(), &[1]);
    }

    #[test]
    fn test_control_change_with_garbage_value_errors() {
        let doc = pages(&["Run 1", "Run 2"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let err = selector.handle_control_change("not-a-number").unwrap_err();

        assert_eq!(err, PagingError::InvalidControlValue("not-a-number".to_string()));
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn test_control_change_out_of_range_propagates_invalid_index() {
        let doc = pages(&["Run 1", "Run 2"]);
        let mut selector = PageSelector::new(&doc).unwrap();

        let err = selector.handle_control_change("9").unwrap_err();

        assert_eq!(err, PagingError::InvalidIndex { index: 9, page_count: 2 });
        assert_eq!(selector.selected_index(), 0);
    }
}
