//! UI panel rendering for the cascade viewer.

pub mod header;
pub mod page_panel;
pub mod select_box;
pub mod status_bar;

pub use header::{render_header, HeaderInteraction};
pub use page_panel::render_page_panel;
pub use status_bar::render_status_bar;
