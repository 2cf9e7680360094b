pub mod traits;
pub mod paging;
pub mod doc;
pub mod virtual_doc;

// Export traits and callback alias
pub use traits::{PageRecord, PagingCallback, SelectionControl};

// Export the page-selection state machine
pub use paging::{PageSelector, PagingError};

// Export the capture document model and loader
pub use doc::{load_doc, CaptureDoc, CapturePage};

// Export the synthetic document generator
pub use virtual_doc::generate_virtual_doc;
