// Report layout: font metrics, word-wrap and the page cursor.
// Pure and synchronous; every export owns its own Paginator.

pub mod font_metrics;
pub mod paginator;
pub mod wrap;

// Re-export the public API consumed by the exporters and handlers.
pub use font_metrics::{default_page_config, FontFamily, PageConfig};
pub use paginator::{PaginatedReport, Paginator, TextLine};
