//! # mdpdf – Markdown → PDF documentation pipeline
//!
//! This crate converts a Markdown document into a paginated A4 PDF. The
//! pipeline stages are:
//!
//! 1. **Transcode** – Markdown text → HTML string ([`markdown`])
//! 2. **Extract** – HTML → block elements in document order ([`blocks`])
//! 3. **Compose** – blocks → styled flowables plus footer ([`flow`])
//! 4. **Paginate** – flowables → A4 pages with 20 mm margins ([`pagination`])
//! 5. **Render** – emit PDF bytes via printpdf ([`render`])

pub mod blocks;
pub mod dom;
pub mod error;
pub mod flow;
pub mod fonts;
pub mod layout_config;
pub mod markdown;
pub mod pagination;
pub mod pipeline;
pub mod render;
pub mod style;

// Re-exports for convenience
pub use error::{Error, Result};
pub use pipeline::{convert_file, generate_pdf, generate_pdf_from_markdown, PipelineConfig};
