//! Pipeline – ties together transcoding, block extraction, layout dispatch,
//! pagination, and rendering into a single function call.

use std::fs;
use std::path::Path;

use crate::blocks::extract_blocks;
use crate::error::{Error, Result};
use crate::flow::compose;
use crate::fonts::FontManager;
use crate::layout_config::DocumentLayout;
use crate::markdown::render_markdown;
use crate::pagination::{paginate, PAGE_MARGIN_PT};
use crate::render::render_pdf;
use crate::style::StyleSheet;

/// Configuration for the PDF generation pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Document title embedded in the PDF metadata.
    pub title: String,
    /// Page width in points (default: A4 = 595.28).
    pub page_width: f32,
    /// Page height in points (default: A4 = 841.89).
    pub page_height: f32,
    /// Page margin in points, applied on all four sides (default: 20 mm).
    pub page_margin: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            title: "mdpdf output".to_string(),
            page_width: 595.28,
            page_height: 841.89,
            page_margin: PAGE_MARGIN_PT,
        }
    }
}

/// Full pipeline: Markdown string → PDF bytes.
///
/// Returns `(pdf_bytes, document_layout)`.
pub fn generate_pdf(
    markdown: &str,
    config: &PipelineConfig,
) -> Result<(Vec<u8>, DocumentLayout)> {
    // 1. Markdown → HTML
    let html = render_markdown(markdown);

    // 2. Extract block elements
    let blocks = extract_blocks(&html);

    // 3. Dispatch blocks to styled flowables
    let flowables = compose(blocks);

    // 4. Paginate
    let styles = StyleSheet::new();
    let fonts = FontManager::new();
    let mut layout = paginate(
        &flowables,
        &styles,
        config.page_width,
        config.page_height,
        config.page_margin,
        &fonts,
    );
    layout.title = config.title.clone();

    // 5. Render PDF
    let bytes = render_pdf(&layout)?;

    Ok((bytes, layout))
}

/// Convenience: generate PDF with the default A4 config.
pub fn generate_pdf_from_markdown(markdown: &str) -> Result<Vec<u8>> {
    let (bytes, _) = generate_pdf(markdown, &PipelineConfig::default())?;
    Ok(bytes)
}

/// Generate only the document layout (no PDF rendering) – useful for testing.
pub fn compute_document_layout(markdown: &str, config: &PipelineConfig) -> DocumentLayout {
    let flowables = compose(extract_blocks(&render_markdown(markdown)));
    let styles = StyleSheet::new();
    let fonts = FontManager::new();
    let mut layout = paginate(
        &flowables,
        &styles,
        config.page_width,
        config.page_height,
        config.page_margin,
        &fonts,
    );
    layout.title = config.title.clone();
    layout
}

/// Convert a Markdown file on disk into a PDF file.
///
/// The input is checked before anything else; a missing input produces
/// [`Error::MissingInput`] and the output path is never touched. The PDF is
/// written whole; nothing lands on disk unless rendering succeeded.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &PipelineConfig,
) -> Result<DocumentLayout> {
    if !input.exists() {
        return Err(Error::MissingInput(input.to_path_buf()));
    }
    let markdown = fs::read_to_string(input)?;
    let (bytes, layout) = generate_pdf(&markdown, config)?;
    fs::write(output, &bytes)?;
    Ok(layout)
}
