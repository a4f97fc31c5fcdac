//! Pagination – flows the flowable sequence onto A4 pages.
//!
//! Handles:
//! - word wrapping paragraphs to the content width
//! - advancing a vertical cursor by each style's leading
//! - page breaks at the bottom margin (paragraphs split line-by-line)
//! - spacers, truncated at the page boundary rather than carried over

use crate::flow::Flowable;
use crate::fonts::{wrap_text, FontManager};
use crate::layout_config::{DocumentLayout, PageLayout, PlacedLine};
use crate::style::StyleSheet;

/// Default page margin: 20 mm in points.
pub const PAGE_MARGIN_PT: f32 = 56.693;

/// Flow flowables into a paginated [`DocumentLayout`].
pub fn paginate(
    flowables: &[Flowable],
    styles: &StyleSheet,
    page_width: f32,
    page_height: f32,
    page_margin: f32,
    fonts: &FontManager,
) -> DocumentLayout {
    let mut layout = DocumentLayout {
        title: "mdpdf output".to_string(),
        page_width_pt: page_width,
        page_height_pt: page_height,
        pages: Vec::new(),
    };

    let content_width = page_width - 2.0 * page_margin;
    let content_height = page_height - 2.0 * page_margin;

    let mut current_page = PageLayout {
        page_index: 0,
        lines: Vec::new(),
    };
    // Vertical cursor within the content area of the current page.
    let mut cursor = 0.0f32;

    for flowable in flowables {
        match flowable {
            Flowable::Spacer { height } => {
                // A spacer never spills onto the next page; it is cut off at
                // the bottom margin and the break happens at the next line.
                cursor = (cursor + height).min(content_height);
            }
            Flowable::Paragraph { text, style } => {
                let style = styles.get(*style);
                for line in wrap_text(text, style, content_width, fonts) {
                    if cursor + style.leading > content_height && cursor > 0.0 {
                        layout.pages.push(std::mem::replace(
                            &mut current_page,
                            PageLayout {
                                page_index: layout.pages.len() + 1,
                                lines: Vec::new(),
                            },
                        ));
                        cursor = 0.0;
                    }
                    current_page.lines.push(PlacedLine {
                        x: page_margin,
                        y: page_margin + cursor,
                        text: line,
                        font_size: style.font_size,
                        leading: style.leading,
                        bold: style.bold,
                        italic: style.italic,
                    });
                    cursor += style.leading;
                }
            }
        }
    }

    if !current_page.lines.is_empty() {
        layout.pages.push(current_page);
    }
    // Ensure at least one page.
    if layout.pages.is_empty() {
        layout.pages.push(PageLayout {
            page_index: 0,
            lines: Vec::new(),
        });
    }
    layout
}
