//! Layout dispatch – maps extracted blocks to a flat sequence of flowables.
//!
//! One styled paragraph per block (one per item for lists), each followed by
//! a fixed vertical spacer, and a trailing attribution line at the end. The
//! mapping is a pure, order-preserving function of the block sequence; all
//! wrapping and page-break decisions belong to the page-flow writer.

use crate::blocks::{Block, HeadingLevel};
use crate::style::StyleId;

/// Attribution line appended after the document content.
pub const FOOTER_TEXT: &str = "Generado desde DOCUMENTATION.md";

/// Spacer heights in points (1/72 inch), per block kind.
const HEADING1_SPACE_AFTER: f32 = 6.0;
const HEADING2_SPACE_AFTER: f32 = 4.0;
const HEADING3_SPACE_AFTER: f32 = 3.0;
const PARAGRAPH_SPACE_AFTER: f32 = 4.0;
const LIST_SPACE_AFTER: f32 = 4.0;
const FOOTER_SPACE_BEFORE: f32 = 12.0;

/// One positioned piece of content for the page-flow writer.
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    /// A run of text in one named style; the writer wraps it to the page.
    Paragraph { text: String, style: StyleId },
    /// Fixed vertical gap.
    Spacer { height: f32 },
}

impl Flowable {
    fn paragraph(text: impl Into<String>, style: StyleId) -> Self {
        Flowable::Paragraph {
            text: text.into(),
            style,
        }
    }

    fn spacer(height: f32) -> Self {
        Flowable::Spacer { height }
    }
}

/// Map the block sequence to flowables and append the attribution footer.
pub fn compose<I>(blocks: I) -> Vec<Flowable>
where
    I: IntoIterator<Item = Block>,
{
    let mut flowables = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let (style, space_after) = match level {
                    HeadingLevel::H1 => (StyleId::Heading1, HEADING1_SPACE_AFTER),
                    HeadingLevel::H2 => (StyleId::Heading2, HEADING2_SPACE_AFTER),
                    HeadingLevel::H3 => (StyleId::Heading3, HEADING3_SPACE_AFTER),
                };
                flowables.push(Flowable::paragraph(text, style));
                flowables.push(Flowable::spacer(space_after));
            }
            Block::Paragraph { text } => {
                flowables.push(Flowable::paragraph(text, StyleId::Body));
                flowables.push(Flowable::spacer(PARAGRAPH_SPACE_AFTER));
            }
            Block::List { ordered, items } => {
                // No spacer between items; one spacer after the whole list.
                // Ordered items all carry the literal "1. " prefix; the
                // ordinal is not recomputed per item.
                let bullet = if ordered { "1. " } else { "\u{2022} " };
                for item in items {
                    flowables.push(Flowable::paragraph(
                        format!("{bullet}{item}"),
                        StyleId::Body,
                    ));
                }
                flowables.push(Flowable::spacer(LIST_SPACE_AFTER));
            }
        }
    }

    flowables.push(Flowable::spacer(FOOTER_SPACE_BEFORE));
    flowables.push(Flowable::paragraph(FOOTER_TEXT, StyleId::Italic));

    flowables
}
