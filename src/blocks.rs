//! Block extractor – walks the parsed HTML tree and yields the block
//! elements the layout stage understands, in document order.
//!
//! Only h1–h3, p, ul and ol are considered. Every other element at block
//! level (blockquote, pre, hr, tables, raw inline HTML, …) is structurally
//! ignored: its subtree contributes nothing. Inside a recognised block all
//! inline markup is stripped and only the concatenated text survives.

use crate::dom::{parse_html, DomNode, ElementNode, Tag};

/// Heading tier. The dispatch table only knows three levels; deeper
/// Markdown headings (`####` and beyond) are ignored with the other
/// unrecognised tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// A structurally distinct unit of document content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph { text: String },
    List { ordered: bool, items: Vec<String> },
}

/// Extract blocks from an HTML string.
///
/// The returned iterator is lazy and non-restartable; it yields blocks in
/// source order and never errors; unparsable fragments simply produce
/// fewer blocks.
pub fn extract_blocks(html: &str) -> Blocks {
    Blocks {
        nodes: parse_html(html).into_iter(),
    }
}

/// Iterator over the block elements of an HTML fragment.
pub struct Blocks {
    nodes: std::vec::IntoIter<DomNode>,
}

impl Iterator for Blocks {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        for node in self.nodes.by_ref() {
            if let DomNode::Element(e) = node {
                match block_from_element(&e) {
                    Some(block) => return Some(block),
                    None => {
                        log::debug!("ignoring block element {:?}", e.tag);
                    }
                }
            }
        }
        None
    }
}

fn block_from_element(e: &ElementNode) -> Option<Block> {
    let level = match e.tag {
        Tag::H1 => Some(HeadingLevel::H1),
        Tag::H2 => Some(HeadingLevel::H2),
        Tag::H3 => Some(HeadingLevel::H3),
        _ => None,
    };
    if let Some(level) = level {
        return Some(Block::Heading {
            level,
            text: flatten_text(e),
        });
    }

    match e.tag {
        Tag::P => Some(Block::Paragraph {
            text: flatten_text(e),
        }),
        Tag::Ul | Tag::Ol => Some(Block::List {
            ordered: e.tag == Tag::Ol,
            items: list_items(e),
        }),
        _ => None,
    }
}

/// Flattened text of each direct `<li>` child, in source order.
///
/// A list nested inside an item is not modelled: its markup flattens into
/// the parent item's text along with everything else.
fn list_items(list: &ElementNode) -> Vec<String> {
    list.children
        .iter()
        .filter_map(|n| match n {
            DomNode::Element(e) if e.tag == Tag::Li => Some(flatten_text(e)),
            _ => None,
        })
        .collect()
}

/// Concatenated text content of an element's subtree, inline tags stripped.
fn flatten_text(e: &ElementNode) -> String {
    let mut out = String::new();
    collect_text(&e.children, &mut out);
    out.trim().to_string()
}

fn collect_text(nodes: &[DomNode], out: &mut String) {
    for node in nodes {
        match node {
            DomNode::Text(t) => out.push_str(t),
            DomNode::Element(e) => collect_text(&e.children, out),
        }
    }
}
