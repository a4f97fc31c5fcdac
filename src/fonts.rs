//! Font metrics and word wrapping for the page-flow writer.
//!
//! The PDF renderer only uses the built-in Helvetica family, which needs no
//! font files. Widths come from a proportional heuristic unless real TTF/OTF
//! faces are loaded, in which case glyph advances are measured with
//! `ttf-parser`.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::style::TextStyle;

/// Selects a face within the document font family.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FaceKey {
    pub bold: bool,
    pub italic: bool,
}

impl FaceKey {
    fn for_style(style: &TextStyle) -> Self {
        Self {
            bold: style.bold,
            italic: style.italic,
        }
    }
}

/// A loaded font face with metrics.
#[derive(Clone)]
struct FaceData {
    /// Raw font bytes (kept alive for ttf-parser's zero-copy API).
    bytes: Vec<u8>,
    units_per_em: f32,
}

/// Manages loaded faces and answers width queries.
#[derive(Default)]
pub struct FontManager {
    faces: HashMap<FaceKey, FaceData>,
}

impl FontManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TTF/OTF face for the given weight/slant.
    pub fn load_font(&mut self, key: FaceKey, bytes: Vec<u8>) -> Result<()> {
        let face = ttf_parser::Face::parse(&bytes, 0)
            .map_err(|e| Error::Font(format!("failed to parse font: {e}")))?;
        let data = FaceData {
            units_per_em: face.units_per_em() as f32,
            bytes,
        };
        self.faces.insert(key, data);
        Ok(())
    }

    /// Measure the width of a string rendered in `style`, in points.
    ///
    /// With a loaded face, glyph advances are summed. Otherwise an average
    /// character width heuristic is used (0.5 × font size per char for a
    /// proportional face, ~10 % wider when bold).
    pub fn measure_text_width(&self, text: &str, style: &TextStyle) -> f32 {
        let key = FaceKey::for_style(style);
        let Some(data) = self.faces.get(&key) else {
            let avg = if style.bold { 0.55 } else { 0.5 };
            return text.chars().count() as f32 * style.font_size * avg;
        };

        if let Ok(face) = ttf_parser::Face::parse(&data.bytes, 0) {
            let scale = style.font_size / data.units_per_em;
            let mut width = 0.0f32;
            for ch in text.chars() {
                if let Some(gid) = face.glyph_index(ch) {
                    let advance = face.glyph_hor_advance(gid).unwrap_or(0);
                    width += advance as f32 * scale;
                } else {
                    // Fallback for missing glyph
                    width += style.font_size * 0.5;
                }
            }
            width
        } else {
            text.chars().count() as f32 * style.font_size * 0.5
        }
    }
}

/// Word-wrap text to fit within `max_width` points. Returns a vec of lines.
pub fn wrap_text(
    text: &str,
    style: &TextStyle,
    max_width: f32,
    fonts: &FontManager,
) -> Vec<String> {
    if max_width <= 0.0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    // Split on existing newlines first
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in &words {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };
            let w = fonts.measure_text_width(&candidate, style);
            if w > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = word.to_string();
            } else {
                current_line = candidate;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
