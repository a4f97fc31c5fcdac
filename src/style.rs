//! Style table – the named text styles the layout renderer dispatches on.
//!
//! Four document styles (three heading tiers and body text) plus the italic
//! footer preset. A [`StyleSheet`] is constructed fresh per invocation and
//! never mutated afterwards, so repeated conversions in one process cannot
//! leak size overrides into each other.

/// Identifier of a named style in the [`StyleSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleId {
    Heading1,
    Heading2,
    Heading3,
    Body,
    Italic,
}

/// One resolved text style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub name: &'static str,
    /// Name of the base preset this style derives from.
    pub parent: &'static str,
    pub font_size: f32,
    /// Vertical distance between baselines, in points.
    pub leading: f32,
    pub bold: bool,
    pub italic: bool,
}

/// The document styles, resolved once per conversion.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub heading1: TextStyle,
    pub heading2: TextStyle,
    pub heading3: TextStyle,
    pub body: TextStyle,
    pub italic: TextStyle,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self {
            heading1: TextStyle {
                name: "Heading1",
                parent: "Heading1",
                font_size: 18.0,
                leading: 22.0,
                bold: true,
                italic: false,
            },
            heading2: TextStyle {
                name: "Heading2",
                parent: "Heading2",
                font_size: 14.0,
                leading: 18.0,
                bold: true,
                italic: false,
            },
            heading3: TextStyle {
                name: "Heading3",
                parent: "Heading3",
                font_size: 12.0,
                leading: 15.0,
                bold: true,
                italic: false,
            },
            body: TextStyle {
                name: "Body",
                parent: "BodyText",
                font_size: 10.0,
                leading: 13.0,
                bold: false,
                italic: false,
            },
            italic: TextStyle {
                name: "Italic",
                parent: "Normal",
                font_size: 10.0,
                leading: 12.0,
                bold: false,
                italic: true,
            },
        }
    }

    pub fn get(&self, id: StyleId) -> &TextStyle {
        match id {
            StyleId::Heading1 => &self.heading1,
            StyleId::Heading2 => &self.heading2,
            StyleId::Heading3 => &self.heading3,
            StyleId::Body => &self.body,
            StyleId::Italic => &self.italic,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}
