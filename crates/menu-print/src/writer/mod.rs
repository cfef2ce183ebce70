//! The drawing sink the layout engine writes to
//!
//! Layout code only talks to [`DocumentWriter`]; it never knows which
//! backend produces the final artifact. Two backends ship with the crate:
//! - [`crate::PdfWriter`] emits a print PDF through lopdf
//! - [`RecordingWriter`] keeps the drawing calls for inspection

pub mod metrics;
mod recording;

pub use recording::{DrawOp, RecordedPage, RecordingWriter};

use crate::color::Cmyk;
use crate::geometry::Rect;
use crate::types::Result;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Trim size of a page plus the bleed printed around it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
    pub bleed_pt: f32,
}

impl PageSize {
    pub fn orientation(&self) -> Orientation {
        if self.width_pt > self.height_pt {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Faces of the Helvetica family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// How a rectangle is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Fill,
    Stroke,
    FillStroke,
}

/// Dashed stroke: `dash` points on, `gap` points off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f32,
    pub gap: f32,
}

/// Capability interface of a document backend.
///
/// Coordinates are points with the origin at the top-left corner of the
/// trim box of the current page, y increasing downward. Text `y` values are
/// baselines.
///
/// A writer starts with one open page. [`DocumentWriter::new_page`] appends
/// a page and makes it current; [`DocumentWriter::set_page`] returns to an
/// earlier one.
pub trait DocumentWriter {
    /// Size for the current page and every page created after it
    fn set_page_size(&mut self, size: PageSize);

    fn set_fill_color(&mut self, color: Cmyk);

    fn set_stroke_color(&mut self, color: Cmyk);

    fn set_text_color(&mut self, color: Cmyk);

    fn set_font(&mut self, style: FontStyle, size_pt: f32);

    fn set_line_width(&mut self, width_pt: f32);

    /// `None` switches back to a solid stroke
    fn set_line_dash(&mut self, dash: Option<DashPattern>);

    fn draw_rect(&mut self, rect: Rect, mode: DrawMode);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Width of `text` in the current font, in points
    fn measure_text_width(&self, text: &str) -> f32;

    /// Break `text` into lines no wider than `max_width_pt` in the current font
    fn wrap_text(&self, text: &str, max_width_pt: f32) -> Vec<String> {
        wrap_text(text, max_width_pt, |candidate| {
            self.measure_text_width(candidate)
        })
    }

    /// Draw lines starting at baseline `y`, each `line_height` below the last
    fn draw_text(&mut self, lines: &[String], x: f32, y: f32, line_height: f32);

    fn draw_text_line(&mut self, text: &str, x: f32, y: f32) {
        self.draw_text(&[text.to_string()], x, y, 0.0);
    }

    fn new_page(&mut self);

    /// Make an existing page current again. Out-of-range indexes are ignored.
    fn set_page(&mut self, index: usize);

    fn page_count(&self) -> usize;

    /// Produce the finished artifact
    fn finalize(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}

/// Greedy word wrap.
///
/// Explicit newlines start a new paragraph, blank paragraphs are kept as
/// empty lines, and a single word wider than the limit is broken between
/// characters.
pub fn wrap_text(text: &str, max_width_pt: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if measure(&candidate) <= max_width_pt {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if measure(word) <= max_width_pt {
                current = word.to_string();
            } else {
                for ch in word.chars() {
                    current.push(ch);
                    if measure(&current) > max_width_pt && current.chars().count() > 1 {
                        current.pop();
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    }
                }
            }
        }

        lines.push(current);
    }

    lines
}
