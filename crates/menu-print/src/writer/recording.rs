//! A writer that keeps every drawing call in memory
//!
//! Used for dry runs (statistics) and to inspect layout output without
//! parsing a PDF.

use super::metrics::text_width;
use super::{DashPattern, DocumentWriter, DrawMode, FontStyle, PageSize};
use crate::color::Cmyk;
use crate::geometry::Rect;
use crate::types::Result;
use std::fmt::Write as _;

/// One drawing call, with the graphics state that was active for it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        mode: DrawMode,
        fill: Cmyk,
        stroke: Cmyk,
        line_width: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Cmyk,
        line_width: f32,
        dash: Option<DashPattern>,
    },
    Text {
        lines: Vec<String>,
        x: f32,
        y: f32,
        line_height: f32,
        color: Cmyk,
        style: FontStyle,
        size_pt: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub size: PageSize,
    pub ops: Vec<DrawOp>,
}

impl RecordedPage {
    /// Every text line drawn on this page, in drawing order
    pub fn text_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { lines, .. } => Some(lines.iter().map(String::as_str)),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// The first text op whose first line equals `text`
    pub fn find_text(&self, text: &str) -> Option<&DrawOp> {
        self.ops.iter().find(|op| {
            matches!(op, DrawOp::Text { lines, .. } if lines.first().is_some_and(|l| l == text))
        })
    }

    pub fn rects(&self, mode: DrawMode) -> Vec<&Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, mode: m, .. } if *m == mode => Some(rect),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct RecordingWriter {
    pages: Vec<RecordedPage>,
    current: usize,
    size: PageSize,
    fill: Cmyk,
    stroke: Cmyk,
    text: Cmyk,
    font: (FontStyle, f32),
    line_width: f32,
    dash: Option<DashPattern>,
}

impl Default for RecordingWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingWriter {
    pub fn new() -> Self {
        let size = PageSize::default();
        Self {
            pages: vec![RecordedPage {
                size,
                ops: Vec::new(),
            }],
            current: 0,
            size,
            fill: Cmyk::PURE_BLACK,
            stroke: Cmyk::PURE_BLACK,
            text: Cmyk::PURE_BLACK,
            font: (FontStyle::Regular, 12.0),
            line_width: 1.0,
            dash: None,
        }
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&RecordedPage> {
        self.pages.get(index)
    }

    pub fn into_pages(self) -> Vec<RecordedPage> {
        self.pages
    }

    fn push(&mut self, op: DrawOp) {
        self.pages[self.current].ops.push(op);
    }
}

impl DocumentWriter for RecordingWriter {
    fn set_page_size(&mut self, size: PageSize) {
        self.size = size;
        self.pages[self.current].size = size;
    }

    fn set_fill_color(&mut self, color: Cmyk) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Cmyk) {
        self.stroke = color;
    }

    fn set_text_color(&mut self, color: Cmyk) {
        self.text = color;
    }

    fn set_font(&mut self, style: FontStyle, size_pt: f32) {
        self.font = (style, size_pt);
    }

    fn set_line_width(&mut self, width_pt: f32) {
        self.line_width = width_pt;
    }

    fn set_line_dash(&mut self, dash: Option<DashPattern>) {
        self.dash = dash;
    }

    fn draw_rect(&mut self, rect: Rect, mode: DrawMode) {
        self.push(DrawOp::Rect {
            rect,
            mode,
            fill: self.fill,
            stroke: self.stroke,
            line_width: self.line_width,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: self.stroke,
            line_width: self.line_width,
            dash: self.dash,
        });
    }

    fn measure_text_width(&self, text: &str) -> f32 {
        text_width(self.font.0, self.font.1, text)
    }

    fn draw_text(&mut self, lines: &[String], x: f32, y: f32, line_height: f32) {
        self.push(DrawOp::Text {
            lines: lines.to_vec(),
            x,
            y,
            line_height,
            color: self.text,
            style: self.font.0,
            size_pt: self.font.1,
        });
    }

    fn new_page(&mut self) {
        self.pages.push(RecordedPage {
            size: self.size,
            ops: Vec::new(),
        });
        self.current = self.pages.len() - 1;
    }

    fn set_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// A plain-text dump of the recorded calls, one per line
    fn finalize(self) -> Result<Vec<u8>> {
        let mut out = String::new();
        for (index, page) in self.pages.iter().enumerate() {
            let _ = writeln!(
                out,
                "page {} {}x{}",
                index + 1,
                page.size.width_pt,
                page.size.height_pt
            );
            for op in &page.ops {
                let _ = writeln!(out, "  {:?}", op);
            }
        }
        Ok(out.into_bytes())
    }
}
