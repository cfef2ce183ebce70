//! Page and panel geometry derived from a template
//!
//! All values are points. Coordinates use a top-left origin with y growing
//! downward, the same convention as [`crate::DocumentWriter`].

use crate::constants::mm_to_pt;
use crate::document::Template;

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// Grow by `amount` on every side
    pub fn expand(&self, amount: f32) -> Rect {
        self.inset(-amount)
    }
}

/// Computed dimensions for one template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Width of a single page or panel
    pub width_pt: f32,
    pub height_pt: f32,
    pub bleed_pt: f32,
    pub margin_pt: f32,
    pub panels: usize,
}

impl PageGeometry {
    pub fn from_template(template: &Template) -> Self {
        Self {
            width_pt: mm_to_pt(template.width_mm),
            height_pt: mm_to_pt(template.height_mm),
            bleed_pt: mm_to_pt(template.bleed_mm),
            margin_pt: mm_to_pt(template.safe_margin_mm),
            panels: template.panels.max(1),
        }
    }

    /// Full physical width: every panel side by side
    pub fn sheet_width_pt(&self) -> f32 {
        self.width_pt * self.panels as f32
    }

    /// Trim box of the whole sheet
    pub fn page_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.sheet_width_pt(), self.height_pt)
    }

    /// Trim box grown by the bleed. Only the background fill uses this.
    pub fn bleed_box(&self) -> Rect {
        self.page_box().expand(self.bleed_pt)
    }

    /// Area inside the safe margin of a single-panel page
    pub fn content_box(&self) -> Rect {
        self.panel_content_box(0)
    }

    pub fn content_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    /// Lowest y a line of content may start at before the bottom margin
    pub fn bottom_limit(&self) -> f32 {
        self.height_pt - self.margin_pt
    }

    /// Trim box of panel `index`; panel 0 is the leading (title) panel
    pub fn panel_box(&self, index: usize) -> Rect {
        Rect::new(
            self.width_pt * index as f32,
            0.0,
            self.width_pt,
            self.height_pt,
        )
    }

    pub fn panel_content_box(&self, index: usize) -> Rect {
        self.panel_box(index).inset(self.margin_pt)
    }

    /// X coordinate of every internal panel boundary (none after the last)
    pub fn fold_positions(&self) -> Vec<f32> {
        (1..self.panels)
            .map(|i| self.width_pt * i as f32)
            .collect()
    }
}
