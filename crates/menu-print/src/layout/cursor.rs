use crate::constants::TITLE_OFFSET;

/// Position of the next line of content within one generation run.
///
/// `page` is the page index for stacked layouts and the panel index for
/// folded ones. A cursor belongs to exactly one run and is dropped with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page: usize,
    pub y: f32,
}

impl LayoutCursor {
    /// Top of the content box of the first page
    pub fn start(margin_pt: f32) -> Self {
        Self {
            page: 0,
            y: margin_pt,
        }
    }

    pub fn at(page: usize, y: f32) -> Self {
        Self { page, y }
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Whether `reserve` points still fit above `bottom_limit`
    pub fn has_room(&self, bottom_limit: f32, reserve: f32) -> bool {
        self.y <= bottom_limit - reserve
    }

    /// Move to the top of the next page
    pub fn break_page(&mut self, margin_pt: f32) {
        self.page += 1;
        self.y = margin_pt + TITLE_OFFSET;
    }
}
