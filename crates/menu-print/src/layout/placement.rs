//! Placement steps shared by both layout policies
//!
//! Each step draws one block at the cursor and advances it. Page breaks and
//! overflow decisions are left to the caller.

use super::{LayoutContext, LayoutCursor};
use crate::color::Cmyk;
use crate::constants::*;
use crate::document::{Item, Section};
use crate::geometry::Rect;
use crate::writer::{DashPattern, DocumentWriter, DrawMode, FontStyle};

/// Horizontal extent that content is placed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Column {
    /// Area titles are centered over (a page or panel trim box)
    pub span: Rect,
    /// Area inside the safe margin
    pub content: Rect,
}

impl Column {
    pub fn for_panel(ctx: &LayoutContext<'_>, panel: usize) -> Self {
        Self {
            span: ctx.geometry.panel_box(panel),
            content: ctx.geometry.panel_content_box(panel),
        }
    }
}

pub(crate) fn paint_background<W: DocumentWriter + ?Sized>(
    writer: &mut W,
    area: Rect,
    color: Cmyk,
) {
    writer.set_fill_color(color);
    writer.draw_rect(area, DrawMode::Fill);
}

/// Menu title centered over the column, then the optional description
pub(crate) fn place_title_block<W: DocumentWriter + ?Sized>(
    writer: &mut W,
    ctx: &LayoutContext<'_>,
    column: &Column,
    cursor: &mut LayoutCursor,
) {
    let menu = &ctx.document.menu;

    writer.set_font(FontStyle::Bold, TITLE_FONT_SIZE);
    writer.set_text_color(ctx.colors.text);
    let title_width = writer.measure_text_width(&menu.name);
    let title_x = column.span.x + (column.span.width - title_width) / 2.0;
    cursor.advance(TITLE_OFFSET);
    writer.draw_text_line(&menu.name, title_x, cursor.y);

    if let Some(description) = menu.description() {
        writer.set_font(FontStyle::Regular, DESCRIPTION_FONT_SIZE);
        cursor.advance(DESCRIPTION_LEAD);
        let lines = writer.wrap_text(description, column.content.width);
        writer.draw_text(&lines, column.content.x, cursor.y, DESCRIPTION_LINE_HEIGHT);
        cursor.advance(lines.len() as f32 * DESCRIPTION_LINE_HEIGHT);
    }

    cursor.advance(HEADER_GAP);
}

/// Section title in the accent color, a rule under it, and the optional
/// description
pub(crate) fn place_section_header<W: DocumentWriter + ?Sized>(
    writer: &mut W,
    ctx: &LayoutContext<'_>,
    column: &Column,
    section: &Section,
    cursor: &mut LayoutCursor,
) {
    let x = column.content.x;

    writer.set_font(FontStyle::Bold, SECTION_TITLE_FONT_SIZE);
    writer.set_text_color(ctx.colors.accent);
    writer.draw_text_line(&section.title, x, cursor.y);
    cursor.advance(SECTION_TITLE_TO_RULE);

    writer.set_stroke_color(Cmyk::PURE_BLACK);
    writer.set_line_width(SECTION_RULE_WIDTH);
    writer.set_line_dash(None);
    writer.draw_line(x, cursor.y, column.content.right(), cursor.y);
    cursor.advance(SECTION_RULE_TO_CONTENT);

    if let Some(description) = section.description() {
        writer.set_font(FontStyle::Italic, SECTION_DESCRIPTION_FONT_SIZE);
        writer.set_text_color(ctx.colors.text);
        let lines = writer.wrap_text(description, column.content.width);
        writer.draw_text(&lines, x, cursor.y, SECTION_DESCRIPTION_LINE_HEIGHT);
        cursor.advance(lines.len() as f32 * SECTION_DESCRIPTION_LINE_HEIGHT + SECTION_DESCRIPTION_GAP);
    }
}

/// Item name with its price right-aligned on the same baseline, then the
/// optional indented description
pub(crate) fn place_item<W: DocumentWriter + ?Sized>(
    writer: &mut W,
    ctx: &LayoutContext<'_>,
    column: &Column,
    item: &Item,
    cursor: &mut LayoutCursor,
) {
    let content = &column.content;

    writer.set_font(FontStyle::Bold, ITEM_FONT_SIZE);
    writer.set_text_color(Cmyk::PURE_BLACK);
    let price = ctx.options.format_price(item.price);
    let price_width = writer.measure_text_width(&price);
    writer.draw_text_line(&item.name, content.x, cursor.y);
    writer.draw_text_line(&price, content.right() - price_width, cursor.y);
    cursor.advance(ITEM_LINE_ADVANCE);

    match item.description() {
        Some(description) => {
            writer.set_font(FontStyle::Regular, ITEM_DESCRIPTION_FONT_SIZE);
            writer.set_text_color(ctx.colors.text);
            let lines =
                writer.wrap_text(description, content.width - ITEM_DESCRIPTION_NARROWING);
            writer.draw_text(
                &lines,
                content.x + ITEM_DESCRIPTION_INDENT,
                cursor.y,
                ITEM_DESCRIPTION_LINE_HEIGHT,
            );
            cursor.advance(lines.len() as f32 * ITEM_DESCRIPTION_LINE_HEIGHT + ITEM_DESCRIPTION_GAP);
        }
        None => cursor.advance(ITEM_GAP),
    }
}

/// Thin K-only frame around a content box
pub(crate) fn draw_content_border<W: DocumentWriter + ?Sized>(writer: &mut W, content: Rect) {
    writer.set_stroke_color(Cmyk::PURE_BLACK);
    writer.set_line_width(BORDER_LINE_WIDTH);
    writer.set_line_dash(None);
    writer.draw_rect(content, DrawMode::Stroke);
}

/// Dashed vertical line across the full sheet height
pub(crate) fn draw_fold_line<W: DocumentWriter + ?Sized>(writer: &mut W, x: f32, height: f32) {
    let (dash, gap) = FOLD_LINE_DASH;
    writer.set_stroke_color(Cmyk::PURE_BLACK);
    writer.set_line_width(FOLD_LINE_WIDTH);
    writer.set_line_dash(Some(DashPattern { dash, gap }));
    writer.draw_line(x, 0.0, x, height);
    writer.set_line_dash(None);
}
