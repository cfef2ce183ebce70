//! Single-sheet layout that flows onto as many pages as it needs

use super::placement::{
    Column, draw_content_border, paint_background, place_item, place_section_header,
    place_title_block,
};
use super::{LayoutContext, LayoutCursor, LayoutPolicy, LayoutReport};
use crate::constants::{ITEM_RESERVE, SECTION_GAP, SECTION_RESERVE};
use crate::writer::{DocumentWriter, PageSize};

/// Paginating policy for flat (one-panel) templates.
///
/// When a section header or an item does not fit above the bottom margin a
/// new page is started. Items continue on the new page without repeating
/// their section header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackedLayout;

impl StackedLayout {
    fn start_page<W: DocumentWriter + ?Sized>(
        &self,
        writer: &mut W,
        ctx: &LayoutContext<'_>,
        cursor: &mut LayoutCursor,
    ) {
        writer.new_page();
        cursor.break_page(ctx.geometry.margin_pt);
        paint_background(writer, ctx.geometry.bleed_box(), ctx.colors.background);
        log::debug!("Started page {}", cursor.page + 1);
    }
}

impl LayoutPolicy for StackedLayout {
    fn name(&self) -> &'static str {
        "stacked"
    }

    fn layout<W: DocumentWriter + ?Sized>(
        &self,
        ctx: &LayoutContext<'_>,
        writer: &mut W,
    ) -> LayoutReport {
        let geometry = &ctx.geometry;
        let bottom = geometry.bottom_limit();
        let column = Column::for_panel(ctx, 0);
        let mut report = LayoutReport::new(self.name());

        writer.set_page_size(PageSize {
            width_pt: geometry.width_pt,
            height_pt: geometry.height_pt,
            bleed_pt: geometry.bleed_pt,
        });

        let mut cursor = LayoutCursor::start(geometry.margin_pt);
        paint_background(writer, geometry.bleed_box(), ctx.colors.background);
        place_title_block(writer, ctx, &column, &mut cursor);

        for ordered in ctx.document.ordered_sections() {
            if !cursor.has_room(bottom, SECTION_RESERVE) {
                self.start_page(writer, ctx, &mut cursor);
            }
            place_section_header(writer, ctx, &column, ordered.section, &mut cursor);
            report.sections_placed += 1;

            for item in ordered.items {
                if !cursor.has_room(bottom, ITEM_RESERVE) {
                    self.start_page(writer, ctx, &mut cursor);
                }
                place_item(writer, ctx, &column, item, &mut cursor);
                report.items_placed += 1;
            }

            cursor.advance(SECTION_GAP);
        }

        report.pages = cursor.page + 1;

        if ctx.options.draw_content_border {
            let content = geometry.content_box();
            for page in 0..report.pages {
                writer.set_page(page);
                draw_content_border(writer, content);
            }
        }

        report
    }
}
