//! Multi-panel layout for folded sheets
//!
//! A folded menu is one physical sheet with `panels` equal-width panels side
//! by side. There is no second page to spill onto, so content that does not
//! fit its panel is left out. The count of dropped content is reported but
//! is not an error.

use super::placement::{
    Column, draw_content_border, draw_fold_line, paint_background, place_item,
    place_section_header, place_title_block,
};
use super::{LayoutContext, LayoutCursor, LayoutPolicy, LayoutReport, PanelReport};
use crate::constants::{ITEM_RESERVE, SECTION_GAP, SECTION_RESERVE};
use crate::writer::{DocumentWriter, PageSize};
use std::ops::Range;

/// Truncating policy for templates with more than one panel.
///
/// Sections are split across panels by a fixed quota (see
/// [`partition_sections`]), not packed by height, so panels can end up
/// unevenly filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoldLayout;

/// Static quota of sections per panel.
///
/// Panel `i` receives `[i * q, min((i + 1) * q, total))` where
/// `q = ceil(total / panels)`. Trailing panels may be empty.
pub fn partition_sections(total: usize, panels: usize) -> Vec<Range<usize>> {
    let panels = panels.max(1);
    let per_panel = total.div_ceil(panels);
    (0..panels)
        .map(|i| {
            let start = (i * per_panel).min(total);
            let end = ((i + 1) * per_panel).min(total);
            start..end
        })
        .collect()
}

impl LayoutPolicy for FoldLayout {
    fn name(&self) -> &'static str {
        "fold"
    }

    fn layout<W: DocumentWriter + ?Sized>(
        &self,
        ctx: &LayoutContext<'_>,
        writer: &mut W,
    ) -> LayoutReport {
        let geometry = &ctx.geometry;
        let bottom = geometry.bottom_limit();
        let sections = ctx.document.ordered_sections();
        let quotas = partition_sections(sections.len(), geometry.panels);
        let mut report = LayoutReport::new(self.name());

        writer.set_page_size(PageSize {
            width_pt: geometry.sheet_width_pt(),
            height_pt: geometry.height_pt,
            bleed_pt: geometry.bleed_pt,
        });
        paint_background(writer, geometry.bleed_box(), ctx.colors.background);

        // Only the leading panel carries the title; the others start level
        // with its first section.
        let mut header = LayoutCursor::start(geometry.margin_pt);
        place_title_block(writer, ctx, &Column::for_panel(ctx, 0), &mut header);
        let first_section_y = header.y;

        for (panel, quota) in quotas.into_iter().enumerate() {
            let column = Column::for_panel(ctx, panel);
            let mut cursor = LayoutCursor::at(panel, first_section_y);
            let mut panel_report = PanelReport {
                index: panel,
                sections: quota.clone(),
                ..Default::default()
            };

            for ordered in &sections[quota] {
                if !cursor.has_room(bottom, SECTION_RESERVE) {
                    panel_report.dropped_sections += 1;
                    panel_report.dropped_items += ordered.items.len();
                    continue;
                }
                place_section_header(writer, ctx, &column, ordered.section, &mut cursor);
                panel_report.sections_placed += 1;

                for item in &ordered.items {
                    if !cursor.has_room(bottom, ITEM_RESERVE) {
                        panel_report.dropped_items += 1;
                        continue;
                    }
                    place_item(writer, ctx, &column, item, &mut cursor);
                    panel_report.items_placed += 1;
                }

                cursor.advance(SECTION_GAP);
            }

            report.add_panel(panel_report);
        }

        if ctx.options.draw_content_border {
            for panel in 0..geometry.panels {
                draw_content_border(writer, geometry.panel_content_box(panel));
            }
        }
        if ctx.options.draw_fold_lines {
            for x in geometry.fold_positions() {
                draw_fold_line(writer, x, geometry.height_pt);
            }
        }

        report.pages = 1;
        if report.dropped_sections > 0 || report.dropped_items > 0 {
            log::debug!(
                "Folded layout left out {} sections and {} items",
                report.dropped_sections,
                report.dropped_items
            );
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_even() {
        assert_eq!(partition_sections(9, 3), vec![0..3, 3..6, 6..9]);
    }

    #[test]
    fn test_partition_uneven() {
        // ceil(7 / 3) = 3
        assert_eq!(partition_sections(7, 3), vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_partition_fewer_sections_than_panels() {
        // ceil(2 / 3) = 1, last panel stays empty
        assert_eq!(partition_sections(2, 3), vec![0..1, 1..2, 2..2]);
    }

    #[test]
    fn test_partition_quota_can_leave_panels_empty() {
        // ceil(4 / 3) = 2, so the third panel gets nothing
        assert_eq!(partition_sections(4, 3), vec![0..2, 2..4, 4..4]);
    }

    #[test]
    fn test_partition_no_sections() {
        assert_eq!(partition_sections(0, 2), vec![0..0, 0..0]);
    }
}
