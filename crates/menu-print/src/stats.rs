use crate::constants::pt_to_mm;
use crate::document::MenuDocument;
use crate::geometry::PageGeometry;
use crate::layout::layout_menu;
use crate::options::PrintOptions;
use crate::types::*;
use crate::writer::{Orientation, PageSize, RecordingWriter};

/// Statistics about a print run, computed without producing a PDF
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatistics {
    /// Layout policy that would be used
    pub policy: &'static str,
    /// Physical sheet size including every panel, without bleed
    pub sheet_width_mm: f32,
    pub sheet_height_mm: f32,
    /// Orientation of the flat sheet as it goes to press
    pub orientation: Orientation,
    pub panels: usize,
    pub output_pages: usize,
    pub total_sections: usize,
    pub total_items: usize,
    pub sections_placed: usize,
    pub items_placed: usize,
    pub dropped_sections: usize,
    pub dropped_items: usize,
}

/// Run the layout against a [`RecordingWriter`] and summarize it
pub fn calculate_statistics(
    document: &MenuDocument,
    options: &PrintOptions,
) -> Result<PrintStatistics> {
    let mut writer = RecordingWriter::new();
    let report = layout_menu(document, options, &mut writer)?;
    let geometry = PageGeometry::from_template(&document.template);
    let sheet = PageSize {
        width_pt: geometry.sheet_width_pt(),
        height_pt: geometry.height_pt,
        bleed_pt: geometry.bleed_pt,
    };

    Ok(PrintStatistics {
        policy: report.policy,
        sheet_width_mm: pt_to_mm(geometry.sheet_width_pt()),
        sheet_height_mm: pt_to_mm(geometry.height_pt),
        orientation: sheet.orientation(),
        panels: geometry.panels,
        output_pages: report.pages,
        total_sections: document.menu.sections.len(),
        total_items: document.item_count(),
        sections_placed: report.sections_placed,
        items_placed: report.items_placed,
        dropped_sections: report.dropped_sections,
        dropped_items: report.dropped_items,
    })
}
