//! Shared constants for menu layout
//!
//! This module centralizes the magic numbers used by the color pipeline,
//! the page geometry and both layout policies.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm), fixed at
/// five decimals
pub const POINTS_PER_MM: f32 = 2.83465;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Color
// =============================================================================

/// Channels at or below this value (0-255) count as near black
pub const NEAR_BLACK_THRESHOLD: u8 = 30;

// =============================================================================
// Title Block
// =============================================================================

pub const TITLE_FONT_SIZE: f32 = 32.0;

/// Distance from the top margin to the title baseline. Also the cursor
/// offset used at the top of every continuation page.
pub const TITLE_OFFSET: f32 = 40.0;

pub const DESCRIPTION_FONT_SIZE: f32 = 12.0;
pub const DESCRIPTION_LEAD: f32 = 25.0;
pub const DESCRIPTION_LINE_HEIGHT: f32 = 15.0;

/// Gap between the title block and the first section
pub const HEADER_GAP: f32 = 30.0;

// =============================================================================
// Sections
// =============================================================================

/// Space that must remain above the bottom margin to start a section
pub const SECTION_RESERVE: f32 = 100.0;

pub const SECTION_TITLE_FONT_SIZE: f32 = 20.0;
pub const SECTION_TITLE_TO_RULE: f32 = 8.0;
pub const SECTION_RULE_WIDTH: f32 = 1.0;
pub const SECTION_RULE_TO_CONTENT: f32 = 20.0;

pub const SECTION_DESCRIPTION_FONT_SIZE: f32 = 11.0;
pub const SECTION_DESCRIPTION_LINE_HEIGHT: f32 = 14.0;
pub const SECTION_DESCRIPTION_GAP: f32 = 10.0;

/// Gap after the last item of a section
pub const SECTION_GAP: f32 = 20.0;

// =============================================================================
// Items
// =============================================================================

/// Space that must remain above the bottom margin to place an item
pub const ITEM_RESERVE: f32 = 60.0;

pub const ITEM_FONT_SIZE: f32 = 14.0;
pub const ITEM_LINE_ADVANCE: f32 = 15.0;

pub const ITEM_DESCRIPTION_FONT_SIZE: f32 = 10.0;
pub const ITEM_DESCRIPTION_INDENT: f32 = 10.0;
/// The description wraps to the content width minus this amount
pub const ITEM_DESCRIPTION_NARROWING: f32 = 20.0;
pub const ITEM_DESCRIPTION_LINE_HEIGHT: f32 = 12.0;
pub const ITEM_DESCRIPTION_GAP: f32 = 10.0;

/// Advance after an item that has no description
pub const ITEM_GAP: f32 = 10.0;

// =============================================================================
// Printer's Marks
// =============================================================================

/// Line width for the content border (points)
pub const BORDER_LINE_WIDTH: f32 = 0.5;

/// Line width for fold lines (points)
pub const FOLD_LINE_WIDTH: f32 = 0.5;

/// Fold line dash pattern: 6pt dash, 3pt gap
pub const FOLD_LINE_DASH: (f32, f32) = (6.0, 3.0);

// =============================================================================
// Font Metrics
// =============================================================================

/// Advance width (1/1000 em) used for characters without a metric entry
pub const FALLBACK_GLYPH_WIDTH: u16 = 556;
