//! Layout engine
//!
//! Walks a menu document and emits drawing calls to a [`DocumentWriter`]:
//! - [`StackedLayout`] paginates flat templates onto as many pages as needed
//! - [`FoldLayout`] fills the panels of a folded sheet and truncates overflow
//!
//! Both policies share the placement steps in `placement` and the same
//! per-run state: a [`LayoutCursor`] and the colors resolved once per run.

mod cursor;
mod fold;
mod placement;
mod stacked;

pub use cursor::LayoutCursor;
pub use fold::{FoldLayout, partition_sections};
pub use stacked::StackedLayout;

use crate::color::{Cmyk, cmyk_for_print};
use crate::document::{Menu, MenuDocument, Template};
use crate::geometry::PageGeometry;
use crate::options::PrintOptions;
use crate::types::*;
use crate::writer::DocumentWriter;
use std::ops::Range;

/// Menu colors converted for press, once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColors {
    pub background: Cmyk,
    pub text: Cmyk,
    pub accent: Cmyk,
}

impl ResolvedColors {
    pub fn resolve(menu: &Menu, options: &PrintOptions) -> Self {
        Self {
            background: cmyk_for_print(&menu.background_color, options.rich_black_background),
            text: cmyk_for_print(&menu.text_color, false),
            accent: cmyk_for_print(&menu.accent_color, false),
        }
    }
}

/// Read-only inputs of one layout run
#[derive(Debug, Clone)]
pub struct LayoutContext<'a> {
    pub document: &'a MenuDocument,
    pub geometry: PageGeometry,
    pub colors: ResolvedColors,
    pub options: &'a PrintOptions,
}

impl<'a> LayoutContext<'a> {
    pub fn new(document: &'a MenuDocument, options: &'a PrintOptions) -> Self {
        Self {
            document,
            geometry: PageGeometry::from_template(&document.template),
            colors: ResolvedColors::resolve(&document.menu, options),
            options,
        }
    }
}

/// What happened in one panel of a folded sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelReport {
    pub index: usize,
    /// Sections (by display order) assigned to this panel
    pub sections: Range<usize>,
    pub sections_placed: usize,
    pub items_placed: usize,
    pub dropped_sections: usize,
    pub dropped_items: usize,
}

/// Outcome of a layout run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Name of the policy that produced the layout
    pub policy: &'static str,
    pub pages: usize,
    /// Per-panel detail; empty for stacked layouts
    pub panels: Vec<PanelReport>,
    pub sections_placed: usize,
    pub items_placed: usize,
    /// Content left out of a folded sheet for lack of room
    pub dropped_sections: usize,
    pub dropped_items: usize,
}

impl LayoutReport {
    pub fn new(policy: &'static str) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn add_panel(&mut self, panel: PanelReport) {
        self.sections_placed += panel.sections_placed;
        self.items_placed += panel.items_placed;
        self.dropped_sections += panel.dropped_sections;
        self.dropped_items += panel.dropped_items;
        self.panels.push(panel);
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped_sections > 0 || self.dropped_items > 0
    }
}

/// A way of laying a menu out onto pages or panels
pub trait LayoutPolicy {
    fn name(&self) -> &'static str;

    fn layout<W: DocumentWriter + ?Sized>(
        &self,
        ctx: &LayoutContext<'_>,
        writer: &mut W,
    ) -> LayoutReport;
}

/// The policy chosen for a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Stacked(StackedLayout),
    Fold(FoldLayout),
}

impl LayoutPolicy for Policy {
    fn name(&self) -> &'static str {
        match self {
            Policy::Stacked(policy) => policy.name(),
            Policy::Fold(policy) => policy.name(),
        }
    }

    fn layout<W: DocumentWriter + ?Sized>(
        &self,
        ctx: &LayoutContext<'_>,
        writer: &mut W,
    ) -> LayoutReport {
        match self {
            Policy::Stacked(policy) => policy.layout(ctx, writer),
            Policy::Fold(policy) => policy.layout(ctx, writer),
        }
    }
}

/// Folded templates (more than one panel) truncate; flat ones paginate
pub fn select_policy(template: &Template) -> Policy {
    if template.is_folded() {
        Policy::Fold(FoldLayout)
    } else {
        Policy::Stacked(StackedLayout)
    }
}

/// Validate `document` and lay it out with the policy its template calls for
pub fn layout_menu<W: DocumentWriter + ?Sized>(
    document: &MenuDocument,
    options: &PrintOptions,
    writer: &mut W,
) -> Result<LayoutReport> {
    document.validate()?;
    options.validate()?;

    let ctx = LayoutContext::new(document, options);
    let policy = select_policy(&document.template);
    log::debug!(
        "Laying out '{}' on '{}' with the {} policy",
        document.menu.name,
        document.template.name,
        policy.name()
    );

    Ok(policy.layout(&ctx, writer))
}
