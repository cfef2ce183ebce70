//! Menu document model
//!
//! Plain data handed to the layout engine by a [`crate::MenuStore`]. Layout
//! never mutates these records; edits happen before a generation run.

use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_MENU_NAME: &str = "New Menu";
pub const DEFAULT_SECTION_TITLE: &str = "New Section";
pub const DEFAULT_ITEM_NAME: &str = "New Item";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_ACCENT_COLOR: &str = "#FF6B35";

/// How a multi-panel sheet is folded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FoldType {
    /// Flat sheet, no folds
    #[default]
    None,
    /// Single fold down the middle (two panels)
    #[cfg_attr(feature = "serde", serde(alias = "einbruchfalz"))]
    HalfFold,
    /// Panels fold inward in the same direction, one wrapped inside the next
    #[cfg_attr(feature = "serde", serde(alias = "wickelfalz"))]
    RollFold,
    /// Zigzag: alternating fold directions
    #[cfg_attr(feature = "serde", serde(alias = "zickzackfalz"))]
    AccordionFold,
}

impl FoldType {
    pub fn name(&self) -> &'static str {
        match self {
            FoldType::None => "Flat",
            FoldType::HalfFold => "Half fold",
            FoldType::RollFold => "Roll fold",
            FoldType::AccordionFold => "Accordion fold",
        }
    }
}

/// Physical page description for a menu.
///
/// `width_mm` is the width of a single panel. A folded template lays
/// `panels` of them side by side on one sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    pub id: String,
    pub name: String,
    pub width_mm: f32,
    pub height_mm: f32,
    pub bleed_mm: f32,
    pub safe_margin_mm: f32,
    pub panels: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fold_type: FoldType,
}

impl Template {
    pub fn is_folded(&self) -> bool {
        self.panels > 1
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width_mm > 0.0 && self.height_mm > 0.0) {
            return Err(MenuPrintError::Config(format!(
                "Template '{}' must have a positive width and height",
                self.name
            )));
        }
        if !(self.bleed_mm >= 0.0 && self.safe_margin_mm >= 0.0) {
            return Err(MenuPrintError::Config(format!(
                "Template '{}' has a negative bleed or safe margin",
                self.name
            )));
        }
        if self.panels == 0 {
            return Err(MenuPrintError::Config(format!(
                "Template '{}' must have at least one panel",
                self.name
            )));
        }
        let min_side = self.width_mm.min(self.height_mm);
        if self.safe_margin_mm * 2.0 >= min_side {
            return Err(MenuPrintError::Config(format!(
                "Template '{}' safe margin leaves no content area",
                self.name
            )));
        }
        Ok(())
    }
}

/// Built-in templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePreset {
    A4,
    A5,
    Letter,
    /// DL roll-folded trifold, 3 x 99mm panels
    DlTrifold,
    /// A4 landscape folded once into two A5-ish panels
    A4HalfFold,
    /// DL accordion fold, 3 x 99mm panels
    DlZigzag,
}

impl TemplatePreset {
    pub const ALL: [TemplatePreset; 6] = [
        TemplatePreset::A4,
        TemplatePreset::A5,
        TemplatePreset::Letter,
        TemplatePreset::DlTrifold,
        TemplatePreset::A4HalfFold,
        TemplatePreset::DlZigzag,
    ];

    /// Stable identifier, also used as the template id
    pub fn id(self) -> &'static str {
        match self {
            TemplatePreset::A4 => "a4",
            TemplatePreset::A5 => "a5",
            TemplatePreset::Letter => "letter",
            TemplatePreset::DlTrifold => "dl-trifold",
            TemplatePreset::A4HalfFold => "a4-half-fold",
            TemplatePreset::DlZigzag => "dl-zigzag",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.id() == id)
    }

    pub fn template(self) -> Template {
        let (name, width_mm, height_mm, panels, fold_type) = match self {
            TemplatePreset::A4 => ("A4", 210.0, 297.0, 1, FoldType::None),
            TemplatePreset::A5 => ("A5", 148.0, 210.0, 1, FoldType::None),
            TemplatePreset::Letter => ("Letter", 215.9, 279.4, 1, FoldType::None),
            TemplatePreset::DlTrifold => ("DL Trifold", 99.0, 210.0, 3, FoldType::RollFold),
            TemplatePreset::A4HalfFold => ("A4 Half Fold", 148.5, 210.0, 2, FoldType::HalfFold),
            TemplatePreset::DlZigzag => ("DL Zigzag", 99.0, 210.0, 3, FoldType::AccordionFold),
        };
        Template {
            id: self.id().to_string(),
            name: name.to_string(),
            width_mm,
            height_mm,
            bleed_mm: 3.0,
            safe_margin_mm: 10.0,
            panels,
            fold_type,
        }
    }
}

/// One priced entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    pub price: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            position: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description, treating an empty string as absent
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: i64,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            items: Vec::new(),
            position: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Append an item after the current highest position.
    /// Gaps in positions are kept; nothing is renumbered.
    pub fn add_item(&mut self, mut item: Item) -> &mut Item {
        item.position = next_position(self.items.iter().map(|i| i.position));
        self.items.push(item);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Append a default item ("New Item", price 0)
    pub fn add_default_item(&mut self) -> &mut Item {
        self.add_item(Item::new(DEFAULT_ITEM_NAME, 0.0))
    }

    /// Items in display order
    pub fn ordered_items(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by_key(|item| item.position);
        items
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Menu {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub template_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<Section>,
}

impl Menu {
    /// A fresh menu with the editor defaults
    pub fn new(id: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: DEFAULT_MENU_NAME.to_string(),
            description: String::new(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            template_id: template_id.into(),
            sections: Vec::new(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(Some(&self.description))
    }

    /// Append a section after the current highest position
    pub fn add_section(&mut self, mut section: Section) -> &mut Section {
        section.position = next_position(self.sections.iter().map(|s| s.position));
        self.sections.push(section);
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Append a default section ("New Section")
    pub fn add_default_section(&mut self) -> &mut Section {
        self.add_section(Section::new(DEFAULT_SECTION_TITLE))
    }

    pub fn section_mut(&mut self, title: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.title == title)
    }
}

/// A menu together with the template it is printed on
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDocument {
    pub menu: Menu,
    pub template: Template,
}

impl MenuDocument {
    pub fn new(menu: Menu, template: Template) -> Self {
        Self { menu, template }
    }

    /// Sections in display order, each with its items in display order
    pub fn ordered_sections(&self) -> Vec<OrderedSection<'_>> {
        let mut sections: Vec<&Section> = self.menu.sections.iter().collect();
        sections.sort_by_key(|section| section.position);
        sections
            .into_iter()
            .map(|section| OrderedSection {
                section,
                items: section.ordered_items(),
            })
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.menu.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn validate(&self) -> Result<()> {
        self.template.validate()?;

        for section in &self.menu.sections {
            for item in &section.items {
                if !item.price.is_finite() || item.price < 0.0 {
                    return Err(MenuPrintError::Config(format!(
                        "Item '{}' in section '{}' has an invalid price: {}",
                        item.name, section.title, item.price
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A section borrowed in display order
#[derive(Debug, Clone)]
pub struct OrderedSection<'a> {
    pub section: &'a Section,
    pub items: Vec<&'a Item>,
}

fn next_position(positions: impl Iterator<Item = i64>) -> i64 {
    positions.max().map_or(0, |max| max + 1)
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
