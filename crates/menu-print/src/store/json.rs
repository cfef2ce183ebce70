//! Menu store backed by a single JSON file

use super::MenuStore;
use crate::document::{Menu, MenuDocument, Template, TemplatePreset};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk layout of the store file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

/// Keeps the whole store in memory; [`JsonMenuStore::save`] writes it back.
///
/// Template ids not present in the file fall back to the built-in presets.
#[derive(Debug, Clone)]
pub struct JsonMenuStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonMenuStore {
    pub fn new(path: impl AsRef<Path>, data: StoreData) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            data,
        }
    }

    /// Load an existing store file
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let bytes = tokio::fs::read(&path).await?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(Self { path, data })
    }

    /// Load a store file, starting empty if it does not exist yet
    pub async fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::open(&path).await {
            Err(MenuPrintError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No store at {}, starting empty", path.as_ref().display());
                Ok(Self::new(path, StoreData::default()))
            }
            other => other,
        }
    }

    pub async fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    pub fn menu(&self, id: &str) -> Option<&Menu> {
        self.data.menus.iter().find(|m| m.id == id)
    }

    pub fn menu_mut(&mut self, id: &str) -> Option<&mut Menu> {
        self.data.menus.iter_mut().find(|m| m.id == id)
    }

    /// A stored template, or the preset with that id
    pub fn template(&self, id: &str) -> Option<Template> {
        self.data
            .templates
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .or_else(|| TemplatePreset::from_id(id).map(TemplatePreset::template))
    }

    /// Add a template, replacing any stored template with the same id
    pub fn insert_template(&mut self, template: Template) -> Result<()> {
        template.validate()?;
        self.data.templates.retain(|t| t.id != template.id);
        self.data.templates.push(template);
        Ok(())
    }

    /// Create a menu with the editor defaults on `template_id`
    pub fn create_menu(&mut self, template_id: &str) -> Result<&mut Menu> {
        if self.template(template_id).is_none() {
            return Err(MenuPrintError::NotFound(format!(
                "template '{}'",
                template_id
            )));
        }

        let id = self.next_menu_id();
        self.data.menus.push(Menu::new(id, template_id));
        let last = self.data.menus.len() - 1;
        Ok(&mut self.data.menus[last])
    }

    pub fn delete_menu(&mut self, id: &str) -> bool {
        let before = self.data.menus.len();
        self.data.menus.retain(|m| m.id != id);
        self.data.menus.len() != before
    }

    fn next_menu_id(&self) -> String {
        (self.data.menus.len() + 1..)
            .map(|n| format!("menu-{}", n))
            .find(|id| self.menu(id).is_none())
            .unwrap_or_default()
    }
}

impl MenuStore for JsonMenuStore {
    async fn fetch_document(&self, menu_id: &str) -> Result<MenuDocument> {
        let mut menu = self
            .menu(menu_id)
            .cloned()
            .ok_or_else(|| MenuPrintError::NotFound(format!("menu '{}'", menu_id)))?;
        let template = self.template(&menu.template_id).ok_or_else(|| {
            MenuPrintError::NotFound(format!(
                "template '{}' for menu '{}'",
                menu.template_id, menu_id
            ))
        })?;

        menu.sections.sort_by_key(|s| s.position);
        for section in &mut menu.sections {
            section.items.sort_by_key(|i| i.position);
        }

        Ok(MenuDocument::new(menu, template))
    }

    async fn list_templates(&self) -> Result<Vec<Template>> {
        let mut templates = self.data.templates.clone();
        for preset in TemplatePreset::ALL {
            if !templates.iter().any(|t| t.id == preset.id()) {
                templates.push(preset.template());
            }
        }
        Ok(templates)
    }
}
