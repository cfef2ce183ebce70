//! CSV import of menu items
//!
//! Expected columns: `section,name,price[,description]` with a header row.

use crate::document::{Item, Menu, Section};
use crate::types::*;
use std::path::Path;

/// One parsed CSV row
#[derive(Debug, Clone, PartialEq)]
pub struct CsvItem {
    pub section: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

pub async fn load_items_from_csv(path: impl AsRef<Path>) -> Result<Vec<CsvItem>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let items = tokio::task::spawn_blocking(move || parse_items(&contents)).await??;

    Ok(items)
}

pub fn parse_items(contents: &str) -> Result<Vec<CsvItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let mut items = Vec::new();

    for result in reader.records() {
        let record = result?;
        if record.len() < 3 {
            continue;
        }

        let line = record.position().map_or(0, |p| p.line());
        let price: f64 = record[2].trim_start_matches('$').parse().map_err(|_| {
            MenuPrintError::Config(format!("Invalid price '{}' on line {}", &record[2], line))
        })?;
        if !price.is_finite() || price < 0.0 {
            return Err(MenuPrintError::Config(format!(
                "Price must be non-negative on line {}",
                line
            )));
        }

        items.push(CsvItem {
            section: record[0].to_string(),
            name: record[1].to_string(),
            // "-0" parses as -0.0
            price: if price == 0.0 { 0.0 } else { price },
            description: record
                .get(3)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        });
    }

    Ok(items)
}

/// Append rows to `menu`. Sections are matched by title; unknown titles
/// become new sections in first-appearance order. Returns the number of
/// items added.
pub fn merge_into_menu(menu: &mut Menu, rows: Vec<CsvItem>) -> usize {
    let mut added = 0;

    for row in rows {
        if menu.section_mut(&row.section).is_none() {
            menu.add_section(Section::new(row.section.clone()));
        }
        let Some(section) = menu.section_mut(&row.section) else {
            continue;
        };

        let mut item = Item::new(row.name, row.price);
        item.description = row.description;
        section.add_item(item);
        added += 1;
    }

    added
}
