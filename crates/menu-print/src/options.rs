use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Print generation settings that are not part of the menu itself
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintOptions {
    /// Print a near-black background as rich black instead of K-only
    pub rich_black_background: bool,

    /// Prefix for prices
    pub currency_symbol: String,

    // Printer's marks
    pub draw_content_border: bool,
    pub draw_fold_lines: bool,

    // PDF metadata
    pub creator: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            rich_black_background: false,
            currency_symbol: "$".to_string(),
            draw_content_border: true,
            draw_fold_lines: true,
            creator: "Menu PDF Generator".to_string(),
        }
    }
}

impl PrintOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: PrintOptions = serde_json::from_slice(&bytes)
            .map_err(|e| MenuPrintError::Config(format!("Failed to parse options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MenuPrintError::Config(format!("Failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency_symbol.chars().any(char::is_control) {
            return Err(MenuPrintError::Config(
                "Currency symbol must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }

    /// Price as it appears on the menu, e.g. `$5.50`
    pub fn format_price(&self, price: f64) -> String {
        // -0.0 passes the non-negative check but would print as "-0.00"
        let price = if price == 0.0 { 0.0 } else { price };
        format!("{}{:.2}", self.currency_symbol, price)
    }
}
