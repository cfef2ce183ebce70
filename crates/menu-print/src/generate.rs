//! End-to-end print generation
//!
//! 1. Fetch the menu and its template from a store
//! 2. Lay it out with the policy the template calls for
//! 3. Finalize the PDF and write it out in one piece

use crate::document::MenuDocument;
use crate::layout::{LayoutReport, layout_menu};
use crate::options::PrintOptions;
use crate::render::{DocumentInfo, PdfWriter};
use crate::store::MenuStore;
use crate::types::*;
use crate::writer::DocumentWriter;
use std::path::{Path, PathBuf};

/// A finished PDF and what the layout did to produce it
#[derive(Debug, Clone)]
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub report: LayoutReport,
}

/// Result of [`generate_from_store`]
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub path: PathBuf,
    pub report: LayoutReport,
}

/// File name for the print artifact of a menu: anything that is not an
/// ASCII letter or digit becomes `_`.
pub fn print_filename(menu_name: &str) -> String {
    let stem: String = menu_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_CMYK_Print.pdf", stem)
}

/// Lay out and render a menu to PDF bytes (CPU-bound, synchronous)
pub fn generate_pdf_bytes(document: &MenuDocument, options: &PrintOptions) -> Result<GeneratedPdf> {
    let mut writer = PdfWriter::new(DocumentInfo {
        title: document.menu.name.clone(),
        creator: options.creator.clone(),
        ..Default::default()
    });

    let report = layout_menu(document, options, &mut writer)?;
    let bytes = writer.finalize()?;

    Ok(GeneratedPdf { bytes, report })
}

/// Generate a menu PDF and write it to `output_path`
pub async fn generate_pdf(
    document: &MenuDocument,
    options: &PrintOptions,
    output_path: impl AsRef<Path>,
) -> Result<LayoutReport> {
    let document = document.clone();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    log::info!("Generating print PDF for '{}'", document.menu.name);

    let generated =
        tokio::task::spawn_blocking(move || generate_pdf_bytes(&document, &options)).await??;

    tokio::fs::write(&output_path, &generated.bytes).await?;

    log::info!(
        "Wrote {} page(s) to {}",
        generated.report.pages,
        output_path.display()
    );

    Ok(generated.report)
}

/// Fetch the inputs of a generation run. Any store failure is reported as
/// [`MenuPrintError::GenerationFailed`].
pub async fn fetch_for_print<S: MenuStore>(store: &S, menu_id: &str) -> Result<MenuDocument> {
    store
        .fetch_document(menu_id)
        .await
        .map_err(|e| MenuPrintError::GenerationFailed(e.to_string()))
}

/// Fetch a menu from `store` and write its PDF into `output_dir` under
/// [`print_filename`].
///
/// Fetch failures are reported as in [`fetch_for_print`] and nothing is
/// written.
pub async fn generate_from_store<S: MenuStore>(
    store: &S,
    menu_id: &str,
    options: &PrintOptions,
    output_dir: impl AsRef<Path>,
) -> Result<GenerationOutcome> {
    let document = fetch_for_print(store, menu_id).await?;

    let path = output_dir
        .as_ref()
        .join(print_filename(&document.menu.name));
    let report = generate_pdf(&document, options, &path).await?;

    Ok(GenerationOutcome { path, report })
}
