pub mod color;
pub mod constants;
mod document;
mod generate;
pub mod geometry;
pub mod import;
pub mod layout;
mod options;
mod render;
mod stats;
pub mod store;
mod types;
pub mod writer;

pub use color::{Cmyk, Rgb, cmyk_for_print, hex_to_rgb, rgb_to_cmyk};
pub use document::*;
pub use generate::{
    GeneratedPdf, GenerationOutcome, fetch_for_print, generate_from_store, generate_pdf, generate_pdf_bytes,
    print_filename,
};
pub use geometry::{PageGeometry, Rect};
pub use layout::{LayoutPolicy, LayoutReport, layout_menu, select_policy};
pub use options::*;
pub use render::{DocumentInfo, PdfWriter};
pub use stats::{PrintStatistics, calculate_statistics};
pub use store::MenuStore;
#[cfg(feature = "serde")]
pub use store::{JsonMenuStore, StoreData};
pub use types::*;
pub use writer::{DocumentWriter, Orientation, RecordingWriter};
