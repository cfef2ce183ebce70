//! PDF rendering backend
//!
//! - Formatting content stream operators in CMYK
//! - Mapping the top-left layout coordinates to PDF space
//! - Building the page tree, fonts and page boxes with lopdf

mod content;
mod writer;

pub use writer::{DocumentInfo, PdfWriter};
