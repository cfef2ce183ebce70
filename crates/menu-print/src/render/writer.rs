//! lopdf-backed [`DocumentWriter`]

use super::content::{cmyk_op, line_op, literal_string, num, rect_op};
use crate::color::Cmyk;
use crate::geometry::Rect;
use crate::types::*;
use crate::writer::metrics::text_width;
use crate::writer::{DashPattern, DocumentWriter, DrawMode, FontStyle, PageSize};
use lopdf::{Dictionary, Document, Object, Stream};

/// Document information dictionary entries
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub subject: String,
    pub creator: String,
    pub keywords: String,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            subject: "Print-Ready Menu".to_string(),
            creator: "Menu PDF Generator".to_string(),
            keywords: "menu, print, CMYK".to_string(),
        }
    }
}

/// Graphics state last written to a page's content stream
#[derive(Debug, Clone, Default)]
struct EmittedState {
    fill: Option<Cmyk>,
    stroke: Option<Cmyk>,
    line_width: Option<f32>,
    dash: Option<Option<DashPattern>>,
}

#[derive(Debug, Clone)]
struct PageBuffer {
    size: PageSize,
    content: String,
    emitted: EmittedState,
}

impl PageBuffer {
    fn new(size: PageSize) -> Self {
        Self {
            size,
            content: String::new(),
            emitted: EmittedState::default(),
        }
    }

    /// Convert a top-left-origin y to PDF space
    fn flip(&self, y: f32) -> f32 {
        self.size.height_pt - y
    }
}

/// Writes DeviceCMYK PDF pages with the built-in Helvetica family.
///
/// Each page gets a TrimBox at the page size and a MediaBox/BleedBox grown
/// by the bleed, so background fills reach past the trim edge.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    info: DocumentInfo,
    pages: Vec<PageBuffer>,
    current: usize,
    size: PageSize,
    fill: Cmyk,
    stroke: Cmyk,
    text: Cmyk,
    font: (FontStyle, f32),
    line_width: f32,
    dash: Option<DashPattern>,
}

impl PdfWriter {
    pub fn new(info: DocumentInfo) -> Self {
        let size = PageSize::default();
        Self {
            info,
            pages: vec![PageBuffer::new(size)],
            current: 0,
            size,
            fill: Cmyk::PURE_BLACK,
            stroke: Cmyk::PURE_BLACK,
            text: Cmyk::PURE_BLACK,
            font: (FontStyle::Regular, 12.0),
            line_width: 1.0,
            dash: None,
        }
    }

    fn page(&mut self) -> &mut PageBuffer {
        &mut self.pages[self.current]
    }

    /// Non-stroking color is shared by fills and text in PDF
    fn emit_fill(&mut self, color: Cmyk) {
        let page = self.page();
        if page.emitted.fill != Some(color) {
            page.content.push_str(&cmyk_op(color, false));
            page.emitted.fill = Some(color);
        }
    }

    fn emit_stroke_state(&mut self) {
        let (stroke, width, dash) = (self.stroke, self.line_width, self.dash);
        let page = self.page();
        if page.emitted.stroke != Some(stroke) {
            page.content.push_str(&cmyk_op(stroke, true));
            page.emitted.stroke = Some(stroke);
        }
        if page.emitted.line_width != Some(width) {
            page.content.push_str(&format!("{} w\n", num(width)));
            page.emitted.line_width = Some(width);
        }
        if page.emitted.dash != Some(dash) {
            match dash {
                Some(pattern) => page.content.push_str(&format!(
                    "[{} {}] 0 d\n",
                    num(pattern.dash),
                    num(pattern.gap)
                )),
                None => page.content.push_str("[] 0 d\n"),
            }
            page.emitted.dash = Some(dash);
        }
    }
}

fn font_resource(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "F1",
        FontStyle::Bold => "F2",
        FontStyle::Italic => "F3",
    }
}

fn base_font(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Regular => "Helvetica",
        FontStyle::Bold => "Helvetica-Bold",
        FontStyle::Italic => "Helvetica-Oblique",
    }
}

fn box_array(x: f32, y: f32, right: f32, top: f32) -> Object {
    Object::Array(vec![
        Object::Real(x),
        Object::Real(y),
        Object::Real(right),
        Object::Real(top),
    ])
}

impl DocumentWriter for PdfWriter {
    fn set_page_size(&mut self, size: PageSize) {
        self.size = size;
        self.page().size = size;
    }

    fn set_fill_color(&mut self, color: Cmyk) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Cmyk) {
        self.stroke = color;
    }

    fn set_text_color(&mut self, color: Cmyk) {
        self.text = color;
    }

    fn set_font(&mut self, style: FontStyle, size_pt: f32) {
        self.font = (style, size_pt);
    }

    fn set_line_width(&mut self, width_pt: f32) {
        self.line_width = width_pt;
    }

    fn set_line_dash(&mut self, dash: Option<DashPattern>) {
        self.dash = dash;
    }

    fn draw_rect(&mut self, rect: Rect, mode: DrawMode) {
        let paint = match mode {
            DrawMode::Fill => "f",
            DrawMode::Stroke => "S",
            DrawMode::FillStroke => "B",
        };
        if matches!(mode, DrawMode::Fill | DrawMode::FillStroke) {
            self.emit_fill(self.fill);
        }
        if matches!(mode, DrawMode::Stroke | DrawMode::FillStroke) {
            self.emit_stroke_state();
        }
        let page = self.page();
        let bottom = page.flip(rect.bottom());
        let op = rect_op(rect.x, bottom, rect.width, rect.height, paint);
        page.content.push_str(&op);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.emit_stroke_state();
        let page = self.page();
        let op = line_op(x1, page.flip(y1), x2, page.flip(y2));
        page.content.push_str(&op);
    }

    fn measure_text_width(&self, text: &str) -> f32 {
        text_width(self.font.0, self.font.1, text)
    }

    fn draw_text(&mut self, lines: &[String], x: f32, y: f32, line_height: f32) {
        let (style, size) = self.font;
        self.emit_fill(self.text);
        let page = self.page();
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = page.flip(y + i as f32 * line_height);
            page.content.push_str(&format!(
                "BT /{} {} Tf {} {} Td {} Tj ET\n",
                font_resource(style),
                num(size),
                num(x),
                num(baseline),
                literal_string(line)
            ));
        }
    }

    fn new_page(&mut self) {
        self.pages.push(PageBuffer::new(self.size));
        self.current = self.pages.len() - 1;
    }

    fn set_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        }
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn finalize(self) -> Result<Vec<u8>> {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();

        let mut fonts = Dictionary::new();
        for style in [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic] {
            let font_id = output.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                ("BaseFont", Object::Name(base_font(style).as_bytes().to_vec())),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]));
            fonts.set(font_resource(style), Object::Reference(font_id));
        }
        let resources_id = output.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(fonts),
        )]));

        let mut page_refs = Vec::new();
        for page in self.pages {
            let PageSize {
                width_pt,
                height_pt,
                bleed_pt,
            } = page.size;
            let content_id =
                output.add_object(Stream::new(Dictionary::new(), page.content.into_bytes()));

            let bleed_box = box_array(-bleed_pt, -bleed_pt, width_pt + bleed_pt, height_pt + bleed_pt);
            let page_id = output.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_tree_id)),
                ("MediaBox", bleed_box.clone()),
                ("BleedBox", bleed_box),
                ("TrimBox", box_array(0.0, 0.0, width_pt, height_pt)),
                ("Resources", Object::Reference(resources_id)),
                ("Contents", Object::Reference(content_id)),
            ]));
            page_refs.push(Object::Reference(page_id));
        }

        // Create pages tree
        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        output
            .objects
            .insert(pages_tree_id, Object::Dictionary(pages_dict));

        // Create catalog
        let catalog_id = output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_tree_id)),
        ]));
        output.trailer.set("Root", catalog_id);

        let info_id = output.add_object(Dictionary::from_iter(vec![
            ("Title", Object::string_literal(self.info.title)),
            ("Subject", Object::string_literal(self.info.subject)),
            ("Creator", Object::string_literal(self.info.creator)),
            ("Keywords", Object::string_literal(self.info.keywords)),
        ]));
        output.trailer.set("Info", info_id);

        output.compress();

        let mut bytes = Vec::new();
        output.save_to(&mut bytes)?;
        Ok(bytes)
    }
}
