use lopdf::{Document, Object};
use menu_print::*;
use tempfile::tempdir;

fn lunch_menu() -> Menu {
    let mut menu = Menu::new("menu-1", "a5");
    menu.name = "Lunch".to_string();
    menu.add_section(Section::new("Starters"))
        .add_item(Item::new("Soup", 5.5).with_description("Tomato and basil"));
    menu
}

fn long_menu() -> Menu {
    let mut menu = lunch_menu();
    let section = menu.add_section(Section::new("Mains"));
    for i in 0..60 {
        section.add_item(Item::new(format!("Dish {}", i), 12.0));
    }
    menu
}

fn page_box(doc: &Document, page_id: lopdf::ObjectId, key: &[u8]) -> Vec<f32> {
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    page.get(key)
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_float().unwrap())
        .collect()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn test_print_filename() {
    assert_eq!(print_filename("Lunch"), "Lunch_CMYK_Print.pdf");
    assert_eq!(
        print_filename("Lunch & Dinner!"),
        "Lunch___Dinner__CMYK_Print.pdf"
    );
    assert_eq!(print_filename("Café 2024"), "Caf__2024_CMYK_Print.pdf");
}

#[test]
fn test_generated_pdf_loads() {
    let document = MenuDocument::new(lunch_menu(), TemplatePreset::A5.template());
    let generated = generate_pdf_bytes(&document, &PrintOptions::default()).unwrap();

    let doc = Document::load_mem(&generated.bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    assert_eq!(generated.report.pages, 1);
}

#[test]
fn test_page_boxes_include_bleed() {
    let template = TemplatePreset::A5.template();
    let geometry = PageGeometry::from_template(&template);
    let document = MenuDocument::new(lunch_menu(), template);
    let generated = generate_pdf_bytes(&document, &PrintOptions::default()).unwrap();

    let doc = Document::load_mem(&generated.bytes).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();

    let trim = page_box(&doc, page_id, b"TrimBox");
    assert!(approx(trim[0], 0.0));
    assert!(approx(trim[2], geometry.width_pt));
    assert!(approx(trim[3], geometry.height_pt));

    let media = page_box(&doc, page_id, b"MediaBox");
    assert!(approx(media[0], -geometry.bleed_pt));
    assert!(approx(media[1], -geometry.bleed_pt));
    assert!(approx(media[2], geometry.width_pt + geometry.bleed_pt));
    assert!(approx(media[3], geometry.height_pt + geometry.bleed_pt));

    assert_eq!(page_box(&doc, page_id, b"BleedBox"), media);
}

#[test]
fn test_content_uses_cmyk_operators() {
    let document = MenuDocument::new(lunch_menu(), TemplatePreset::A5.template());
    let generated = generate_pdf_bytes(&document, &PrintOptions::default()).unwrap();

    let doc = Document::load_mem(&generated.bytes).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let content = String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).to_string();

    // White background, accent section title, K-only text and rules
    assert!(content.contains("0 0 0 0 k"));
    assert!(content.contains("0 0.58 0.79 0 k"));
    assert!(content.contains("0 0 0 1 k"));
    assert!(content.contains("0 0 0 1 K"));
    assert!(content.contains("(Soup) Tj"));
    assert!(content.contains("($5.50) Tj"));
    assert!(!content.contains(" rg"));
}

#[test]
fn test_content_streams_are_compressed() {
    let document = MenuDocument::new(long_menu(), TemplatePreset::A5.template());
    let generated = generate_pdf_bytes(&document, &PrintOptions::default()).unwrap();

    let doc = Document::load_mem(&generated.bytes).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let contents_id = page.get(b"Contents").unwrap().as_reference().unwrap();
    let stream = doc.get_object(contents_id).unwrap().as_stream().unwrap();

    assert_eq!(
        stream.dict.get(b"Filter").unwrap(),
        &Object::Name(b"FlateDecode".to_vec())
    );
    let content = String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).to_string();
    assert!(content.contains("(Dish 0) Tj"));
}

#[test]
fn test_long_menu_spans_pages() {
    let document = MenuDocument::new(long_menu(), TemplatePreset::A5.template());
    let generated = generate_pdf_bytes(&document, &PrintOptions::default()).unwrap();

    let doc = Document::load_mem(&generated.bytes).unwrap();
    assert!(generated.report.pages > 1);
    assert_eq!(doc.get_pages().len(), generated.report.pages);
}

#[test]
fn test_folded_menu_is_one_wide_page() {
    let template = TemplatePreset::DlTrifold.template();
    let geometry = PageGeometry::from_template(&template);
    let document = MenuDocument::new(long_menu(), template);
    let generated = generate_pdf_bytes(&document, &PrintOptions::default()).unwrap();

    let doc = Document::load_mem(&generated.bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    assert!(generated.report.is_truncated());

    let page_id = *doc.get_pages().values().next().unwrap();
    let trim = page_box(&doc, page_id, b"TrimBox");
    assert!(approx(trim[2], geometry.sheet_width_pt()));

    let content = String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).to_string();
    assert!(content.contains("[6 3] 0 d"));
}

#[test]
fn test_document_info() {
    let document = MenuDocument::new(lunch_menu(), TemplatePreset::A5.template());
    let options = PrintOptions {
        creator: "Test Suite".to_string(),
        ..Default::default()
    };
    let generated = generate_pdf_bytes(&document, &options).unwrap();

    let doc = Document::load_mem(&generated.bytes).unwrap();
    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_object(info_id).unwrap().as_dict().unwrap();

    let text = |key: &[u8]| match info.get(key).unwrap() {
        Object::String(bytes, _) => String::from_utf8_lossy(bytes).to_string(),
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(text(b"Title"), "Lunch");
    assert_eq!(text(b"Subject"), "Print-Ready Menu");
    assert_eq!(text(b"Creator"), "Test Suite");
    assert_eq!(text(b"Keywords"), "menu, print, CMYK");
}

#[tokio::test]
async fn test_generate_pdf_writes_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lunch.pdf");
    let document = MenuDocument::new(lunch_menu(), TemplatePreset::A5.template());

    let report = generate_pdf(&document, &PrintOptions::default(), &path)
        .await
        .unwrap();

    assert_eq!(report.pages, 1);
    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[tokio::test]
async fn test_generate_pdf_rejects_invalid_menu() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    let mut menu = lunch_menu();
    menu.sections[0].items[0].price = -1.0;
    let document = MenuDocument::new(menu, TemplatePreset::A5.template());

    let result = generate_pdf(&document, &PrintOptions::default(), &path).await;

    assert!(matches!(result, Err(MenuPrintError::Config(_))));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_generate_from_store() {
    let dir = tempdir().unwrap();
    let store = JsonMenuStore::new(
        dir.path().join("menus.json"),
        StoreData {
            templates: Vec::new(),
            menus: vec![lunch_menu()],
        },
    );

    let outcome = generate_from_store(&store, "menu-1", &PrintOptions::default(), dir.path())
        .await
        .unwrap();

    assert_eq!(outcome.path, dir.path().join("Lunch_CMYK_Print.pdf"));
    assert_eq!(outcome.report.pages, 1);
    let doc = Document::load(&outcome.path).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[tokio::test]
async fn test_generate_from_store_missing_menu() {
    let dir = tempdir().unwrap();
    let store = JsonMenuStore::new(dir.path().join("menus.json"), StoreData::default());

    let result = generate_from_store(&store, "menu-404", &PrintOptions::default(), dir.path()).await;

    assert!(matches!(result, Err(MenuPrintError::GenerationFailed(_))));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_fetch_for_print_reports_generation_failure() {
    let dir = tempdir().unwrap();
    let store = JsonMenuStore::new(dir.path().join("menus.json"), StoreData::default());

    let result = fetch_for_print(&store, "menu-404").await;

    assert!(matches!(result, Err(MenuPrintError::GenerationFailed(msg)) if msg.contains("menu-404")));
}
