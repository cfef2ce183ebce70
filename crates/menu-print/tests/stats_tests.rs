use menu_print::*;

fn menu_with_items(sections: usize, items_per_section: usize) -> Menu {
    let mut menu = Menu::new("menu-1", "a4");
    for s in 0..sections {
        let section = menu.add_section(Section::new(format!("Section {}", s)));
        for i in 0..items_per_section {
            section.add_item(Item::new(format!("Item {}", i), 9.5));
        }
    }
    menu
}

#[test]
fn test_stats_stacked() {
    let document = MenuDocument::new(menu_with_items(2, 3), TemplatePreset::A4.template());
    let stats = calculate_statistics(&document, &PrintOptions::default()).unwrap();

    assert_eq!(stats.policy, "stacked");
    assert_eq!(stats.panels, 1);
    assert_eq!(stats.output_pages, 1);
    assert_eq!(stats.total_sections, 2);
    assert_eq!(stats.total_items, 6);
    assert_eq!(stats.items_placed, 6);
    assert_eq!(stats.dropped_items, 0);
    assert!((stats.sheet_width_mm - 210.0).abs() < 0.01);
    assert!((stats.sheet_height_mm - 297.0).abs() < 0.01);
    assert_eq!(stats.orientation, Orientation::Portrait);
}

#[test]
fn test_stats_match_generated_pdf() {
    let document = MenuDocument::new(menu_with_items(3, 30), TemplatePreset::A5.template());
    let options = PrintOptions::default();

    let stats = calculate_statistics(&document, &options).unwrap();
    let generated = generate_pdf_bytes(&document, &options).unwrap();

    assert!(stats.output_pages > 1);
    assert_eq!(stats.output_pages, generated.report.pages);
    assert_eq!(stats.items_placed, generated.report.items_placed);
}

#[test]
fn test_stats_folded_truncation() {
    let document = MenuDocument::new(menu_with_items(3, 40), TemplatePreset::DlTrifold.template());
    let stats = calculate_statistics(&document, &PrintOptions::default()).unwrap();

    assert_eq!(stats.policy, "fold");
    assert_eq!(stats.panels, 3);
    assert_eq!(stats.output_pages, 1);
    assert!((stats.sheet_width_mm - 297.0).abs() < 0.01);
    assert_eq!(stats.orientation, Orientation::Landscape);
    assert!(stats.dropped_items > 0);
    assert_eq!(stats.items_placed + stats.dropped_items, stats.total_items);
}

#[test]
fn test_stats_orientation_follows_sheet() {
    let options = PrintOptions::default();
    let cases = [
        (TemplatePreset::A5, Orientation::Portrait),
        (TemplatePreset::A4HalfFold, Orientation::Landscape),
        (TemplatePreset::DlTrifold, Orientation::Landscape),
    ];

    for (preset, expected) in cases {
        let document = MenuDocument::new(menu_with_items(1, 2), preset.template());
        let stats = calculate_statistics(&document, &options).unwrap();
        assert_eq!(stats.orientation, expected, "{:?}", preset);
    }
}

#[test]
fn test_stats_invalid_document() {
    let mut document = MenuDocument::new(menu_with_items(1, 1), TemplatePreset::A4.template());
    document.template.panels = 0;

    assert!(calculate_statistics(&document, &PrintOptions::default()).is_err());
}
