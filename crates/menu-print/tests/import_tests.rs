use menu_print::import::*;
use menu_print::*;
use tempfile::NamedTempFile;

const SAMPLE: &str = "\
section,name,price,description
Starters,Soup,5.50,Tomato and basil
Starters, Bread ,$2,
Mains,Risotto,14.00,\"Mushroom, parmesan\"
";

#[test]
fn test_parse_items() {
    let items = parse_items(SAMPLE).unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0],
        CsvItem {
            section: "Starters".to_string(),
            name: "Soup".to_string(),
            price: 5.5,
            description: Some("Tomato and basil".to_string()),
        }
    );
    assert_eq!(items[1].name, "Bread");
    assert_eq!(items[1].price, 2.0);
    assert_eq!(items[1].description, None);
    assert_eq!(items[2].description.as_deref(), Some("Mushroom, parmesan"));
}

#[test]
fn test_parse_skips_short_rows() {
    let items = parse_items("section,name,price\nStarters,Soup\nStarters,Salad,6\n").unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Salad");
}

#[test]
fn test_parse_rejects_bad_prices() {
    let result = parse_items("section,name,price\nStarters,Soup,cheap\n");
    assert!(matches!(result, Err(MenuPrintError::Config(msg)) if msg.contains("line 2")));

    let result = parse_items("section,name,price\nStarters,Soup,-1\n");
    assert!(matches!(result, Err(MenuPrintError::Config(_))));
}

#[test]
fn test_parse_negative_zero_price() {
    let items = parse_items("section,name,price\nDrinks,Water,-0\n").unwrap();

    assert_eq!(items[0].price, 0.0);
    assert!(!items[0].price.is_sign_negative());
    assert_eq!(PrintOptions::default().format_price(items[0].price), "$0.00");
}

#[test]
fn test_merge_into_menu() {
    let mut menu = Menu::new("menu-1", "a4");
    menu.add_section(Section::new("Mains"))
        .add_item(Item::new("Steak", 20.0));

    let added = merge_into_menu(&mut menu, parse_items(SAMPLE).unwrap());

    assert_eq!(added, 3);
    let titles: Vec<&str> = menu.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Mains", "Starters"]);
    assert_eq!(menu.sections[1].position, 1);

    let mains: Vec<(&str, i64)> = menu.sections[0]
        .items
        .iter()
        .map(|i| (i.name.as_str(), i.position))
        .collect();
    assert_eq!(mains, vec![("Steak", 0), ("Risotto", 1)]);

    let starters: Vec<&str> = menu.sections[1]
        .items
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(starters, vec!["Soup", "Bread"]);
}

#[tokio::test]
async fn test_load_items_from_csv() {
    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), SAMPLE).unwrap();

    let items = load_items_from_csv(temp.path()).await.unwrap();
    assert_eq!(items.len(), 3);
}
