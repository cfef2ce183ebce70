use menu_print::*;

#[test]
fn test_default_options() {
    let options = PrintOptions::default();

    assert!(!options.rich_black_background);
    assert_eq!(options.currency_symbol, "$");
    assert!(options.draw_content_border);
    assert!(options.draw_fold_lines);
    assert_eq!(options.creator, "Menu PDF Generator");
    assert!(options.validate().is_ok());
}

#[test]
fn test_format_price() {
    let options = PrintOptions::default();
    assert_eq!(options.format_price(5.5), "$5.50");
    assert_eq!(options.format_price(0.0), "$0.00");
    assert_eq!(options.format_price(12.999), "$13.00");

    let euro = PrintOptions {
        currency_symbol: "€".to_string(),
        ..Default::default()
    };
    assert_eq!(euro.format_price(3.2), "€3.20");
}

#[test]
fn test_format_price_negative_zero() {
    let options = PrintOptions::default();
    assert_eq!(options.format_price(-0.0), "$0.00");
}

#[test]
fn test_validate_rejects_control_characters() {
    let options = PrintOptions {
        currency_symbol: "$\n".to_string(),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(MenuPrintError::Config(_))));
}

#[tokio::test]
async fn test_save_and_load() {
    use tempfile::NamedTempFile;

    let options = PrintOptions {
        rich_black_background: true,
        currency_symbol: "£".to_string(),
        draw_fold_lines: false,
        ..Default::default()
    };

    let temp = NamedTempFile::new().unwrap();
    let path = temp.path();

    options.save(path).await.unwrap();
    let loaded = PrintOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_load_partial_file_fills_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), r#"{"rich_black_background": true}"#).unwrap();

    let loaded = PrintOptions::load(temp.path()).await.unwrap();
    assert!(loaded.rich_black_background);
    assert_eq!(loaded.currency_symbol, "$");
    assert!(loaded.draw_content_border);
}

#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "not json").unwrap();

    let result = PrintOptions::load(temp.path()).await;
    assert!(matches!(result, Err(MenuPrintError::Config(_))));
}
