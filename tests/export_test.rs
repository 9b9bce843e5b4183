// ==========================================
// CSV 导出集成测试
// ==========================================
// 测试目标: 导出格式 / 文件落盘 / 模板形态
// ==========================================


use product_dashboard::export::template::to_template_csv;
use product_dashboard::{
    to_csv_string, write_csv, CellValue, EXTRA_COLUMN_COUNT, EXPORT_ALL_FILENAME,
    EXPORT_FILTERED_FILENAME, TEMPLATE_FILENAME,
};
use test_helpers::product;

#[test]
fn test_export_filenames() {
    assert_eq!(EXPORT_ALL_FILENAME, "products-all.csv");
    assert_eq!(EXPORT_FILTERED_FILENAME, "products-filtered.csv");
    assert_eq!(TEMPLATE_FILENAME, "product_template.csv");
}

#[test]
fn test_export_fixed_header_and_quoting() {
    let mut p = product("P1", "Widget", "Acme", 9.99);
    p.image_url = Some("https://x/y.png".to_string());

    let csv = to_csv_string(&[p]);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ID,Name,Brand,Price,Availability,Image URL");
    assert_eq!(
        lines[1],
        "P1,\"Widget\",\"Acme\",9.99,\"In Stock\",\"https://x/y.png\""
    );
}

#[test]
fn test_export_embedded_quotes_doubled() {
    let p = product("P1", "He said \"hi\"", "Ac\"me", 1.0);

    let csv = to_csv_string(&[p]);

    assert!(csv.contains("\"He said \"\"hi\"\"\""));
    assert!(csv.contains("\"Ac\"\"me\""));
}

#[test]
fn test_export_extras_never_exported() {
    let mut p = product("P1", "Widget", "Acme", 1.0);
    p.extras
        .insert("extra7".to_string(), CellValue::Text("secret".to_string()));

    let csv = to_csv_string(&[p]);

    assert!(!csv.contains("secret"));
    assert!(!csv.contains("extra7"));
}

#[test]
fn test_write_csv_returns_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(EXPORT_ALL_FILENAME);

    let rows = write_csv(
        &[
            product("P1", "A", "Acme", 1.0),
            product("P2", "B", "Acme", 2.0),
        ],
        &path,
    )
    .unwrap();

    assert_eq!(rows, 2);
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_template_has_all_columns_and_five_rows() {
    let csv = to_template_csv().unwrap();
    let mut lines = csv.lines();

    let header: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(header.len(), 6 + EXTRA_COLUMN_COUNT);
    assert_eq!(header[0], "id");
    assert_eq!(header[5], "imageUrl");
    assert_eq!(*header.last().unwrap(), "extra70");

    assert_eq!(lines.count(), 5);
}
