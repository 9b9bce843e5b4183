// ==========================================
// 产品库存看板 - CSV 导出器
// ==========================================
// 职责: 产品序列 → CSV 文本 → 文件落盘
// 格式: 固定 6 列表头; 文本列双引号包裹（内嵌引号成对转义）;
//       扩展字段不参与导出
// ==========================================

use crate::domain::product::Product;
use crate::export::error::ExportResult;
use std::path::Path;
use tracing::info;

/// 导出全量集合时的文件名
pub const EXPORT_ALL_FILENAME: &str = "products-all.csv";

/// 导出当前过滤视图时的文件名
pub const EXPORT_FILTERED_FILENAME: &str = "products-filtered.csv";

/// 导出负载的 MIME 类型
pub const CSV_CONTENT_TYPE: &str = "text/csv";

const EXPORT_HEADER: &str = "ID,Name,Brand,Price,Availability,Image URL";

/// 序列化为 CSV 文本
pub fn to_csv_string(products: &[Product]) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(EXPORT_HEADER.to_string());

    for product in products {
        lines.push(
            [
                product.id.clone(),
                quoted(&product.name),
                quoted(&product.brand),
                product.price.to_string(),
                quoted(&product.availability.to_string()),
                quoted(product.image_url.as_deref().unwrap_or("")),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}

/// 序列化并写入文件（下载动作的落盘形态）
///
/// # 返回
/// - Ok(usize): 写出的产品行数
pub fn write_csv<P: AsRef<Path>>(products: &[Product], path: P) -> ExportResult<usize> {
    let csv = to_csv_string(products);
    std::fs::write(path.as_ref(), csv)?;
    info!(
        path = %path.as_ref().display(),
        rows = products.len(),
        "CSV 导出完成"
    );
    Ok(products.len())
}

/// 文本列包裹双引号, 内嵌引号成对转义
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Availability, CellValue};
    use std::collections::BTreeMap;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: "Acme".to_string(),
            price: 9.99,
            availability: Availability::InStock,
            image_url: None,
            extras: BTreeMap::new(),
        }
    }

    #[test]
    fn test_export_header_and_row_shape() {
        let mut p = product("P1", "Widget");
        p.image_url = Some("https://x/y.png".to_string());

        let csv = to_csv_string(&[p]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Name,Brand,Price,Availability,Image URL");
        assert_eq!(
            lines[1],
            "P1,\"Widget\",\"Acme\",9.99,\"In Stock\",\"https://x/y.png\""
        );
    }

    #[test]
    fn test_export_missing_image_url_is_empty_quoted() {
        let csv = to_csv_string(&[product("P1", "Widget")]);
        assert!(csv.ends_with(",\"\""));
    }

    #[test]
    fn test_export_escapes_embedded_quotes() {
        let p = product("P1", "12\" Vinyl");

        let csv = to_csv_string(&[p]);

        assert!(csv.contains("\"12\"\" Vinyl\""));
    }

    #[test]
    fn test_export_excludes_extras() {
        let mut p = product("P1", "Widget");
        p.extras
            .insert("extra1".to_string(), CellValue::Text("hidden".to_string()));

        let csv = to_csv_string(&[p]);

        assert!(!csv.contains("hidden"));
        assert!(!csv.contains("extra1"));
    }

    #[test]
    fn test_export_empty_collection_is_header_only() {
        let csv = to_csv_string(&[]);
        assert_eq!(csv, "ID,Name,Brand,Price,Availability,Image URL");
    }
}
