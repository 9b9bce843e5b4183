// ==========================================
// 产品库存看板 - 上传模板生成器
// ==========================================
// 职责: 生成示例 CSV 模板供用户填写后回传
// 形态: 6 个核心列 + 全部 70 个扩展列, 5 条示例行
// ==========================================

use crate::domain::product::{Product, EXTRA_COLUMN_COUNT};
use crate::domain::types::{Availability, CellValue};
use crate::export::error::{ExportError, ExportResult};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// 模板文件名
pub const TEMPLATE_FILENAME: &str = "product_template.csv";

/// 扩展列占位文本长度
const PLACEHOLDER_LEN: usize = 120;

const PLACEHOLDER_FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Pellentesque euismod, nisi eu consectetur consectetur, nisl nisi euismod nisi, euismod \
euismod nisi.";

const SAMPLE_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=400&h=400&fit=crop";

/// 模板示例行
pub fn template_rows() -> Vec<Product> {
    let seed: [(&str, &str, f64, &str, Availability); 5] = [
        ("PROD001", "Sample Product", 29.99, "Sample Brand", Availability::InStock),
        ("PROD002", "Another Product", 49.99, "Another Brand", Availability::LowStock),
        ("PROD003", "Another Product2", 49.99, "Another Brand", Availability::LowStock),
        ("PROD004", "Another Product3", 4.99, "Another Brand", Availability::LowStock),
        ("PROD005", "Another Product4", 9.99, "Another Brand", Availability::LowStock),
    ];

    seed.iter()
        .map(|(id, name, price, brand, availability)| {
            let extras: BTreeMap<String, CellValue> = (1..=EXTRA_COLUMN_COUNT)
                .map(|i| (format!("extra{}", i), CellValue::Text(extra_placeholder(i))))
                .collect();
            Product {
                id: (*id).to_string(),
                name: (*name).to_string(),
                brand: (*brand).to_string(),
                price: *price,
                availability: *availability,
                image_url: Some(SAMPLE_IMAGE_URL.to_string()),
                extras,
            }
        })
        .collect()
}

/// 模板 CSV 文本（表头: id,name,price,brand,availability,imageUrl,extra1..extra70）
pub fn to_template_csv() -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = ["id", "name", "price", "brand", "availability", "imageUrl"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for i in 1..=EXTRA_COLUMN_COUNT {
        header.push(format!("extra{}", i));
    }
    writer.write_record(&header)?;

    for product in template_rows() {
        let mut record = vec![
            product.id.clone(),
            product.name.clone(),
            product.price.to_string(),
            product.brand.clone(),
            product.availability.to_string(),
            product.image_url.clone().unwrap_or_default(),
        ];
        for i in 1..=EXTRA_COLUMN_COUNT {
            let value = product
                .extras
                .get(&format!("extra{}", i))
                .map(|v| v.to_string())
                .unwrap_or_default();
            record.push(value);
        }
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::InternalError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::InternalError(e.to_string()))
}

/// 生成模板并写入文件
pub fn write_template<P: AsRef<Path>>(path: P) -> ExportResult<()> {
    let csv = to_template_csv()?;
    std::fs::write(path.as_ref(), csv)?;
    info!(path = %path.as_ref().display(), "模板生成完成");
    Ok(())
}

/// 第 i 个扩展列的占位文本（定长截断, 纯 ASCII）
fn extra_placeholder(i: usize) -> String {
    let mut text = format!("Value Extra {} - {}", i, PLACEHOLDER_FILLER.repeat(2));
    text.truncate(PLACEHOLDER_LEN);
    text
}
