// ==========================================
// 产品库存看板 - 字段映射器实现
// ==========================================
// 职责: 表头归一化 + 同义列解析 + 扩展字段收集
// 同义列按显式有序别名表解析, 不做任意属性探测
// ==========================================

use crate::domain::product::RawProductRecord;
use crate::domain::types::{CellValue, RawRow};
use crate::importer::product_importer_trait::FieldMapper;
use std::collections::{BTreeMap, HashMap};

/// 缺省库存状态字面量
const DEFAULT_AVAILABILITY: &str = "In Stock";

/// 扩展字段键前缀（归一化后匹配）
const EXTRA_PREFIX: &str = "extra";

// 逻辑字段 → 有序别名表（归一化后的小写键）
const ID_ALIASES: &[&str] = &["id", "product_id"];
const NAME_ALIASES: &[&str] = &["name", "product_name"];
const BRAND_ALIASES: &[&str] = &["brand"];
const PRICE_ALIASES: &[&str] = &["price"];
const AVAILABILITY_ALIASES: &[&str] = &["availability", "status"];
const IMAGE_URL_KEY: &str = "imageurl";

pub struct ProductFieldMapper;

impl FieldMapper for ProductFieldMapper {
    fn map_to_raw_product(&self, row: &RawRow, row_number: usize) -> RawProductRecord {
        let normalized = Self::normalize_keys(row);

        let id = Self::resolve_text(&normalized, ID_ALIASES);
        let name = Self::resolve_text(&normalized, NAME_ALIASES);
        let brand = Self::resolve_text(&normalized, BRAND_ALIASES);

        // 缺失的价格先按 0 解析, 随后在校验阶段必然失败;
        // 解析不了的文本以 None 表达
        let price_raw = Self::resolve_text(&normalized, PRICE_ALIASES);
        let price = if price_raw.is_empty() {
            Some(0.0)
        } else {
            price_raw.parse::<f64>().ok()
        };

        let mut availability_raw = Self::resolve_text(&normalized, AVAILABILITY_ALIASES);
        if availability_raw.is_empty() {
            availability_raw = DEFAULT_AVAILABILITY.to_string();
        }

        // 图片地址只接受文本单元格
        let image_url = normalized
            .get(IMAGE_URL_KEY)
            .and_then(|v| v.as_text())
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let extras: BTreeMap<String, CellValue> = normalized
            .iter()
            .filter(|(key, value)| {
                key.starts_with(EXTRA_PREFIX)
                    && matches!(value, CellValue::Text(_) | CellValue::Number(_))
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        RawProductRecord {
            id,
            name,
            brand,
            price,
            availability_raw,
            image_url,
            extras,
            row_number,
        }
    }
}

impl ProductFieldMapper {
    /// 建立归一化查找表: 表头一律小写并 TRIM
    fn normalize_keys(row: &RawRow) -> HashMap<String, CellValue> {
        row.iter()
            .map(|(key, value)| (key.trim().to_lowercase(), value.clone()))
            .collect()
    }

    /// 依次尝试别名, 取第一个非空白值的展示文本（TRIM 后）
    fn resolve_text(normalized: &HashMap<String, CellValue>, aliases: &[&str]) -> String {
        for alias in aliases {
            if let Some(value) = normalized.get(*alias) {
                if !value.is_blank() {
                    return value.to_string().trim().to_string();
                }
            }
        }
        String::new()
    }
}
