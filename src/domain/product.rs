// ==========================================
// 产品库存看板 - 产品领域模型
// ==========================================
// 职责: 产品实体 / 导入中间结构 / 批量上传结果
// ==========================================

use crate::domain::types::{Availability, CellValue, RawRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 扩展列数量上限（extra1..extra70）
pub const EXTRA_COLUMN_COUNT: usize = 70;

// ==========================================
// Product - 产品实体
// ==========================================
// 集合内不变式: id/name/brand 非空, price 有限且 > 0,
// availability 为闭合枚举之一
// 扩展字段作为稀疏侧表, 键名固定为小写 extra<N>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub availability: Availability,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, CellValue>,
}

impl Product {
    /// 按列键取展示/排序用的标量值
    ///
    /// 未知键与 image 键返回 Empty（image 列仅承载缩略图, 不参与排序）
    pub fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => CellValue::Text(self.id.clone()),
            "name" => CellValue::Text(self.name.clone()),
            "brand" => CellValue::Text(self.brand.clone()),
            "price" => CellValue::Number(self.price),
            "availability" => CellValue::Text(self.availability.to_string()),
            _ => self
                .extras
                .get(key)
                .cloned()
                .unwrap_or(CellValue::Empty),
        }
    }

    /// 搜索匹配: name / brand / id 任一包含搜索词（大小写不敏感）
    ///
    /// 空搜索词匹配一切
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.brand.to_lowercase().contains(&term)
            || self.id.to_lowercase().contains(&term)
    }
}

// ==========================================
// RawProductRecord - 导入中间结构体
// ==========================================
// 字段映射之后、规则校验之前的一行
// price: None = 数值解析失败; Some(0.0) = 源字段缺失（默认 0, 校验必败）
#[derive(Debug, Clone)]
pub struct RawProductRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Option<f64>,
    pub availability_raw: String,
    pub image_url: String,
    pub extras: BTreeMap<String, CellValue>,

    // 元信息: 源文件行号（表头为第 1 行, 首条数据行为第 2 行）
    pub row_number: usize,
}

// ==========================================
// FailedRow - 单行失败记录
// ==========================================
// data 保留解码后的原始行（原始表头大小写）, 供失败明细展示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedRow {
    pub row: usize,
    pub error: String,
    pub data: RawRow,
}

// ==========================================
// BulkUploadResult - 批量上传结果
// ==========================================
// 一次导入的全部产物; 对话框关闭后即丢弃, 不持久化
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkUploadResult {
    pub successful: Vec<Product>,
    pub failed: Vec<FailedRow>,
}

impl BulkUploadResult {
    /// 失败明细预览: 前 limit 条 + 剩余条数
    pub fn failure_preview(&self, limit: usize) -> (&[FailedRow], usize) {
        let shown = self.failed.len().min(limit);
        (&self.failed[..shown], self.failed.len() - shown)
    }
}

// ==========================================
// ImportBatch - 导入批次元信息
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String,               // 批次 ID（UUID）
    pub file_name: Option<String>,      // 源文件名
    pub total_rows: usize,              // 解码行数
    pub success_rows: usize,            // 校验通过并入库行数
    pub failed_rows: usize,             // 校验失败行数
    pub imported_at: DateTime<Utc>,     // 导入完成时间
    pub elapsed_ms: i64,                // 导入耗时（毫秒）
}

// ==========================================
// ImportReport - 导入接口返回值
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub batch: ImportBatch,
    pub result: BulkUploadResult,
}

// ==========================================
// 示例数据
// ==========================================

/// 演示与测试用的 5 条种子产品（含全部扩展字段）
pub fn sample_products() -> Vec<Product> {
    let seed: [(&str, &str, f64, &str, Availability, &str); 5] = [
        (
            "PROD001",
            "Wireless Headphones",
            99.99,
            "TechBrand",
            Availability::InStock,
            "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?w=400&h=400&fit=crop",
        ),
        (
            "PROD002",
            "Smartphone",
            699.99,
            "PhoneCorp",
            Availability::LowStock,
            "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=400&h=400&fit=crop",
        ),
        (
            "PROD003",
            "Laptop",
            1299.99,
            "CompuTech",
            Availability::InStock,
            "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400&h=400&fit=crop",
        ),
        (
            "PROD004",
            "Tablet",
            399.99,
            "TabletCo",
            Availability::OutOfStock,
            "https://images.unsplash.com/photo-1581090464777-f3220bbe1b8b?w=400&h=400&fit=crop",
        ),
        (
            "PROD005",
            "Smart Watch",
            249.99,
            "WearTech",
            Availability::InStock,
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=400&fit=crop",
        ),
    ];

    seed.iter()
        .map(|(id, name, price, brand, availability, image_url)| {
            let extras = (1..=EXTRA_COLUMN_COUNT)
                .map(|i| {
                    (
                        format!("extra{}", i),
                        CellValue::Text(format!("Value Extra {}", i)),
                    )
                })
                .collect();
            Product {
                id: (*id).to_string(),
                name: (*name).to_string(),
                brand: (*brand).to_string(),
                price: *price,
                availability: *availability,
                image_url: Some((*image_url).to_string()),
                extras,
            }
        })
        .collect()
}
