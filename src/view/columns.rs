// ==========================================
// 产品库存看板 - 列目录
// ==========================================
// 固定列 6 个（image/id/name/brand/price/availability）
// 扩展列 70 个（extra1..extra70）
// ==========================================

use crate::domain::product::EXTRA_COLUMN_COUNT;
use serde::{Deserialize, Serialize};

pub const COL_IMAGE: &str = "image";
pub const COL_ID: &str = "id";
pub const COL_NAME: &str = "name";
pub const COL_BRAND: &str = "brand";
pub const COL_PRICE: &str = "price";
pub const COL_AVAILABILITY: &str = "availability";

// ==========================================
// ColumnDef - 列定义
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
}

impl ColumnDef {
    fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// 全部已知列（固定列在前, 扩展列按序号排列）
pub fn base_columns() -> Vec<ColumnDef> {
    let mut columns = vec![
        ColumnDef::new(COL_IMAGE, "Image"),
        ColumnDef::new(COL_ID, "ID"),
        ColumnDef::new(COL_NAME, "Name"),
        ColumnDef::new(COL_BRAND, "Brand"),
        ColumnDef::new(COL_PRICE, "Price"),
        ColumnDef::new(COL_AVAILABILITY, "Availability"),
    ];
    for i in 1..=EXTRA_COLUMN_COUNT {
        columns.push(ColumnDef {
            key: format!("extra{}", i),
            label: format!("Extra {}", i),
        });
    }
    columns
}

/// 缺省列顺序（列目录的键序列）
pub fn default_column_order() -> Vec<String> {
    base_columns().into_iter().map(|c| c.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_columns_shape() {
        let columns = base_columns();
        assert_eq!(columns.len(), 6 + EXTRA_COLUMN_COUNT);
        assert_eq!(columns[0].key, "image");
        assert_eq!(columns[5].key, "availability");
        assert_eq!(columns[6].key, "extra1");
        assert_eq!(columns[6].label, "Extra 1");
        assert_eq!(columns.last().unwrap().key, "extra70");
    }

    #[test]
    fn test_default_column_order_matches_catalog() {
        let order = default_column_order();
        assert_eq!(order.len(), 76);
        assert_eq!(order[..6], ["image", "id", "name", "brand", "price", "availability"]);
    }
}
