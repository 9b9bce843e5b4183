// ==========================================
// 产品库存看板 - 领域类型定义
// ==========================================
// 职责: 库存状态枚举 / 单元格标量 / 排序方向
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// 库存状态 (Availability)
// ==========================================
// 闭合枚举: 任何导入值都归一化到这三个字面量
// 序列化格式: 与导出 CSV / 前端展示一致的英文字面量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    /// 将任意来源值归一化为闭合枚举
    ///
    /// # 规则（大小写不敏感，先 TRIM）
    /// 1. 包含 "out"，或等于 "false" / "0" → OutOfStock
    /// 2. 包含 "low" → LowStock
    /// 3. 其他（含空值）→ InStock
    pub fn normalize(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        if lower.contains("out") || lower == "false" || lower == "0" {
            Availability::OutOfStock
        } else if lower.contains("low") {
            Availability::LowStock
        } else {
            Availability::InStock
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::InStock
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::InStock => write!(f, "In Stock"),
            Availability::LowStock => write!(f, "Low Stock"),
            Availability::OutOfStock => write!(f, "Out of Stock"),
        }
    }
}

// ==========================================
// 排序方向 (Sort Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// 翻转方向（同列再次点击时使用）
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

// ==========================================
// 单元格标量 (Cell Value)
// ==========================================
// 解析层输出的带类型标量: 文本 / 数值 / 空
// 序列化为无标签形式（数字 | 字符串 | null），与表格数据的 JSON 形态一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// 文本值（仅 Text 变体）
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 数值（仅 Number 变体）
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 是否为空白（Empty 或纯空白文本）
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Empty => Ok(()),
        }
    }
}

// ==========================================
// 原始行记录 (Raw Row)
// ==========================================
// 解码后、校验前的一行: 原始表头 → 单元格标量
pub type RawRow = HashMap<String, CellValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_normalize_out_variants() {
        assert_eq!(Availability::normalize("Out of Stock"), Availability::OutOfStock);
        assert_eq!(Availability::normalize("sold OUT"), Availability::OutOfStock);
        assert_eq!(Availability::normalize("false"), Availability::OutOfStock);
        assert_eq!(Availability::normalize("0"), Availability::OutOfStock);
    }

    #[test]
    fn test_availability_normalize_low_and_default() {
        assert_eq!(Availability::normalize("Low Stock"), Availability::LowStock);
        assert_eq!(Availability::normalize("  running low  "), Availability::LowStock);
        assert_eq!(Availability::normalize("In Stock"), Availability::InStock);
        assert_eq!(Availability::normalize("whatever"), Availability::InStock);
        assert_eq!(Availability::normalize(""), Availability::InStock);
    }

    #[test]
    fn test_availability_display_literals() {
        assert_eq!(Availability::InStock.to_string(), "In Stock");
        assert_eq!(Availability::LowStock.to_string(), "Low Stock");
        assert_eq!(Availability::OutOfStock.to_string(), "Out of Stock");
    }

    #[test]
    fn test_sort_direction_toggled() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }

    #[test]
    fn test_cell_value_blank() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Text("x".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(9.99).to_string(), "9.99");
        assert_eq!(CellValue::Number(5.0).to_string(), "5");
        assert_eq!(CellValue::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(CellValue::Empty.to_string(), "");
    }
}
