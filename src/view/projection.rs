// ==========================================
// 产品库存看板 - 视图投影引擎
// ==========================================
// 职责: (集合快照, 视图状态) → 展示行 × 可见列
// 纯函数: 同输入必同输出, 不改写集合, 不持隐藏状态
// ==========================================

use crate::domain::product::Product;
use crate::domain::types::{Availability, CellValue, SortDirection};
use crate::view::columns::{base_columns, ColumnDef};
use crate::view::state::ViewState;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ==========================================
// ViewModel - 投影结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    /// 过滤并排序后的展示行
    pub rows: Vec<Product>,
    /// 可见列（按主顺序）
    pub columns: Vec<ColumnDef>,
}

// ==========================================
// InventoryStats - 汇总统计
// ==========================================
// 统计不随搜索过滤: 始终覆盖整个集合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_value: f64,
}

/// 投影: 过滤 → 排序 → 列整形
pub fn project(products: &[Product], state: &ViewState) -> ViewModel {
    let mut rows: Vec<Product> = products
        .iter()
        .filter(|p| p.matches_search(&state.search_term))
        .cloned()
        .collect();

    if let Some(key) = state.sort_key.as_deref() {
        // sort_by 为稳定排序: 比较相等时保持原相对顺序
        rows.sort_by(|a, b| {
            let ordering = compare_field(&a.field(key), &b.field(key));
            match state.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    ViewModel {
        rows,
        columns: visible_columns(state),
    }
}

/// 可见列: 主顺序过滤到已知列, 再剔除隐藏列, 顺序保持
pub fn visible_columns(state: &ViewState) -> Vec<ColumnDef> {
    let catalog = base_columns();
    state
        .column_order
        .iter()
        .filter_map(|key| catalog.iter().find(|c| &c.key == key).cloned())
        .filter(|c| !state.hidden_columns.contains(&c.key))
        .collect()
}

/// 汇总统计（不过滤）
pub fn compute_stats(products: &[Product]) -> InventoryStats {
    InventoryStats {
        total: products.len(),
        in_stock: products
            .iter()
            .filter(|p| p.availability == Availability::InStock)
            .count(),
        low_stock: products
            .iter()
            .filter(|p| p.availability == Availability::LowStock)
            .count(),
        out_of_stock: products
            .iter()
            .filter(|p| p.availability == Availability::OutOfStock)
            .count(),
        total_value: products.iter().map(|p| p.price).sum(),
    }
}

/// 字段值比较: 文本对文本按词典序, 数值对数值按大小,
/// 类型不一致或缺失视为相等（排序不移动）
fn compare_field(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Text(x), CellValue::Text(y)) => collate(x, y),
        (CellValue::Number(x), CellValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

/// 文本排序: 大小写不敏感, 同形再比原文
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn product(id: &str, name: &str, brand: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            price,
            availability: Availability::InStock,
            image_url: None,
            extras: BTreeMap::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("P3", "laptop", "CompuTech", 1299.99),
            product("P1", "Headphones", "TechBrand", 99.99),
            product("P2", "Smartphone", "PhoneCorp", 699.99),
        ]
    }

    #[test]
    fn test_filter_case_insensitive() {
        let products = fixture();
        let mut state = ViewState::default();
        state.set_search("PHONE");

        let vm = project(&products, &state);

        // Headphones 与 Smartphone 命中; 插入序保持
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].id, "P1");
        assert_eq!(vm.rows[1].id, "P2");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let products = fixture();
        let state = ViewState::default();

        let vm = project(&products, &state);

        assert_eq!(vm.rows.len(), 3);
    }

    #[test]
    fn test_sort_text_case_insensitive() {
        let products = fixture();
        let mut state = ViewState::default();
        state.toggle_sort("name");

        let vm = project(&products, &state);

        // "Headphones" < "laptop" < "Smartphone"（忽略大小写）
        let names: Vec<&str> = vm.rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Headphones", "laptop", "Smartphone"]);
    }

    #[test]
    fn test_sort_number_then_desc_reverses() {
        let products = fixture();
        let mut state = ViewState::default();
        state.toggle_sort("price");

        let asc = project(&products, &state);
        let asc_ids: Vec<&str> = asc.rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(asc_ids, ["P1", "P2", "P3"]);

        state.toggle_sort("price");
        let desc = project(&products, &state);
        let desc_ids: Vec<&str> = desc.rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(desc_ids, ["P3", "P2", "P1"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut products = fixture();
        for p in &mut products {
            p.price = 10.0;
        }
        let mut state = ViewState::default();
        state.toggle_sort("price");

        let vm = project(&products, &state);

        let ids: Vec<&str> = vm.rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P3", "P1", "P2"]);
    }

    #[test]
    fn test_sort_mixed_types_keeps_order() {
        let mut products = fixture();
        products[0]
            .extras
            .insert("extra1".to_string(), CellValue::Number(1.0));
        products[1]
            .extras
            .insert("extra1".to_string(), CellValue::Text("abc".to_string()));
        // products[2] 无 extra1

        let mut state = ViewState::default();
        state.toggle_sort("extra1");

        let vm = project(&products, &state);

        let ids: Vec<&str> = vm.rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P3", "P1", "P2"]);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let products = fixture();
        let mut state = ViewState::default();
        state.set_search("p");
        state.toggle_sort("price");
        state.hide_column("brand");

        let first = project(&products, &state);
        let second = project(&products, &state);

        assert_eq!(first.rows, second.rows);
        assert_eq!(first.columns, second.columns);
    }

    #[test]
    fn test_visible_columns_respect_order_and_hidden() {
        let mut state = ViewState::default();
        state.column_order = vec![
            "price".to_string(),
            "id".to_string(),
            "ghost".to_string(),
            "name".to_string(),
        ];
        state.hide_column("id");

        let columns = visible_columns(&state);

        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        // 未知键剔除, 隐藏键剔除, 顺序保持
        assert_eq!(keys, ["price", "name"]);
    }

    #[test]
    fn test_stats_ignore_search_filter() {
        let mut products = fixture();
        products[1].availability = Availability::LowStock;
        products[2].availability = Availability::OutOfStock;

        let stats = compute_stats(&products);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_stock, 1);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 1);
        let expected = 1299.99 + 99.99 + 699.99;
        assert!((stats.total_value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_image_column_never_sorts() {
        let products = fixture();
        let mut state = ViewState::default();
        state.toggle_sort("image");

        let vm = project(&products, &state);

        let ids: Vec<&str> = vm.rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P3", "P1", "P2"]);
    }
}
