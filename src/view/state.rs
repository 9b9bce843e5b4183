// ==========================================
// 产品库存看板 - 视图状态
// ==========================================
// 职责: 搜索词 / 排序键与方向 / 列隐藏集合 / 列顺序
// 显式不可变值: 作为参数传入投影引擎, 不做共享可变模块状态
// ==========================================

use crate::domain::types::SortDirection;
use crate::view::columns::default_column_order;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// ViewState - 视图状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// 实时搜索词（空串匹配一切）
    pub search_term: String,

    /// 排序列键（None = 保持插入序）
    pub sort_key: Option<String>,

    /// 排序方向
    pub sort_direction: SortDirection,

    /// 隐藏列集合
    pub hidden_columns: HashSet<String>,

    /// 全部已知列键的主顺序（含隐藏列）
    pub column_order: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            hidden_columns: HashSet::new(),
            column_order: default_column_order(),
        }
    }
}

impl ViewState {
    /// 更新搜索词
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// 点击列头排序: 同列翻转方向, 换列重置为升序
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// 隐藏列
    pub fn hide_column(&mut self, key: &str) {
        self.hidden_columns.insert(key.to_string());
    }

    /// 显示列
    pub fn show_column(&mut self, key: &str) {
        self.hidden_columns.remove(key);
    }

    /// 列是否隐藏
    pub fn is_column_hidden(&self, key: &str) -> bool {
        self.hidden_columns.contains(key)
    }

    /// 拖拽重排: 将 active 列移动到 over 列所在位置
    ///
    /// 语义为 array-move: 先摘除源键, 再插入目标下标;
    /// 任一键未知或两键相同时不做任何变更
    ///
    /// # 返回
    /// - true: 顺序已变更
    pub fn move_column(&mut self, active: &str, over: &str) -> bool {
        if active == over {
            return false;
        }
        let Some(from) = self.column_order.iter().position(|k| k == active) else {
            return false;
        };
        let Some(to) = self.column_order.iter().position(|k| k == over) else {
            return false;
        };

        let key = self.column_order.remove(from);
        let to = to.min(self.column_order.len());
        self.column_order.insert(to, key);
        true
    }
}
