// ==========================================
// 产品库存看板 - 看板 API
// ==========================================
// 职责: 视图投影 / 汇总统计 / CSV 导出的聚合查询入口
// 只读: 本 API 不改写集合
// ==========================================

use crate::api::error::ApiResult;
use crate::config::DashboardConfig;
use crate::export::csv_exporter::{
    write_csv, EXPORT_ALL_FILENAME, EXPORT_FILTERED_FILENAME,
};
use crate::repository::ProductRepository;
use crate::view::projection::{compute_stats, project, InventoryStats, ViewModel};
use crate::view::state::ViewState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    repo: Arc<ProductRepository>,
    config: DashboardConfig,
}

impl DashboardApi {
    pub fn new(repo: Arc<ProductRepository>, config: DashboardConfig) -> Self {
        Self { repo, config }
    }

    /// 投影当前集合: 过滤 + 排序 + 列整形
    pub fn project(&self, state: &ViewState) -> ApiResult<ViewModel> {
        let snapshot = self.repo.list_all()?;
        Ok(project(&snapshot, state))
    }

    /// 汇总统计（不随搜索过滤）
    pub fn stats(&self) -> ApiResult<InventoryStats> {
        let snapshot = self.repo.list_all()?;
        Ok(compute_stats(&snapshot))
    }

    /// 导出全量集合, 返回 (路径, 行数)
    pub fn export_all(&self) -> ApiResult<(PathBuf, usize)> {
        let snapshot = self.repo.list_all()?;
        let path = self.config.export_path(EXPORT_ALL_FILENAME);
        let rows = write_csv(&snapshot, &path)?;
        info!(rows, path = %path.display(), "全量导出完成");
        Ok((path, rows))
    }

    /// 导出当前过滤视图, 返回 (路径, 行数)
    pub fn export_filtered(&self, state: &ViewState) -> ApiResult<(PathBuf, usize)> {
        let view = self.project(state)?;
        let path = self.config.export_path(EXPORT_FILTERED_FILENAME);
        let rows = write_csv(&view.rows, &path)?;
        info!(rows, path = %path.display(), "过滤视图导出完成");
        Ok((path, rows))
    }
}
