// ==========================================
// 产品库存看板 - 导入 API
// ==========================================
// 职责: 批量上传入口 + 模板下载
// 并发: 同一仓储同一时刻至多一次导入在途
//       （前端禁用上传控件, 此处以互斥锁兜底）
// ==========================================

use crate::api::error::ApiResult;
use crate::config::DashboardConfig;
use crate::domain::product::ImportReport;
use crate::export::template::{write_template, TEMPLATE_FILENAME};
use crate::importer::product_importer_impl::ProductImporterImpl;
use crate::importer::product_importer_trait::ProductImporter;
use crate::repository::ProductRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

// ==========================================
// ImportApi - 导入 API
// ==========================================
pub struct ImportApi {
    importer: ProductImporterImpl<ProductRepository>,
    config: DashboardConfig,
    import_guard: Mutex<()>,
}

impl ImportApi {
    pub fn new(repo: Arc<ProductRepository>, config: DashboardConfig) -> Self {
        Self {
            importer: ProductImporterImpl::with_defaults(repo, config.clone()),
            config,
            import_guard: Mutex::new(()),
        }
    }

    /// 提交一次批量导入
    ///
    /// 导入开始后必然跑完（成功或行级失败）, 无取消与超时;
    /// 并发提交按到达顺序串行执行
    pub async fn submit_import<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ApiResult<ImportReport> {
        let _guard = self.import_guard.lock().await;
        let report = self.importer.import_file(file_path).await?;
        Ok(report)
    }

    /// 生成上传模板文件, 返回写出的路径
    pub fn download_template(&self) -> ApiResult<PathBuf> {
        let path = self.config.export_path(TEMPLATE_FILENAME);
        write_template(&path)?;
        info!(path = %path.display(), "模板下载完成");
        Ok(path)
    }
}
