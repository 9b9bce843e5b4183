// ==========================================
// 产品库存看板 - 批量导入器实现
// ==========================================
// 职责: 整合导入流程, 从文件到产品集合
// 流程: 扩展名路由 → 读取 → 解码 → 映射 → 校验 → 批量合并
// ==========================================

use crate::config::DashboardConfig;
use crate::domain::product::{BulkUploadResult, FailedRow, ImportBatch, ImportReport, Product};
use crate::domain::types::RawRow;
use crate::importer::error::{ImportResult, RowError};
use crate::importer::field_mapper::ProductFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::product_importer_trait::{
    FieldMapper, ImportPhase, ProductImporter, ProgressSink, RowValidator,
};
use crate::importer::row_validator::ProductRowValidator;
use crate::repository::product_repo::ProductBulkSink;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// LogProgressSink - 缺省进度回调
// ==========================================
// 前端未注入回调时, 进度检查点只落日志
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn report(&self, phase: ImportPhase) {
        debug!(phase = ?phase, percent = phase.percent(), "导入进度");
    }
}

// ==========================================
// ProductImporterImpl - 批量导入器实现
// ==========================================
pub struct ProductImporterImpl<S>
where
    S: ProductBulkSink,
{
    // 产品集合（只经 bulk_merge 写入）
    store: Arc<S>,

    // 配置
    config: DashboardConfig,

    // 管道组件
    field_mapper: Box<dyn FieldMapper>,
    row_validator: Box<dyn RowValidator>,
    progress: Box<dyn ProgressSink>,
}

impl<S> ProductImporterImpl<S>
where
    S: ProductBulkSink,
{
    /// 创建新的导入器实例
    ///
    /// # 参数
    /// - store: 产品集合仓储
    /// - config: 看板配置
    /// - field_mapper: 字段映射器
    /// - row_validator: 行校验器
    /// - progress: 进度回调
    pub fn new(
        store: Arc<S>,
        config: DashboardConfig,
        field_mapper: Box<dyn FieldMapper>,
        row_validator: Box<dyn RowValidator>,
        progress: Box<dyn ProgressSink>,
    ) -> Self {
        Self {
            store,
            config,
            field_mapper,
            row_validator,
            progress,
        }
    }

    /// 使用缺省组件创建导入器
    pub fn with_defaults(store: Arc<S>, config: DashboardConfig) -> Self {
        Self::new(
            store,
            config,
            Box::new(ProductFieldMapper),
            Box::new(ProductRowValidator),
            Box::new(LogProgressSink),
        )
    }
}

#[async_trait::async_trait]
impl<S> ProductImporter for ProductImporterImpl<S>
where
    S: ProductBulkSink,
{
    #[instrument(skip(self, file_path))]
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportReport> {
        let start = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);

        info!(batch_id = %batch_id, file = %path.display(), "开始批量导入");
        self.progress.report(ImportPhase::Started);

        // === 步骤 1: 扩展名路由（任何读取之前） ===
        let parser = UniversalFileParser::for_path(path)?;

        // === 步骤 2: 整体读取文件字节（唯一挂起点） ===
        let data = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                crate::importer::error::ImportError::FileNotFound(path.display().to_string())
            } else {
                crate::importer::error::ImportError::FileReadError(e.to_string())
            }
        })?;

        // === 步骤 3: 解码 ===
        // 整体解码失败即中止, 集合零变更, 不产生部分结果
        let rows = parser.parse_rows(&data)?;
        let total_rows = rows.len();
        info!(total_rows, "文件解码完成");
        self.progress.report(ImportPhase::Decoded);

        // === 步骤 4: 逐行映射 + 校验 ===
        let mut result = BulkUploadResult::default();
        for (idx, row) in rows.iter().enumerate() {
            // 表头占第 1 行, 首条数据行号为 2
            let row_number = idx + 2;
            match self.process_row(row, row_number) {
                Ok(product) => result.successful.push(product),
                Err(err) => {
                    debug!(row = row_number, error = %err, "行校验失败");
                    result.failed.push(FailedRow {
                        row: row_number,
                        error: err.to_string(),
                        data: row.clone(),
                    });
                }
            }
        }
        info!(
            success = result.successful.len(),
            failed = result.failed.len(),
            "行校验完成"
        );
        self.progress.report(ImportPhase::Validated);

        // === 步骤 5: 成功子集一次性合并入库 ===
        // 批量合并不去重: 与既有 id 重复的行照常追加
        if !result.successful.is_empty() {
            self.store.bulk_merge(result.successful.clone())?;
        }

        // === 步骤 6: 批次信息 ===
        let elapsed = start.elapsed();
        let batch = ImportBatch {
            batch_id: batch_id.clone(),
            file_name,
            total_rows,
            success_rows: result.successful.len(),
            failed_rows: result.failed.len(),
            imported_at: Utc::now(),
            elapsed_ms: elapsed.as_millis() as i64,
        };
        self.progress.report(ImportPhase::Completed);

        if !result.failed.is_empty() {
            let (preview, remainder) =
                result.failure_preview(self.config.failure_preview_limit);
            for failure in preview {
                warn!(row = failure.row, error = %failure.error, "导入失败明细");
            }
            if remainder > 0 {
                warn!(more = remainder, "其余失败行已省略");
            }
        }

        info!(
            batch_id = %batch_id,
            total = batch.total_rows,
            success = batch.success_rows,
            failed = batch.failed_rows,
            elapsed_ms = batch.elapsed_ms,
            "批量导入完成"
        );

        Ok(ImportReport { batch, result })
    }
}

impl<S> ProductImporterImpl<S>
where
    S: ProductBulkSink,
{
    /// 处理单行: 映射 → 校验
    ///
    /// 单行意外 panic 不得中断整批, 捕获后降级为行失败记录
    fn process_row(&self, row: &RawRow, row_number: usize) -> Result<Product, RowError> {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let record = self.field_mapper.map_to_raw_product(row, row_number);
            self.row_validator.validate(record)
        }));

        match outcome {
            Ok(row_result) => row_result,
            Err(payload) => Err(RowError::Processing(panic_message(payload))),
        }
    }
}

/// 提取 panic 负载中的文本消息
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown error".to_string()
    }
}
