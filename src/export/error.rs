// ==========================================
// 产品库存看板 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 序列化失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("内部错误: {0}")]
    InternalError(String),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
