// ==========================================
// 产品库存看板 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 文件级导入错误
///
/// 任一变体都意味着整次导入失败, 集合零变更
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv/.xlsx/.xls）")]
    UnsupportedFileType(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 解码错误 =====
    #[error("CSV 解析失败: {0}")]
    CsvDecodeError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelDecodeError(String),

    // ===== 仓储错误 =====
    #[error("仓储写入失败: {0}")]
    Store(#[from] RepositoryError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvDecodeError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelDecodeError(err.to_string())
    }
}

/// 行级错误
///
/// 行内局部: 只记入失败列表, 不上抛, 不影响同批其他行
/// 错误文案是导入结果的数据契约, 与前端展示逐字一致
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("ID is required")]
    MissingId,

    #[error("Name is required")]
    MissingName,

    #[error("Brand is required")]
    MissingBrand,

    #[error("Valid price is required")]
    InvalidPrice,

    #[error("Processing error: {0}")]
    Processing(String),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
