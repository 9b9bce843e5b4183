// ==========================================
// 产品库存看板 - API 层错误类型
// ==========================================
// 职责: 将下层技术错误转换为面向调用方的业务错误
// 工具: thiserror 派生宏
// ==========================================

use crate::export::error::ExportError;
use crate::importer::error::{ImportError, RowError};
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务规则错误 =====
    #[error("产品 ID 已存在: {0}")]
    DuplicateId(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ===== 导入/导出错误 =====
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("导出失败: {0}")]
    ExportError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从下层错误转换
// ==========================================

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateId(id) => ApiError::DuplicateId(id),
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})不存在", entity, id))
            }
            RepositoryError::LockError(msg) => {
                ApiError::InternalError(format!("集合锁获取失败: {}", msg))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            // 仓储错误穿透导入层时按仓储语义转换
            ImportError::Store(repo_err) => repo_err.into(),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<RowError> for ApiError {
    fn from(err: RowError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let api_err: ApiError = RepositoryError::DuplicateId("P1".to_string()).into();
        assert!(matches!(api_err, ApiError::DuplicateId(id) if id == "P1"));

        let api_err: ApiError = RepositoryError::NotFound {
            entity: "Product".to_string(),
            id: "P9".to_string(),
        }
        .into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("Product"));
                assert!(msg.contains("P9"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_row_error_becomes_invalid_input() {
        let api_err: ApiError = RowError::InvalidPrice.into();
        match api_err {
            ApiError::InvalidInput(msg) => assert_eq!(msg, "Valid price is required"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_import_store_error_unwraps_to_repository_semantics() {
        let import_err = ImportError::Store(RepositoryError::DuplicateId("P1".to_string()));
        let api_err: ApiError = import_err.into();
        assert!(matches!(api_err, ApiError::DuplicateId(_)));
    }
}
