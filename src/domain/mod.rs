// ==========================================
// 产品库存看板 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含 I/O
// ==========================================

pub mod product;
pub mod types;

pub use product::{
    sample_products, BulkUploadResult, FailedRow, ImportBatch, ImportReport, Product,
    RawProductRecord, EXTRA_COLUMN_COUNT,
};
pub use types::{Availability, CellValue, RawRow, SortDirection};
