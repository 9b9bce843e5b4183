// ==========================================
// 产品库存看板 - 导入层
// ==========================================
// 职责: 外部表格文件 → 合法产品集合
// 支持: CSV, Excel
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod product_importer_impl;
pub mod product_importer_trait;
pub mod row_validator;

// 重导出核心类型
pub use error::{ImportError, ImportResult, RowError};
pub use field_mapper::ProductFieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use product_importer_impl::{LogProgressSink, ProductImporterImpl};
pub use row_validator::{validate_product, ProductRowValidator};

// 重导出 Trait 接口
pub use product_importer_trait::{
    FieldMapper, FileParser, ImportPhase, ProductImporter, ProgressSink, RowValidator,
};
