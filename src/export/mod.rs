// ==========================================
// 产品库存看板 - 导出层
// ==========================================
// 职责: CSV 导出与上传模板生成
// ==========================================

pub mod csv_exporter;
pub mod error;
pub mod template;

pub use csv_exporter::{
    to_csv_string, write_csv, CSV_CONTENT_TYPE, EXPORT_ALL_FILENAME, EXPORT_FILTERED_FILENAME,
};
pub use error::{ExportError, ExportResult};
pub use template::{template_rows, to_template_csv, write_template, TEMPLATE_FILENAME};
