// ==========================================
// 产品库存看板 - 核心库
// ==========================================
// 系统定位: 浏览器内存态库存看板的非 UI 核心
// 组成: 导入管道 / 产品集合仓储 / 视图投影引擎 / CSV 导出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 仓储层 - 产品集合
pub mod repository;

// 导入层 - 外部表格数据
pub mod importer;

// 视图层 - 投影与统计
pub mod view;

// 导出层 - CSV 与模板
pub mod export;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    sample_products, Availability, BulkUploadResult, CellValue, FailedRow, ImportBatch,
    ImportReport, Product, RawRow, SortDirection, EXTRA_COLUMN_COUNT,
};

// 仓储
pub use repository::{ProductBulkSink, ProductRepository};

// 导入管道
pub use importer::{
    ImportError, ImportPhase, ProductImporter, ProductImporterImpl, ProgressSink, RowError,
};

// 视图投影
pub use view::{compute_stats, project, ColumnDef, InventoryStats, ViewModel, ViewState};

// 导出
pub use export::{
    to_csv_string, write_csv, write_template, EXPORT_ALL_FILENAME, EXPORT_FILTERED_FILENAME,
    TEMPLATE_FILENAME,
};

// 配置
pub use config::DashboardConfig;

// API
pub use api::{ApiError, DashboardApi, ImportApi, ProductApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "产品库存看板";
