// ==========================================
// 产品库存看板 - API 层
// ==========================================
// 职责: 面向前端（对话框/表格/下载按钮）的业务接口
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod import_api;
pub mod product_api;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use import_api::ImportApi;
pub use product_api::ProductApi;
