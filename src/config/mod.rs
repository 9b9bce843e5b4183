// ==========================================
// 产品库存看板 - 配置层
// ==========================================
// 职责: 配置加载与缺省值
// 存储: 用户配置目录下的 JSON 文件; 缺失或损坏时回退缺省值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// 导入失败明细的缺省预览上限
pub const DEFAULT_FAILURE_PREVIEW_LIMIT: usize = 5;

const CONFIG_DIR_NAME: &str = "product-dashboard";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// DashboardConfig - 看板配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 导入失败明细预览条数上限（其余条目只报剩余数量）
    pub failure_preview_limit: usize,

    /// CSV 导出目录（None = 当前工作目录）
    pub export_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            failure_preview_limit: DEFAULT_FAILURE_PREVIEW_LIMIT,
            export_dir: None,
        }
    }
}

impl DashboardConfig {
    /// 从缺省位置加载配置; 文件缺失或损坏时回退缺省值
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::from_file(&path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "配置文件损坏, 使用缺省配置");
            Self::default()
        })
    }

    /// 从指定文件加载配置
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// 缺省配置文件路径: <config_dir>/product-dashboard/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 导出文件的完整路径
    pub fn export_path(&self, filename: &str) -> PathBuf {
        match &self.export_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}
