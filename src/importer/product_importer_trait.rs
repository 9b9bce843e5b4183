// ==========================================
// 产品库存看板 - 导入管道 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 管道: 解码 → 字段映射 → 行校验 → 批量合并
// ==========================================

use crate::domain::product::{ImportReport, Product, RawProductRecord};
use crate::domain::types::RawRow;
use crate::importer::error::{ImportResult, RowError};
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解码接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync + std::fmt::Debug {
    /// 将文件字节解码为有序的原始行记录
    ///
    /// # 参数
    /// - data: 完整文件内容（解码前已整体读入内存, 无流式解析）
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表, 保持源文件行序
    /// - Err(ImportError): 整体解码失败, 不产生部分结果
    fn parse_rows(&self, data: &[u8]) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 表头归一化 + 同义列解析（阶段 1）
// 实现者: ProductFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将原始行映射为导入中间结构
    ///
    /// 纯函数, 不做规则校验; 解析不了的数值以 None 表达
    ///
    /// # 参数
    /// - row: 原始行记录（原始表头大小写）
    /// - row_number: 源文件行号（表头为第 1 行）
    fn map_to_raw_product(&self, row: &RawRow, row_number: usize) -> RawProductRecord;
}

// ==========================================
// RowValidator Trait
// ==========================================
// 用途: 单行规则校验（阶段 2）
// 实现者: ProductRowValidator
pub trait RowValidator: Send + Sync {
    /// 校验中间结构并产出合法产品
    ///
    /// 规则按固定顺序执行, 命中第一条违规即返回;
    /// 单行失败不影响同批其他行
    fn validate(&self, record: RawProductRecord) -> Result<Product, RowError>;
}

// ==========================================
// 导入进度
// ==========================================

/// 导入阶段检查点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    /// 导入启动
    Started,
    /// 文件解码完成
    Decoded,
    /// 全部行校验完成
    Validated,
    /// 合并入库并生成批次信息
    Completed,
}

impl ImportPhase {
    /// 近似进度百分比（供前端进度条使用）
    pub fn percent(&self) -> u8 {
        match self {
            ImportPhase::Started => 10,
            ImportPhase::Decoded => 50,
            ImportPhase::Validated => 90,
            ImportPhase::Completed => 100,
        }
    }
}

// 用途: 进度回调接口
// 实现者: LogProgressSink（默认）, 或前端注入的任意回调
pub trait ProgressSink: Send + Sync {
    /// 上报一个阶段检查点
    fn report(&self, phase: ImportPhase);
}

// ==========================================
// ProductImporter Trait
// ==========================================
// 用途: 批量导入主接口
// 实现者: ProductImporterImpl
#[async_trait]
pub trait ProductImporter: Send + Sync {
    /// 从 CSV / Excel 文件批量导入产品
    ///
    /// # 参数
    /// - file_path: 文件路径（.csv / .xlsx / .xls, 扩展名大小写不敏感）
    ///
    /// # 返回
    /// - Ok(ImportReport): 批次信息 + 成功/失败明细
    /// - Err(ImportError): 扩展名不支持 / 读取失败 / 整体解码失败,
    ///   此时集合零变更
    ///
    /// # 导入流程
    /// 1. 扩展名路由（任何读取之前）
    /// 2. 异步整体读取文件字节（唯一挂起点）
    /// 3. 解码为原始行记录
    /// 4. 逐行映射 + 校验（行失败仅记入失败列表）
    /// 5. 成功子集一次性批量合并入库（不去重）
    /// 6. 生成批次信息并返回
    async fn import_file<P: AsRef<Path> + Send>(&self, file_path: P)
        -> ImportResult<ImportReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_percent_monotonic() {
        let phases = [
            ImportPhase::Started,
            ImportPhase::Decoded,
            ImportPhase::Validated,
            ImportPhase::Completed,
        ];
        for pair in phases.windows(2) {
            assert!(pair[0].percent() < pair[1].percent());
        }
        assert_eq!(ImportPhase::Completed.percent(), 100);
    }
}
