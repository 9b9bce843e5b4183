// ==========================================
// 产品库存看板 - 文件解码器实现
// ==========================================
// 支持: CSV (.csv) / Excel (.xlsx/.xls)
// 输出: 有序行记录（原始表头 → 单元格标量）
// ==========================================

use crate::domain::types::{CellValue, RawRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::product_importer_trait::FileParser;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use csv::ReaderBuilder;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// CSV 解码器
// ==========================================
// 首行为表头; 完全空白的数据行跳过; 单元格一律为文本标量
#[derive(Debug)]
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_rows(&self, data: &[u8]) -> ImportResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(data);

        // 表头保留原始大小写, 归一化在字段映射阶段统一处理
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = RawRow::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    if header.is_empty() {
                        continue;
                    }
                    row.insert(header.clone(), CellValue::Text(value.trim().to_string()));
                }
            }

            // 跳过完全空白的行
            if row.values().all(|v| v.is_blank()) {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

// ==========================================
// Excel 解码器
// ==========================================
// 只消费第一个工作表; 空单元格不进入行记录
#[derive(Debug)]
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_rows(&self, data: &[u8]) -> ImportResult<Vec<RawRow>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(|e| ImportError::ExcelDecodeError(e.to_string()))?;

        let sheet_names = workbook.sheet_names().to_owned();
        let first_sheet = sheet_names
            .first()
            .ok_or_else(|| ImportError::ExcelDecodeError("工作簿不含工作表".to_string()))?
            .clone();

        let range = workbook
            .worksheet_range(&first_sheet)
            .map_err(|e| ImportError::ExcelDecodeError(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelDecodeError("工作表不含表头行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row = RawRow::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                let Some(header) = headers.get(col_idx) else {
                    continue;
                };
                if header.is_empty() {
                    continue;
                }
                match cell_to_value(cell) {
                    CellValue::Empty => {}
                    value => {
                        row.insert(header.clone(), value);
                    }
                }
            }

            // 跳过完全空白的行
            if row.values().all(|v| v.is_blank()) {
                continue;
            }

            rows.push(row);
        }

        Ok(rows)
    }
}

/// Excel 单元格 → 标量
fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        other => {
            // 日期时间等其余类型按显示文本处理
            let text = other.to_string().trim().to_string();
            if text.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(text)
            }
        }
    }
}

// ==========================================
// 通用解码器（按扩展名路由）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    /// 按扩展名选择解码器
    ///
    /// 在任何文件读取之前调用; 不支持的扩展名直接拒绝, 不做 I/O
    pub fn for_path<P: AsRef<Path>>(file_path: P) -> ImportResult<Box<dyn FileParser>> {
        let ext = file_path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(Box::new(CsvParser)),
            "xlsx" | "xls" => Ok(Box::new(ExcelParser)),
            _ => Err(ImportError::UnsupportedFileType(ext)),
        }
    }
}
