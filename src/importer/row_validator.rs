// ==========================================
// 产品库存看板 - 行校验器实现
// ==========================================
// 职责: 单行规则校验 + 库存状态归一化
// 规则顺序固定: id → name → brand → price, 命中第一条即止
// ==========================================

use crate::domain::product::{Product, RawProductRecord};
use crate::domain::types::Availability;
use crate::importer::error::RowError;
use crate::importer::product_importer_trait::RowValidator;

pub struct ProductRowValidator;

impl RowValidator for ProductRowValidator {
    fn validate(&self, record: RawProductRecord) -> Result<Product, RowError> {
        if record.id.is_empty() {
            return Err(RowError::MissingId);
        }
        if record.name.is_empty() {
            return Err(RowError::MissingName);
        }
        if record.brand.is_empty() {
            return Err(RowError::MissingBrand);
        }
        let price = match record.price {
            Some(p) if p.is_finite() && p > 0.0 => p,
            _ => return Err(RowError::InvalidPrice),
        };

        let availability = Availability::normalize(&record.availability_raw);

        let image_url = if record.image_url.is_empty() {
            None
        } else {
            Some(record.image_url)
        };

        Ok(Product {
            id: record.id,
            name: record.name,
            brand: record.brand,
            price,
            availability,
            image_url,
            extras: record.extras,
        })
    }
}

/// 手工录入产品的不变式校验（新增/编辑对话框提交路径）
///
/// 与批量导入同一套规则与文案, 保证集合不变式只有一个来源
pub fn validate_product(product: &Product) -> Result<(), RowError> {
    if product.id.trim().is_empty() {
        return Err(RowError::MissingId);
    }
    if product.name.trim().is_empty() {
        return Err(RowError::MissingName);
    }
    if product.brand.trim().is_empty() {
        return Err(RowError::MissingBrand);
    }
    if !(product.price.is_finite() && product.price > 0.0) {
        return Err(RowError::InvalidPrice);
    }
    Ok(())
}
