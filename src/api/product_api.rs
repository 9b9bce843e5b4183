// ==========================================
// 产品库存看板 - 产品 API
// ==========================================
// 职责: 手工录入路径（编辑对话框提交）与产品查询
// 约束: 手工新增强制 id 唯一; 批量导入不经此路径
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::product::Product;
use crate::importer::row_validator::validate_product;
use crate::repository::ProductRepository;
use std::sync::Arc;
use tracing::info;

// ==========================================
// ProductApi - 产品 API
// ==========================================
pub struct ProductApi {
    repo: Arc<ProductRepository>,
}

impl ProductApi {
    pub fn new(repo: Arc<ProductRepository>) -> Self {
        Self { repo }
    }

    /// 新增产品（编辑对话框的"新增"提交）
    ///
    /// # 返回
    /// - Err(InvalidInput): 不变式校验失败, 集合不变
    /// - Err(DuplicateId): id 已存在, 集合不变
    pub fn add_product(&self, product: Product) -> ApiResult<()> {
        validate_product(&product)?;
        let id = product.id.clone();
        self.repo.add(product)?;
        info!(id = %id, "产品新增成功");
        Ok(())
    }

    /// 替换产品（编辑对话框的"保存"提交, 原位替换）
    ///
    /// # 返回
    /// - Err(NotFound): id 不存在, 集合不变
    pub fn update_product(&self, id: &str, product: Product) -> ApiResult<()> {
        validate_product(&product)?;
        self.repo.update(id, product)?;
        info!(id = %id, "产品更新成功");
        Ok(())
    }

    /// 按 id 删除产品, 返回被删除的实体
    pub fn delete_product(&self, id: &str) -> ApiResult<Product> {
        let removed = self.repo.delete(id)?;
        info!(id = %id, name = %removed.name, "产品删除成功");
        Ok(removed)
    }

    /// 查询单个产品
    pub fn get_product(&self, id: &str) -> ApiResult<Option<Product>> {
        Ok(self.repo.find_by_id(id)?)
    }

    /// 集合快照（插入序）
    pub fn list_products(&self) -> ApiResult<Vec<Product>> {
        Ok(self.repo.list_all()?)
    }
}
