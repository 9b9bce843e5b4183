// ==========================================
// 产品库存看板 - 产品集合仓储
// ==========================================
// 职责: 产品集合的唯一属主; 新增/替换/删除/批量合并
// 存储: 内存有序序列（插入序即无排序时的展示序）, 无持久化
// 并发: RwLock 互斥; 同步接口, 持锁期间无挂起点
// ==========================================

use crate::domain::product::{sample_products, Product};
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::RwLock;
use tracing::debug;

// ==========================================
// ProductBulkSink Trait
// ==========================================
// 用途: 导入层对仓储的最小依赖面（只需批量合并）
// 实现者: ProductRepository
pub trait ProductBulkSink: Send + Sync {
    /// 将整批产品按序追加到集合末尾, 不检查 id 唯一性
    fn bulk_merge(&self, products: Vec<Product>) -> RepositoryResult<usize>;
}

// ==========================================
// ProductRepository - 产品集合仓储
// ==========================================
pub struct ProductRepository {
    products: RwLock<Vec<Product>>,
}

impl ProductRepository {
    /// 创建空集合
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }

    /// 创建含 5 条种子产品的集合（演示/测试）
    pub fn with_sample_data() -> Self {
        Self {
            products: RwLock::new(sample_products()),
        }
    }

    /// 新增产品
    ///
    /// # 返回
    /// - Err(DuplicateId): id 已存在, 集合不变
    pub fn add(&self, product: Product) -> RepositoryResult<()> {
        let mut guard = self.write_guard()?;
        if guard.iter().any(|p| p.id == product.id) {
            return Err(RepositoryError::DuplicateId(product.id));
        }
        debug!(id = %product.id, "新增产品");
        guard.push(product);
        Ok(())
    }

    /// 按 id 原位替换产品（序列位置保持不变）
    ///
    /// 批量导入可能造成重复 id; 只替换第一个匹配项
    ///
    /// # 返回
    /// - Err(NotFound): id 不存在, 集合不变
    pub fn update(&self, id: &str, product: Product) -> RepositoryResult<()> {
        let mut guard = self.write_guard()?;
        match guard.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                debug!(id = %id, "替换产品");
                *slot = product;
                Ok(())
            }
            None => Err(Self::not_found(id)),
        }
    }

    /// 按 id 删除第一个匹配的产品, 返回被删除的实体
    pub fn delete(&self, id: &str) -> RepositoryResult<Product> {
        let mut guard = self.write_guard()?;
        match guard.iter().position(|p| p.id == id) {
            Some(pos) => {
                debug!(id = %id, "删除产品");
                Ok(guard.remove(pos))
            }
            None => Err(Self::not_found(id)),
        }
    }

    /// 查询单个产品（第一个匹配项）
    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        let guard = self.read_guard()?;
        Ok(guard.iter().find(|p| p.id == id).cloned())
    }

    /// 集合快照（保持插入序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let guard = self.read_guard()?;
        Ok(guard.clone())
    }

    /// 集合大小
    pub fn len(&self) -> RepositoryResult<usize> {
        let guard = self.read_guard()?;
        Ok(guard.len())
    }

    /// 集合是否为空
    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            entity: "Product".to_string(),
            id: id.to_string(),
        }
    }

    fn read_guard(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, Vec<Product>>> {
        self.products
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn write_guard(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, Vec<Product>>> {
        self.products
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl Default for ProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductBulkSink for ProductRepository {
    fn bulk_merge(&self, products: Vec<Product>) -> RepositoryResult<usize> {
        let mut guard = self.write_guard()?;
        let count = products.len();
        debug!(count, "批量合并产品");
        guard.extend(products);
        Ok(count)
    }
}
