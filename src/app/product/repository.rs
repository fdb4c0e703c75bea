//! 产品仓储
//!
//! 进程内存中的产品集合，重启后数据丢失。所有访问经过一把读写锁。

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::model::Product;

/// 产品仓储 trait
///
/// 查不到记录时返回 `None`，删除不存在的 ID 不报错。
pub trait ProductRepository: Send + Sync {
    /// 追加一条记录，调用方负责保证 `product_id` 已设置
    fn create(&self, product: Product) -> Product;

    /// 按插入顺序遍历当前所有记录，每次调用都得到一个新的序列
    fn find_all(&self) -> Box<dyn Iterator<Item = Product> + Send>;

    fn find_by_id(&self, id: &str) -> Option<Product>;

    /// 按 `product_id` 匹配并覆盖名称和数量，不会新建记录
    fn edit(&self, product: Product) -> Option<Product>;

    fn delete_by_id(&self, id: &str);
}

/// 基于 `Vec` 的内存仓储
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // 持锁线程 panic 不会破坏 Vec 的结构，直接取回数据
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn create(&self, product: Product) -> Product {
        self.write().push(product.clone());
        product
    }

    fn find_all(&self) -> Box<dyn Iterator<Item = Product> + Send> {
        let snapshot = self.read().clone();
        Box::new(snapshot.into_iter())
    }

    fn find_by_id(&self, id: &str) -> Option<Product> {
        self.read().iter().find(|p| p.product_id == id).cloned()
    }

    fn edit(&self, product: Product) -> Option<Product> {
        let mut products = self.write();
        let stored = products
            .iter_mut()
            .find(|p| p.product_id == product.product_id)?;

        stored.product_name = product.product_name;
        stored.product_quantity = product.product_quantity;
        Some(stored.clone())
    }

    fn delete_by_id(&self, id: &str) {
        let mut products = self.write();
        if let Some(pos) = products.iter().position(|p| p.product_id == id) {
            products.remove(pos);
        }
    }
}
