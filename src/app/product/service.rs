//! 产品业务服务

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::model::Product;
use super::repository::ProductRepository;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// 创建产品，ID 为空时生成一个新的 UUID
    pub fn create(&self, mut product: Product) -> Product {
        if !product.has_id() {
            product.product_id = Uuid::new_v4().to_string();
        }

        info!(product_id = %product.product_id, name = %product.product_name, "创建产品");
        self.repository.create(product)
    }

    pub fn find_all(&self) -> Vec<Product> {
        let products: Vec<Product> = self.repository.find_all().collect();
        debug!(count = products.len(), "查询全部产品");
        products
    }

    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        debug!(product_id = %id, "按 ID 查询产品");
        self.repository.find_by_id(id)
    }

    pub fn edit(&self, product: Product) -> Option<Product> {
        info!(product_id = %product.product_id, "编辑产品");
        self.repository.edit(product)
    }

    pub fn delete(&self, id: &str) {
        info!(product_id = %id, "删除产品");
        self.repository.delete_by_id(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::repository::InMemoryProductRepository;
    use std::sync::Mutex;

    /// 记录调用的仓储替身
    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<String>>,
        created: Mutex<Vec<Product>>,
        fixture: Vec<Product>,
    }

    impl RecordingRepository {
        fn with_fixture(fixture: Vec<Product>) -> Self {
            Self {
                fixture,
                ..Self::default()
            }
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ProductRepository for RecordingRepository {
        fn create(&self, product: Product) -> Product {
            self.record(format!("create:{}", product.product_id));
            self.created.lock().unwrap().push(product.clone());
            product
        }

        fn find_all(&self) -> Box<dyn Iterator<Item = Product> + Send> {
            self.record("find_all".to_string());
            Box::new(self.fixture.clone().into_iter())
        }

        fn find_by_id(&self, id: &str) -> Option<Product> {
            self.record(format!("find_by_id:{id}"));
            self.fixture.iter().find(|p| p.product_id == id).cloned()
        }

        fn edit(&self, product: Product) -> Option<Product> {
            self.record(format!("edit:{}", product.product_id));
            self.fixture
                .iter()
                .any(|p| p.product_id == product.product_id)
                .then_some(product)
        }

        fn delete_by_id(&self, id: &str) {
            self.record(format!("delete_by_id:{id}"));
        }
    }

    fn service_with(repo: Arc<RecordingRepository>) -> ProductService {
        ProductService::new(repo)
    }

    #[test]
    fn test_create_generates_id_when_missing() {
        let repo = Arc::new(RecordingRepository::default());
        let service = service_with(repo.clone());

        let created = service.create(Product::new("Keyboard", 2));

        let saved = repo.created.lock().unwrap()[0].clone();
        assert!(!saved.product_id.trim().is_empty());
        assert!(Uuid::parse_str(&saved.product_id).is_ok());
        assert_eq!(saved, created);
    }

    #[test]
    fn test_create_replaces_blank_id() {
        let repo = Arc::new(RecordingRepository::default());
        let service = service_with(repo.clone());

        let created = service.create(Product::with_id("   ", "Keyboard", 2));
        assert_ne!(created.product_id.trim(), "");
    }

    #[test]
    fn test_create_keeps_existing_id() {
        let repo = Arc::new(RecordingRepository::default());
        let service = service_with(repo.clone());

        let created = service.create(Product::with_id("fixed-id", "Mouse", 1));

        assert_eq!(created.product_id, "fixed-id");
        assert_eq!(repo.calls(), vec!["create:fixed-id"]);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let service = ProductService::new(Arc::new(InMemoryProductRepository::new()));
        let a = service.create(Product::new("a", 1));
        let b = service.create(Product::new("b", 1));
        assert_ne!(a.product_id, b.product_id);
    }

    #[test]
    fn test_find_all_materializes_in_order() {
        let repo = Arc::new(RecordingRepository::with_fixture(vec![
            Product::with_id("id-1", "", 0),
            Product::with_id("id-2", "", 0),
        ]));
        let service = service_with(repo.clone());

        let result = service.find_all();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].product_id, "id-1");
        assert_eq!(result[1].product_id, "id-2");
        assert_eq!(repo.calls(), vec!["find_all"]);
    }

    #[test]
    fn test_find_by_id_delegates() {
        let repo = Arc::new(RecordingRepository::with_fixture(vec![Product::with_id(
            "id-1", "Mouse", 1,
        )]));
        let service = service_with(repo.clone());

        assert_eq!(service.find_by_id("id-1").unwrap().product_id, "id-1");
        assert!(service.find_by_id("missing").is_none());
        assert_eq!(
            repo.calls(),
            vec!["find_by_id:id-1", "find_by_id:missing"]
        );
    }

    #[test]
    fn test_edit_forwards_store_result() {
        let repo = Arc::new(RecordingRepository::with_fixture(vec![Product::with_id(
            "id-1", "Mouse", 1,
        )]));
        let service = service_with(repo.clone());

        let edited = service.edit(Product::with_id("id-1", "Mouse", 2)).unwrap();
        assert_eq!(edited.product_id, "id-1");
        assert!(service.edit(Product::with_id("missing", "x", 0)).is_none());
        assert_eq!(repo.calls(), vec!["edit:id-1", "edit:missing"]);
    }

    #[test]
    fn test_delete_delegates() {
        let repo = Arc::new(RecordingRepository::default());
        let service = service_with(repo.clone());

        service.delete("id-1");
        assert_eq!(repo.calls(), vec!["delete_by_id:id-1"]);
    }
}
