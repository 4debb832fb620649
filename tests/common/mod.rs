#![allow(dead_code)]

use async_trait::async_trait;
use products_api::model::{NewCategory, NewProduct, NewSupplier};
use products_api::{
    build_app, AppConfig, AppError, AppState, Category, CategoryRepository, Product, ProductRepository,
    ProductSupplier, Store, Supplier, SupplierRepository,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Tables {
    next_id: i32,
    products: BTreeMap<i32, Product>,
    categories: BTreeMap<i32, Category>,
    suppliers: BTreeMap<i32, Supplier>,
    links: BTreeSet<(i32, i32)>,
}

impl Tables {
    fn next(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
struct Shared {
    tables: Arc<Mutex<Tables>>,
    down: Arc<AtomicBool>,
}

impl Shared {
    fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T, AppError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        let mut guard = self.tables.lock().unwrap();
        Ok(f(&mut guard))
    }
}

struct MemProducts(Shared);
struct MemCategories(Shared);
struct MemSuppliers(Shared);

/// In-memory store with the same observable behavior as the PostgreSQL one.
pub struct MemoryStore {
    shared: Shared,
    products: MemProducts,
    categories: MemCategories,
    suppliers: MemSuppliers,
}

impl MemoryStore {
    pub fn new() -> Self {
        let shared = Shared::default();
        MemoryStore {
            products: MemProducts(shared.clone()),
            categories: MemCategories(shared.clone()),
            suppliers: MemSuppliers(shared.clone()),
            shared,
        }
    }

    /// Make every call fail like an unreachable database.
    pub fn set_down(&self, down: bool) {
        self.shared.down.store(down, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductRepository for MemProducts {
    async fn create(&self, p: &NewProduct) -> Result<Product, AppError> {
        self.0.with(|t| {
            let product = Product {
                product_id: t.next(),
                product_name: p.product_name.clone(),
                price: p.price,
                description: p.description.clone(),
                stock_level: p.stock_level,
                category_id: p.category_id,
            };
            t.products.insert(product.product_id, product.clone());
            product
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        self.0.with(|t| t.products.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        self.0.with(|t| t.products.values().cloned().collect())
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Product>, AppError> {
        self.0.with(|t| {
            t.products
                .values()
                .filter(|p| p.category_id == Some(category_id))
                .cloned()
                .collect()
        })
    }

    async fn list_with_first_supplier(&self) -> Result<Vec<ProductSupplier>, AppError> {
        self.0.with(|t| {
            t.products
                .values()
                .map(|p| {
                    let first = t
                        .links
                        .iter()
                        .filter(|(pid, _)| *pid == p.product_id)
                        .filter_map(|(_, sid)| t.suppliers.get(sid))
                        .min_by_key(|s| s.supplier_id);
                    ProductSupplier {
                        product_id: p.product_id,
                        product_name: p.product_name.clone(),
                        supplier_name: first.map(|s| s.supplier_name.clone()).unwrap_or_default(),
                        supplier_address: first.map(|s| s.address.clone()).unwrap_or_default(),
                        price: p.price,
                    }
                })
                .collect()
        })
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError> {
        self.0.with(|t| {
            let slot = t.products.get_mut(&product.product_id)?;
            *slot = product.clone();
            Some(product.clone())
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.0.with(|t| {
            t.links.retain(|(pid, _)| *pid != id);
            t.products.remove(&id).is_some()
        })
    }
}

#[async_trait]
impl CategoryRepository for MemCategories {
    async fn create(&self, c: &NewCategory) -> Result<Category, AppError> {
        self.0.with(|t| {
            let category = Category {
                category_id: t.next(),
                category_name: c.category_name.clone(),
            };
            t.categories.insert(category.category_id, category.clone());
            category
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        self.0.with(|t| t.categories.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.0.with(|t| t.categories.values().cloned().collect())
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>, AppError> {
        self.0.with(|t| {
            let slot = t.categories.get_mut(&category.category_id)?;
            *slot = category.clone();
            Some(category.clone())
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.0.with(|t| t.categories.remove(&id).is_some())
    }
}

#[async_trait]
impl SupplierRepository for MemSuppliers {
    async fn create(&self, s: &NewSupplier) -> Result<Supplier, AppError> {
        self.0.with(|t| {
            let supplier = Supplier {
                supplier_id: t.next(),
                supplier_name: s.supplier_name.clone(),
                address: s.address.clone(),
            };
            t.suppliers.insert(supplier.supplier_id, supplier.clone());
            supplier
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>, AppError> {
        self.0.with(|t| t.suppliers.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        self.0.with(|t| t.suppliers.values().cloned().collect())
    }

    async fn update(&self, supplier: &Supplier) -> Result<Option<Supplier>, AppError> {
        self.0.with(|t| {
            let slot = t.suppliers.get_mut(&supplier.supplier_id)?;
            *slot = supplier.clone();
            Some(supplier.clone())
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.0.with(|t| {
            t.links.retain(|(_, sid)| *sid != id);
            t.suppliers.remove(&id).is_some()
        })
    }

    async fn link_product(&self, product_id: i32, supplier_id: i32) -> Result<(), AppError> {
        self.0.with(|t| {
            t.links.insert((product_id, supplier_id));
        })
    }

    async fn list_for_product(&self, product_id: i32) -> Result<Vec<Supplier>, AppError> {
        self.0.with(|t| {
            t.links
                .iter()
                .filter(|(pid, _)| *pid == product_id)
                .filter_map(|(_, sid)| t.suppliers.get(sid).cloned())
                .collect()
        })
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn suppliers(&self) -> &dyn SupplierRepository {
        &self.suppliers
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.shared.with(|_| ())
    }
}

pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        Self::spawn_with(AppConfig::default()).await
    }

    /// Same router as production over an in-memory store, on an ephemeral port.
    pub async fn spawn_with(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(config, store.clone());
        let app = build_app(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, store, handle }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
