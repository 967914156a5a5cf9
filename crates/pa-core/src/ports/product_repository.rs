use crate::{
    ids::ProductId,
    ports::errors::ProductRepositoryError,
    product::{Product, ProductUpdate},
};
use async_trait::async_trait;

/// Remote products catalog port.
/// 远程产品目录的仓储端口。
///
/// 设计约定：
/// - No caching: every call hits the API / 无缓存，每次调用都会请求 API
/// - Callers own the returned data / 返回的数据归调用方所有
#[async_trait]
pub trait ProductRepositoryPort: Send + Sync {
    /// Fetch the full catalog.
    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Whether a product with `id` already exists.
    async fn exists(&self, id: &ProductId) -> Result<bool, ProductRepositoryError>;

    /// Create a new product.
    async fn create(&self, product: &Product) -> Result<(), ProductRepositoryError>;

    /// Replace every field except the id of an existing product.
    async fn update(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> Result<(), ProductRepositoryError>;

    /// Delete a product.
    async fn delete(&self, id: &ProductId) -> Result<(), ProductRepositoryError>;
}
