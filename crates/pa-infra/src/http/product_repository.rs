use std::time::Duration;

use async_trait::async_trait;
use pa_core::ports::{ProductRepositoryError, ProductRepositoryPort};
use pa_core::{Product, ProductId, ProductUpdate};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

type RepoResult<T> = std::result::Result<T, ProductRepositoryError>;

#[derive(Debug, Clone)]
pub struct HttpRepositoryConfig {
    /// API root; `products` is appended to it.
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Product>,
}

/// `ProductRepositoryPort` over the catalog's REST API.
pub struct HttpProductRepository {
    client: Client,
    base: Url,
}

impl HttpProductRepository {
    pub fn new(config: HttpRepositoryConfig) -> RepoResult<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ProductRepositoryError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ProductRepositoryError::InvalidBaseUrl(config.base_url));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProductRepositoryError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    /// `{base}/products/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> RepoResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ProductRepositoryError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .push("products")
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, op: &'static str, request: RequestBuilder) -> RepoResult<Response> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        debug!(op, status = status.as_u16(), "Catalog API responded");
        if status.is_success() {
            Ok(response)
        } else {
            Err(map_status(status))
        }
    }
}

#[async_trait]
impl ProductRepositoryPort for HttpProductRepository {
    async fn list(&self) -> RepoResult<Vec<Product>> {
        let url = self.endpoint(&[])?;
        let result: RepoResult<Vec<Product>> = async {
            let response = self.send("list", self.client.get(url)).await?;
            let envelope: ListEnvelope = response.json().await.map_err(map_reqwest_error)?;
            Ok(envelope.data)
        }
        .await;

        result.inspect_err(|err| warn!(error = %err, "Failed to list products"))
    }

    async fn exists(&self, id: &ProductId) -> RepoResult<bool> {
        let url = self.endpoint(&["verification", id.as_str()])?;
        let result: RepoResult<bool> = async {
            let response = self.send("exists", self.client.get(url)).await?;
            response.json::<bool>().await.map_err(map_reqwest_error)
        }
        .await;

        result.inspect_err(|err| warn!(%id, error = %err, "Failed to verify product id"))
    }

    async fn create(&self, product: &Product) -> RepoResult<()> {
        let url = self.endpoint(&[])?;
        self.send("create", self.client.post(url).json(product))
            .await
            .map(drop)
            .inspect_err(|err| warn!(id = %product.id, error = %err, "Failed to create product"))
    }

    async fn update(&self, id: &ProductId, update: &ProductUpdate) -> RepoResult<()> {
        let url = self.endpoint(&[id.as_str()])?;
        self.send("update", self.client.put(url).json(update))
            .await
            .map(drop)
            .inspect_err(|err| warn!(%id, error = %err, "Failed to update product"))
    }

    async fn delete(&self, id: &ProductId) -> RepoResult<()> {
        let url = self.endpoint(&[id.as_str()])?;
        self.send("delete", self.client.delete(url))
            .await
            .map(drop)
            .inspect_err(|err| warn!(%id, error = %err, "Failed to delete product"))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> ProductRepositoryError {
    if error.is_timeout() {
        ProductRepositoryError::Timeout
    } else if error.is_decode() {
        ProductRepositoryError::Decode(error.to_string())
    } else if let Some(status) = error.status() {
        map_status(status)
    } else {
        ProductRepositoryError::Transport(error.to_string())
    }
}

fn map_status(code: StatusCode) -> ProductRepositoryError {
    match code {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ProductRepositoryError::Timeout,
        _ => ProductRepositoryError::UnexpectedStatus(code.as_u16()),
    }
}
