use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::wire_date;
use crate::ids::ProductId;

/// A financial product as stored by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Logo URL
    pub logo: String,
    #[serde(with = "wire_date")]
    pub date_release: NaiveDate,
    #[serde(with = "wire_date")]
    pub date_revision: NaiveDate,
}

/// Every product field except `id`; body of an update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(with = "wire_date")]
    pub date_release: NaiveDate,
    #[serde(with = "wire_date")]
    pub date_revision: NaiveDate,
}

impl Product {
    /// Split into the immutable id and the updatable remainder.
    pub fn into_update(self) -> (ProductId, ProductUpdate) {
        (
            self.id,
            ProductUpdate {
                name: self.name,
                description: self.description,
                logo: self.logo,
                date_release: self.date_release,
                date_revision: self.date_revision,
            },
        )
    }
}
