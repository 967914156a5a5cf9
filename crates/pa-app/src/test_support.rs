//! Mock ports and fixtures shared by the view model tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use pa_core::ports::{ClockPort, NavigatorPort, Notice, NotifierPort, ProductRepositoryError, ProductRepositoryPort};
use pa_core::{Product, ProductId, ProductUpdate, Route};

mock! {
    pub Repo {}

    #[async_trait]
    impl ProductRepositoryPort for Repo {
        async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError>;
        async fn exists(&self, id: &ProductId) -> Result<bool, ProductRepositoryError>;
        async fn create(&self, product: &Product) -> Result<(), ProductRepositoryError>;
        async fn update(
            &self,
            id: &ProductId,
            update: &ProductUpdate,
        ) -> Result<(), ProductRepositoryError>;
        async fn delete(&self, id: &ProductId) -> Result<(), ProductRepositoryError>;
    }
}

/// Records every notice instead of showing it.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Records every navigation request.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub struct FixedClock(pub NaiveDate);

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn product(id: &str, name: &str, description: &str) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        logo: format!("https://cdn.example.com/{id}.png"),
        date_release: date(2030, 3, 15),
        date_revision: date(2031, 3, 15),
    }
}

/// `count` products with ids `p01`, `p02`, ...
pub fn catalog(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|n| {
            product(
                &format!("p{n:02}"),
                &format!("Product {n}"),
                &format!("Description of product {n}"),
            )
        })
        .collect()
}

pub fn failure() -> ProductRepositoryError {
    ProductRepositoryError::UnexpectedStatus(500)
}
