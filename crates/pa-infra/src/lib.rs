pub mod http;
pub mod time;

pub use http::{HttpProductRepository, HttpRepositoryConfig};
pub use time::SystemClock;
