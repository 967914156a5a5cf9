//! Port interfaces for the application layer
//! 应用层端口接口
//!
//! Ports define the contract between the view models and the
//! infrastructure implementations (HTTP adapter, terminal host). View models
//! receive them as `Arc<dyn ...>` through their constructors, never through
//! ambient lookups.
//! 视图模型通过构造函数以 `Arc<dyn ...>` 接收端口，而不是全局查找。

mod clock;
pub mod errors;
mod navigator;
mod notifier;
pub mod product_repository;

pub use clock::ClockPort;
pub use errors::ProductRepositoryError;
pub use navigator::NavigatorPort;
pub use notifier::{Notice, NotifierPort};
pub use product_repository::ProductRepositoryPort;
