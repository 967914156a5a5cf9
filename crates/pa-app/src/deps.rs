//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for view model construction.
//! 视图模型构造所需的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! **这不是 Builder 模式。**
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use pa_core::ports::{ClockPort, NavigatorPort, NotifierPort, ProductRepositoryPort};

use crate::form::FormViewModel;
use crate::list::ListViewModel;

/// View model dependency grouping
/// 视图模型依赖分组
///
/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
#[derive(Clone)]
pub struct AppDeps {
    pub product_repo: Arc<dyn ProductRepositoryPort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub navigator: Arc<dyn NavigatorPort>,
    pub clock: Arc<dyn ClockPort>,
}

impl AppDeps {
    /// Fresh list state, as created on activation of the list screen.
    pub fn list_view(&self) -> ListViewModel {
        ListViewModel::from_ports(
            self.product_repo.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        )
    }

    /// Fresh form state, as created per navigation to `add` or `edit/:id`.
    pub fn form_view(&self) -> FormViewModel {
        FormViewModel::from_ports(
            self.product_repo.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
            self.clock.clone(),
        )
    }
}
