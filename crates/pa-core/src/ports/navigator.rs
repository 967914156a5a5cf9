use crate::route::Route;

/// Navigation port.
/// 导航端口。
///
/// Routing is owned by the host; view models only request a destination.
/// 路由由宿主负责，视图模型只请求目标页面。
pub trait NavigatorPort: Send + Sync {
    fn navigate(&self, route: Route);
}
