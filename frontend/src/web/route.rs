//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

use rozgaar_setu_shared::UserRole;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Landing,
    WorkerAuth,
    CustomerAuth,
    WorkerHome,
    WorkerBrowse,
    CustomerHome,
    CustomerPostJob,

    // --- 有入口但没有页面的路由 ---
    WorkerJobs,
    WorkerProfile,
    WorkerEarnings,
    CustomerWorkers,
    CustomerJobs,
    CustomerProfile,

    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举，忽略末尾的 `/`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Landing,
            "/auth/worker" => Self::WorkerAuth,
            "/auth/customer" => Self::CustomerAuth,
            "/worker" => Self::WorkerHome,
            "/worker/browse" => Self::WorkerBrowse,
            "/worker/jobs" => Self::WorkerJobs,
            "/worker/profile" => Self::WorkerProfile,
            "/worker/earnings" => Self::WorkerEarnings,
            "/customer" => Self::CustomerHome,
            "/customer/post-job" => Self::CustomerPostJob,
            "/customer/workers" => Self::CustomerWorkers,
            "/customer/jobs" => Self::CustomerJobs,
            "/customer/profile" => Self::CustomerProfile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::WorkerAuth => "/auth/worker",
            Self::CustomerAuth => "/auth/customer",
            Self::WorkerHome => "/worker",
            Self::WorkerBrowse => "/worker/browse",
            Self::WorkerJobs => "/worker/jobs",
            Self::WorkerProfile => "/worker/profile",
            Self::WorkerEarnings => "/worker/earnings",
            Self::CustomerHome => "/customer",
            Self::CustomerPostJob => "/customer/post-job",
            Self::CustomerWorkers => "/customer/workers",
            Self::CustomerJobs => "/customer/jobs",
            Self::CustomerProfile => "/customer/profile",
            Self::NotFound => "/404",
        }
    }

    /// 是否有对应的页面，没有页面的路由渲染未找到页面
    pub fn has_page(&self) -> bool {
        !matches!(
            self,
            Self::WorkerJobs
                | Self::WorkerProfile
                | Self::WorkerEarnings
                | Self::CustomerWorkers
                | Self::CustomerJobs
                | Self::CustomerProfile
                | Self::NotFound
        )
    }

    /// 某个身份的首页，没有身份时回到首页
    pub fn home_for(role: Option<UserRole>) -> Self {
        match role {
            Some(UserRole::Worker) => Self::WorkerHome,
            Some(UserRole::Customer) => Self::CustomerHome,
            None => Self::Landing,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppRoute; 13] = [
        AppRoute::Landing,
        AppRoute::WorkerAuth,
        AppRoute::CustomerAuth,
        AppRoute::WorkerHome,
        AppRoute::WorkerBrowse,
        AppRoute::CustomerHome,
        AppRoute::CustomerPostJob,
        AppRoute::WorkerJobs,
        AppRoute::WorkerProfile,
        AppRoute::WorkerEarnings,
        AppRoute::CustomerWorkers,
        AppRoute::CustomerJobs,
        AppRoute::CustomerProfile,
    ];

    #[test]
    fn test_paths_resolve_to_themselves() {
        for route in ALL {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(AppRoute::from_path("/worker/"), AppRoute::WorkerHome);
        assert_eq!(AppRoute::from_path("/customer/post-job/"), AppRoute::CustomerPostJob);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Landing);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/worker/browse/extra"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/Worker"), AppRoute::NotFound);
    }

    #[test]
    fn test_linked_routes_without_page() {
        for path in [
            "/worker/jobs",
            "/worker/profile",
            "/worker/earnings",
            "/customer/workers",
            "/customer/jobs",
            "/customer/profile",
        ] {
            let route = AppRoute::from_path(path);
            assert_ne!(route, AppRoute::NotFound);
            assert!(!route.has_page(), "{} should have no page", path);
        }
        assert!(AppRoute::WorkerBrowse.has_page());
        assert!(!AppRoute::NotFound.has_page());
    }

    #[test]
    fn test_home_for_role() {
        assert_eq!(AppRoute::home_for(Some(UserRole::Worker)), AppRoute::WorkerHome);
        assert_eq!(AppRoute::home_for(Some(UserRole::Customer)), AppRoute::CustomerHome);
        assert_eq!(AppRoute::home_for(None), AppRoute::Landing);
    }
}
