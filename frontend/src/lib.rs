//! Rozgaar Setu 前端应用
//!
//! 采用 Context-Driven 的结构：
//! - `web::route`: 路由定义
//! - `web::router`: 路由服务
//! - `api` / `session`: 模拟服务与身份上下文
//! - `components`: UI 组件层
//!
//! 流程状态和校验都在 `rozgaar_setu` 中，这里只负责渲染与接线。

mod api;
mod config;
mod session;
mod components {
    pub mod auth;
    pub mod bottom_navigation;
    pub mod browse_jobs;
    pub mod customer_dashboard;
    mod dashboard;
    mod icons;
    pub mod job_card;
    pub mod landing;
    pub mod language_selector;
    pub mod not_found;
    pub mod post_job;
    pub mod toast;
    pub mod worker_card;
    pub mod worker_dashboard;
}

use leptos::prelude::*;

use crate::api::RozgaarApi;
use crate::components::auth::customer::CustomerAuthPage;
use crate::components::auth::worker::WorkerAuthPage;
use crate::components::browse_jobs::BrowseJobsPage;
use crate::components::customer_dashboard::CustomerDashboardPage;
use crate::components::landing::LandingPage;
use crate::components::not_found::NotFoundPage;
use crate::components::post_job::PostJobPage;
use crate::components::toast::{ToastContext, Toaster};
use crate::components::worker_dashboard::WorkerDashboardPage;
use crate::session::SessionContext;

// 浏览器 API 封装
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
    pub use timer::TimerSleep;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 导航栏链接到的页面尚未实现，统一渲染未找到页面。
fn route_matcher(route: AppRoute) -> AnyView {
    if !route.has_page() {
        return view! { <NotFoundPage /> }.into_any();
    }
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::WorkerAuth => view! { <WorkerAuthPage /> }.into_any(),
        AppRoute::CustomerAuth => view! { <CustomerAuthPage /> }.into_any(),
        AppRoute::WorkerHome => view! { <WorkerDashboardPage /> }.into_any(),
        AppRoute::WorkerBrowse => view! { <BrowseJobsPage /> }.into_any(),
        AppRoute::CustomerHome => view! { <CustomerDashboardPage /> }.into_any(),
        AppRoute::CustomerPostJob => view! { <PostJobPage /> }.into_any(),
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 构建时配置决定模拟延迟
    provide_context(RozgaarApi::new(config::load_config()));

    // 2. 提示与身份上下文
    provide_context(ToastContext::new());
    provide_context(SessionContext::new());

    view! {
        <Router>
            <Toaster />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
