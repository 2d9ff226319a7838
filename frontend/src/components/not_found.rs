use leptos::prelude::*;

use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 未找到页面
///
/// "Return to Home" 回到当前身份的首页，没有身份时回到首页。
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();
    let session = use_session();

    if let Some(window) = web_sys::window() {
        let path = window.location().pathname().unwrap_or_default();
        log::warn!("[Router] No page for {}", path);
    }

    let go_home = move |_| router.navigate_to(AppRoute::home_for(session.role()));

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <p class="text-xl text-base-content/70 mb-4">"Oops! Page not found"</p>
                <button class="btn btn-link" on:click=go_home>"Return to Home"</button>
            </div>
        </div>
    }
}
