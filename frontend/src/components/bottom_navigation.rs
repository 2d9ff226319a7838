use leptos::prelude::*;
use rozgaar_setu_shared::UserRole;

use crate::components::icons::{Briefcase, House, Search, User};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

#[derive(Clone, Copy, PartialEq, Eq)]
enum NavIcon {
    Home,
    Search,
    Jobs,
    Profile,
}

struct NavItem {
    icon: NavIcon,
    label: &'static str,
    route: AppRoute,
}

static WORKER_ITEMS: [NavItem; 4] = [
    NavItem { icon: NavIcon::Home, label: "Home", route: AppRoute::WorkerHome },
    NavItem { icon: NavIcon::Search, label: "Browse", route: AppRoute::WorkerBrowse },
    NavItem { icon: NavIcon::Jobs, label: "My Jobs", route: AppRoute::WorkerJobs },
    NavItem { icon: NavIcon::Profile, label: "Profile", route: AppRoute::WorkerProfile },
];

static CUSTOMER_ITEMS: [NavItem; 4] = [
    NavItem { icon: NavIcon::Home, label: "Home", route: AppRoute::CustomerHome },
    NavItem { icon: NavIcon::Search, label: "Workers", route: AppRoute::CustomerWorkers },
    NavItem { icon: NavIcon::Jobs, label: "My Jobs", route: AppRoute::CustomerJobs },
    NavItem { icon: NavIcon::Profile, label: "Profile", route: AppRoute::CustomerProfile },
];

fn icon_view(icon: NavIcon) -> AnyView {
    match icon {
        NavIcon::Home => view! { <House attr:class="w-6 h-6 mb-1" /> }.into_any(),
        NavIcon::Search => view! { <Search attr:class="w-6 h-6 mb-1" /> }.into_any(),
        NavIcon::Jobs => view! { <Briefcase attr:class="w-6 h-6 mb-1" /> }.into_any(),
        NavIcon::Profile => view! { <User attr:class="w-6 h-6 mb-1" /> }.into_any(),
    }
}

/// 底部导航栏，当前路由对应的项高亮
#[component]
pub fn BottomNavigation(role: UserRole) -> impl IntoView {
    let router = use_router();
    let items = match role {
        UserRole::Worker => &WORKER_ITEMS,
        UserRole::Customer => &CUSTOMER_ITEMS,
    };

    view! {
        <nav class="fixed bottom-0 left-0 right-0 bg-base-100 border-t border-base-300">
            <div class="flex justify-around items-center py-2">
                {items
                    .iter()
                    .map(|item| {
                        let route = item.route;
                        let class = move || {
                            if router.current_route().get() == route {
                                "flex flex-col items-center py-2 px-3 rounded-lg min-w-[64px] text-primary bg-primary/10"
                            } else {
                                "flex flex-col items-center py-2 px-3 rounded-lg min-w-[64px] text-base-content/60 hover:text-primary"
                            }
                        };
                        view! {
                            <Link to=route attr:class=class>
                                {icon_view(item.icon)}
                                <span class="text-xs font-medium">{item.label}</span>
                            </Link>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
