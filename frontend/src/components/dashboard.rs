//! 首页共用的统计卡片、快捷入口和最近动态

use leptos::prelude::*;
use rozgaar_setu_shared::catalog::{Activity, ActivityKind, Stat, Tone};
use rozgaar_setu_shared::date::format_age;

use crate::components::icons::{CircleCheck, IndianRupee, TrendingUp};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "text-primary",
        Tone::Accent => "text-accent",
        Tone::Warning => "text-warning",
    }
}

#[component]
pub fn DashboardHeader(subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="p-4 bg-base-100 border-b border-base-300">
            <div class="space-y-2">
                <h1 class="text-2xl font-bold">"Welcome back!"</h1>
                <p class="text-base-content/70">{subtitle}</p>
            </div>
        </header>
    }
}

#[component]
pub fn StatGrid(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section class="p-4">
            <div class="grid grid-cols-3 gap-3">
                {stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="card bg-base-100 shadow-sm p-3 text-center">
                                <div class=format!("text-lg font-bold {}", tone_class(stat.tone))>{stat.value}</div>
                                <div class="text-xs text-base-content/70">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// 快捷入口卡片，`highlight` 为主操作样式
#[component]
pub fn QuickAction(
    label: &'static str,
    description: &'static str,
    to: AppRoute,
    #[prop(optional)] highlight: bool,
    /// 图标底色
    #[prop(default = "bg-primary/10 text-primary")]
    icon_class: &'static str,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let (card_class, icon_box, desc_class) = if highlight {
        (
            "card bg-primary text-primary-content cursor-pointer",
            "bg-white/20",
            "text-primary-content/80",
        )
    } else {
        (
            "card bg-base-100 border border-base-300 hover:border-primary cursor-pointer",
            icon_class,
            "text-base-content/70",
        )
    };

    view! {
        <div class=card_class on:click=move |_| router.navigate_to(to)>
            <div class="card-body p-4 flex-row items-center gap-4">
                <div class=format!("w-12 h-12 rounded-lg flex items-center justify-center {}", icon_box)>
                    {children()}
                </div>
                <div class="flex-1">
                    <h3 class="text-lg font-medium">{label}</h3>
                    <p class=desc_class>{description}</p>
                </div>
            </div>
        </div>
    }
}

fn activity_icon(kind: ActivityKind) -> AnyView {
    match kind {
        ActivityKind::Application => view! {
            <div class="w-8 h-8 bg-accent/10 rounded-full flex items-center justify-center">
                <TrendingUp attr:class="w-4 h-4 text-accent" />
            </div>
        }
        .into_any(),
        ActivityKind::Payment => view! {
            <div class="w-8 h-8 bg-primary/10 rounded-full flex items-center justify-center">
                <IndianRupee attr:class="w-4 h-4 text-primary" />
            </div>
        }
        .into_any(),
        ActivityKind::Completed => view! {
            <div class="w-8 h-8 bg-success/10 rounded-full flex items-center justify-center">
                <CircleCheck attr:class="w-4 h-4 text-success" />
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn RecentActivity(items: Vec<Activity>) -> impl IntoView {
    view! {
        <section class="p-4">
            <h2 class="text-lg font-semibold mb-4">"Recent Activity"</h2>
            <div class="card bg-base-100 shadow-sm">
                <div class="card-body p-4 gap-4">
                    {items
                        .into_iter()
                        .map(|activity| {
                            view! {
                                <div class="flex items-center gap-3">
                                    {activity_icon(activity.kind)}
                                    <div class="flex-1">
                                        <p class="font-medium">{activity.title}</p>
                                        <p class="text-sm text-base-content/70">{activity.description}</p>
                                    </div>
                                    <span class="text-sm text-base-content/70">{format_age(activity.age)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
