use leptos::prelude::*;
use rozgaar_setu::Notice;
use rozgaar_setu_shared::UserRole;
use rozgaar_setu_shared::catalog::{customer_activity, customer_stats, sample_workers};

use crate::components::bottom_navigation::BottomNavigation;
use crate::components::dashboard::{DashboardHeader, QuickAction, RecentActivity, StatGrid};
use crate::components::icons::{Briefcase, Plus, Users};
use crate::components::toast::use_toast;
use crate::components::worker_card::WorkerCard;
use crate::web::route::AppRoute;

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    let toast = use_toast();
    let workers = sample_workers();

    // 示例数据，雇佣和拨号都只给出提示
    let names = StoredValue::new(
        workers
            .iter()
            .map(|w| (w.id.clone(), w.name.clone()))
            .collect::<Vec<_>>(),
    );
    let name_of = move |id: &str| {
        names.with_value(|names| {
            names
                .iter()
                .find(|(worker_id, _)| worker_id == id)
                .map(|(_, name)| name.clone())
                .unwrap_or_default()
        })
    };
    let on_hire = Callback::new(move |id: String| {
        toast.notify(Notice::success(
            "Hire Request Sent",
            format!("{} will be notified about your request", name_of(&id)),
        ))
    });
    let on_call = Callback::new(move |id: String| {
        toast.notify(Notice::info("Calling", format!("Connecting you to {}", name_of(&id))))
    });

    view! {
        <div class="min-h-screen bg-base-200 pb-20">
            <DashboardHeader subtitle="Manage your jobs and find workers" />
            <StatGrid stats=customer_stats() />

            <section class="p-4">
                <h2 class="text-lg font-semibold mb-4">"Quick Actions"</h2>
                <div class="space-y-3">
                    <QuickAction
                        label="Post New Job"
                        description="Hire workers for your needs"
                        to=AppRoute::CustomerPostJob
                        highlight=true
                    >
                        <Plus attr:class="w-6 h-6" />
                    </QuickAction>
                    <QuickAction
                        label="Browse Workers"
                        description="Find verified professionals"
                        to=AppRoute::CustomerWorkers
                        icon_class="bg-accent/10 text-accent"
                    >
                        <Users attr:class="w-6 h-6" />
                    </QuickAction>
                    <QuickAction
                        label="My Posted Jobs"
                        description="Manage your job posts"
                        to=AppRoute::CustomerJobs
                        icon_class="bg-secondary text-secondary-content"
                    >
                        <Briefcase attr:class="w-6 h-6" />
                    </QuickAction>
                </div>
            </section>

            <RecentActivity items=customer_activity() />

            <section class="p-4">
                <h2 class="text-lg font-semibold mb-4">"Workers near you"</h2>
                <div class="space-y-4">
                    {workers
                        .into_iter()
                        .map(|worker| view! { <WorkerCard worker=worker on_hire=on_hire on_call=on_call /> })
                        .collect_view()}
                </div>
            </section>

            <BottomNavigation role=UserRole::Customer />
        </div>
    }
}
