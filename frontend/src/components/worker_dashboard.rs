use leptos::prelude::*;
use rozgaar_setu_shared::UserRole;
use rozgaar_setu_shared::catalog::{worker_activity, worker_stats};

use crate::components::bottom_navigation::BottomNavigation;
use crate::components::dashboard::{DashboardHeader, QuickAction, RecentActivity, StatGrid};
use crate::components::icons::{Briefcase, IndianRupee, Search};
use crate::web::route::AppRoute;

#[component]
pub fn WorkerDashboardPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 pb-20">
            <DashboardHeader subtitle="Ready to find your next job?" />
            <StatGrid stats=worker_stats() />

            <section class="p-4">
                <h2 class="text-lg font-semibold mb-4">"Quick Actions"</h2>
                <div class="space-y-3">
                    <QuickAction label="Browse Jobs" description="Find new opportunities" to=AppRoute::WorkerBrowse>
                        <Search attr:class="w-6 h-6" />
                    </QuickAction>
                    <QuickAction
                        label="My Jobs"
                        description="View your applications"
                        to=AppRoute::WorkerJobs
                        icon_class="bg-accent/10 text-accent"
                    >
                        <Briefcase attr:class="w-6 h-6" />
                    </QuickAction>
                    <QuickAction
                        label="Earnings"
                        description="Track your income"
                        to=AppRoute::WorkerEarnings
                        icon_class="bg-warning/10 text-warning"
                    >
                        <IndianRupee attr:class="w-6 h-6" />
                    </QuickAction>
                </div>
            </section>

            <RecentActivity items=worker_activity() />
            <BottomNavigation role=UserRole::Worker />
        </div>
    }
}
