//! 找活页面
//!
//! 工种筛选和搜索词都只在内存中生效，每次输入重新筛选示例数据。

use leptos::prelude::*;
use rozgaar_setu::TradeFilter;
use rozgaar_setu::browse::{EMPTY_LABEL, application_notice, count_label, filter_jobs};
use rozgaar_setu_shared::UserRole;
use rozgaar_setu_shared::catalog::sample_jobs;

use crate::components::bottom_navigation::BottomNavigation;
use crate::components::icons::{Filter, MapPin, Search};
use crate::components::job_card::JobCard;
use crate::components::toast::use_toast;

#[component]
pub fn BrowseJobsPage() -> impl IntoView {
    let toast = use_toast();
    let jobs = StoredValue::new(sample_jobs());
    let search = RwSignal::new(String::new());
    let filter = RwSignal::new(TradeFilter::default());

    let visible = Memo::new(move |_| {
        let search = search.get();
        let filter = filter.get();
        jobs.with_value(|jobs| {
            filter_jobs(jobs, filter, &search)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let on_apply = Callback::new(move |id: String| {
        log::debug!("[Browse] Apply {}", id);
        toast.notify(application_notice());
    });

    view! {
        <div class="min-h-screen bg-base-200 pb-20">
            <header class="p-4 bg-base-100 border-b border-base-300 space-y-4">
                <h1 class="text-2xl font-bold">"Find Jobs"</h1>

                <div class="flex gap-2">
                    <label class="input input-bordered flex items-center gap-2 flex-1">
                        <Search attr:class="w-4 h-4 text-base-content/50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Search jobs or location..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn-outline btn-square">
                        <Filter attr:class="w-4 h-4" />
                    </button>
                </div>

                <div class="flex gap-2 overflow-x-auto pb-2">
                    {TradeFilter::ALL
                        .into_iter()
                        .map(|trade| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == trade {
                                            "btn btn-sm btn-primary whitespace-nowrap"
                                        } else {
                                            "btn btn-sm btn-outline whitespace-nowrap"
                                        }
                                    }
                                    on:click=move |_| filter.set(trade)
                                >
                                    {trade.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>

            <section class="p-4">
                <div class="card bg-primary/5 border border-primary/20">
                    <div class="card-body p-4 flex-row items-center gap-2">
                        <MapPin attr:class="w-5 h-5 text-primary" />
                        <div>
                            <p class="font-medium">"Jobs near you"</p>
                            <p class="text-sm text-base-content/70">"Gurgaon, Haryana"</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="px-4 space-y-4">
                <h2 class="text-lg font-semibold">{move || count_label(visible.with(Vec::len))}</h2>

                <Show
                    when=move || visible.with(|jobs| !jobs.is_empty())
                    fallback=|| {
                        view! {
                            <div class="text-center py-12 space-y-2">
                                <Search attr:class="w-12 h-12 mx-auto text-base-content/30" />
                                <h3 class="text-lg font-medium">{EMPTY_LABEL}</h3>
                                <p class="text-base-content/70">"Try adjusting your search or filters"</p>
                            </div>
                        }
                    }
                >
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|job| view! { <JobCard job=job on_apply=on_apply /> })
                            .collect_view()
                    }}
                </Show>
            </section>

            <BottomNavigation role=UserRole::Worker />
        </div>
    }
}
