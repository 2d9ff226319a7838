use leptos::prelude::*;
use rozgaar_setu_shared::{Job, format_rupees};

use crate::components::icons::{Clock, IndianRupee, MapPin};

/// 招工卡片，提供 `on_apply` 时显示申请按钮
#[component]
pub fn JobCard(
    job: Job,
    #[prop(optional, into)] on_apply: Option<Callback<String>>,
) -> impl IntoView {
    let id = job.id.clone();
    let is_urgent = job.is_urgent;

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4 gap-3">
                <div class="flex items-center gap-2">
                    <h3 class="font-semibold text-lg">{job.title}</h3>
                    <Show when=move || is_urgent>
                        <span class="badge badge-warning">"Urgent"</span>
                    </Show>
                </div>

                <div class="flex items-center gap-4 text-base-content/70">
                    <div class="flex items-center gap-1">
                        <MapPin attr:class="w-4 h-4" />
                        <span>{job.location}</span>
                    </div>
                    {job.distance.map(|d| view! { <span class="text-primary font-medium">{d}</span> })}
                </div>

                <div class="flex items-center gap-4">
                    <div class="flex items-center gap-1 font-semibold text-primary">
                        <IndianRupee attr:class="w-4 h-4" />
                        <span>{format_rupees(job.wage)}</span>
                    </div>
                    <div class="flex items-center gap-1 text-base-content/70">
                        <Clock attr:class="w-4 h-4" />
                        <span>{job.duration}</span>
                    </div>
                </div>

                {on_apply.map(|on_apply| {
                    view! {
                        <button class="btn btn-accent w-full" on:click=move |_| on_apply.run(id.clone())>
                            "Apply Now"
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
