use leptos::prelude::*;
use rozgaar_setu_shared::WorkerProfile;

use crate::components::icons::{MapPin, Phone, Star};

/// 工人卡片
///
/// 不可雇佣的工人不显示 "Available" 标记，雇佣按钮禁用。
#[component]
pub fn WorkerCard(
    worker: WorkerProfile,
    #[prop(optional, into)] on_hire: Option<Callback<String>>,
    #[prop(optional, into)] on_call: Option<Callback<String>>,
) -> impl IntoView {
    let available = worker.available;
    let hire_id = worker.id.clone();
    let call_id = worker.id.clone();

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4 gap-4">
                <div class="flex items-start gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content w-12 h-12 rounded-full">
                            <span>{worker.initials()}</span>
                        </div>
                    </div>

                    <div class="flex-1 space-y-2">
                        <div class="flex items-center justify-between">
                            <h3 class="font-semibold text-lg">{worker.name.clone()}</h3>
                            <Show when=move || available>
                                <span class="badge badge-accent">"Available"</span>
                            </Show>
                        </div>
                        <p class="text-primary font-medium">{worker.skill.clone()}</p>
                        <div class="flex items-center gap-4 text-base-content/70">
                            <div class="flex items-center gap-1">
                                <MapPin attr:class="w-4 h-4" />
                                <span>{worker.location.clone()}</span>
                            </div>
                            {worker.distance.clone().map(|d| view! { <span class="text-primary font-medium">{d}</span> })}
                        </div>
                        <div class="flex items-center gap-1">
                            <Star attr:class="w-4 h-4 fill-warning text-warning" />
                            <span class="font-medium">{worker.rating_label()}</span>
                            <span class="text-base-content/70">{format!("({} reviews)", worker.review_count)}</span>
                        </div>
                    </div>
                </div>

                <div class="flex gap-2">
                    {on_call.map(|on_call| {
                        view! {
                            <button class="btn btn-outline flex-1" on:click=move |_| on_call.run(call_id.clone())>
                                <Phone attr:class="w-4 h-4" />
                                "Call"
                            </button>
                        }
                    })}
                    {on_hire.map(|on_hire| {
                        view! {
                            <button class="btn btn-accent flex-1" disabled=!available on:click=move |_| on_hire.run(hire_id.clone())>
                                "Hire Now"
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
