//! 发布招工页面

use leptos::prelude::*;
use leptos::task::spawn_local;
use rozgaar_setu::post_job::success_notice;
use rozgaar_setu::{JobBoard, JobField, Outcome, PostJobForm};
use rozgaar_setu_shared::{JobCategory, Urgency, UserRole};

use crate::api::use_api;
use crate::components::bottom_navigation::BottomNavigation;
use crate::components::icons::{ArrowLeft, Calendar};
use crate::components::toast::use_toast;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 绑定到表单字段的输入框
#[component]
fn FormInput(
    form: RwSignal<PostJobForm>,
    field: JobField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type
                placeholder=placeholder
                class="input input-bordered"
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set(field, &value));
                }
            />
        </div>
    }
}

#[component]
pub fn PostJobPage() -> impl IntoView {
    let api = use_api();
    let toast = use_toast();
    let router = use_router();
    let form = RwSignal::new(PostJobForm::new());
    let busy = Signal::derive(move || form.with(|f| f.is_busy()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(begun) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let posting = match begun {
            Ok(posting) => posting,
            Err(outcome) => {
                if let Some(notice) = outcome.notice() {
                    toast.notify(notice.clone());
                }
                return;
            }
        };
        spawn_local(async move {
            let result = api.job_board().publish(posting).await;
            let Some(outcome) = form.try_update(|f| f.finish_submit(result)) else {
                return;
            };
            match outcome {
                Outcome::Completed(_) => {
                    toast.notify(success_notice());
                    router.navigate_to(AppRoute::CustomerJobs);
                }
                other => {
                    if let Some(notice) = other.notice() {
                        toast.notify(notice.clone());
                    }
                }
            }
        });
    };

    let category_button = move |category: JobCategory| {
        view! {
            <button
                type="button"
                class=move || {
                    if form.with(|f| f.category == Some(category)) {
                        "btn btn-primary"
                    } else {
                        "btn btn-outline"
                    }
                }
                on:click=move |_| form.update(|f| f.set_category(category))
            >
                {category.label()}
            </button>
        }
    };

    let urgency_button = move |urgency: Urgency, label: &'static str, active: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if form.with(|f| f.urgency == urgency) {
                        format!("btn flex-1 {}", active)
                    } else {
                        "btn btn-outline flex-1".to_string()
                    }
                }
                on:click=move |_| form.update(|f| f.set_urgency(urgency))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 pb-20">
            <header class="p-4 flex items-center gap-4 bg-base-100 border-b border-base-300">
                <button
                    class="btn btn-ghost btn-square"
                    on:click=move |_| router.navigate_to(AppRoute::CustomerHome)
                >
                    <ArrowLeft attr:class="w-5 h-5" />
                </button>
                <h1 class="text-lg font-semibold">"Post a Job"</h1>
            </header>

            <form class="p-4 space-y-6" on:submit=submit>
                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body gap-4">
                        <h2 class="card-title">"Job Details"</h2>

                        <FormInput
                            form=form
                            field=JobField::Title
                            label="Job Title"
                            placeholder="e.g. Fix kitchen sink leak"
                        />

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Category"</span>
                            </label>
                            <div class="grid grid-cols-2 gap-2">
                                {JobCategory::ALL.into_iter().map(category_button).collect_view()}
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Description"</span>
                            </label>
                            <textarea
                                class="textarea textarea-bordered min-h-24"
                                placeholder="Describe the work in detail..."
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set(JobField::Description, &value));
                                }
                            ></textarea>
                        </div>

                        <FormInput
                            form=form
                            field=JobField::Location
                            label="Location"
                            placeholder="Enter job location"
                        />
                    </div>
                </div>

                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body gap-4">
                        <h2 class="card-title">"Budget & Timing"</h2>

                        <div class="grid grid-cols-2 gap-4">
                            <FormInput
                                form=form
                                field=JobField::Budget
                                label="Budget (₹)"
                                placeholder="1500"
                                input_type="number"
                            />
                            <FormInput
                                form=form
                                field=JobField::Duration
                                label="Duration"
                                placeholder="e.g. 1 day"
                            />
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Preferred Date"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <Calendar attr:class="w-4 h-4 text-base-content/50" />
                                <input
                                    type="date"
                                    class="grow"
                                    prop:value=move || form.with(|f| f.date.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.set(JobField::Date, &value));
                                    }
                                />
                            </label>
                        </div>

                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Urgency"</span>
                            </label>
                            <div class="flex gap-2">
                                {urgency_button(Urgency::Normal, "Normal", "btn-primary")}
                                {urgency_button(Urgency::Urgent, "Urgent", "btn-warning")}
                            </div>
                        </div>
                    </div>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary btn-lg w-full"
                    disabled=move || !form.with(|f| f.can_submit())
                >
                    {move || if busy.get() {
                        view! { <span class="loading loading-spinner"></span> "Posting Job..." }.into_any()
                    } else {
                        "Post Job".into_any()
                    }}
                </button>
            </form>

            <BottomNavigation role=UserRole::Customer />
        </div>
    }
}
