//! 登录页面
//!
//! 流程状态保存在 `RwSignal<WorkerAuth>` / `RwSignal<CustomerAuth>` 中。
//! 提交时先 `begin_*` 取出请求并释放借用，在 `spawn_local` 中等待模拟服务，
//! 再用 `try_update` 调用 `finish_*`；页面已卸载时结果被丢弃。

pub mod customer;
pub mod worker;

use leptos::prelude::*;
use rozgaar_setu::Outcome;
use rozgaar_setu_shared::{DIAL_CODE, UserRole};

use crate::api::{RozgaarApi, use_api};
use crate::components::icons::ArrowLeft;
use crate::components::toast::{ToastContext, use_toast};
use crate::session::{SessionContext, use_session};
use crate::web::route::AppRoute;
use crate::web::router::{RouterService, use_router};

/// 登录页面用到的上下文
#[derive(Clone, Copy)]
pub(crate) struct FlowContext {
    pub api: RozgaarApi,
    pub toast: ToastContext,
    pub session: SessionContext,
    pub router: RouterService,
}

impl FlowContext {
    pub fn new() -> Self {
        Self {
            api: use_api(),
            toast: use_toast(),
            session: use_session(),
            router: use_router(),
        }
    }

    /// 展示提示；流程结束时记住身份并进入对应首页
    ///
    /// 身份写入失败时提示错误，但仍然进入首页。
    pub fn apply(&self, outcome: Outcome<UserRole>) {
        if let Some(notice) = outcome.notice() {
            self.toast.notify(notice.clone());
        }
        if let Outcome::Completed(role) = outcome {
            if let Err(e) = self.session.remember(role) {
                self.toast.notify(e.to_notice());
            }
            self.router.navigate_to(AppRoute::home_for(Some(role)));
        }
    }
}

/// 带 +91 前缀的手机号输入框
#[component]
pub(crate) fn PhoneField(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for="phone">
                <span class="label-text">"Phone Number"</span>
            </label>
            <div class="join w-full">
                <span class="join-item btn btn-disabled no-animation">{DIAL_CODE}</span>
                <input
                    id="phone"
                    type="tel"
                    inputmode="numeric"
                    placeholder="Enter 10-digit number"
                    maxlength="10"
                    class="input input-bordered join-item w-full text-lg"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// 验证码步骤
#[component]
pub(crate) fn OtpStep(
    /// 显示用的号码，如 "+91 9876543210"
    destination: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] can_verify: Signal<bool>,
    #[prop(into)] on_verify: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body gap-6">
                <div class="text-center space-y-2">
                    <h2 class="text-2xl font-bold">"Enter Verification Code"</h2>
                    <p class="text-base-content/70">{format!("We sent a 6-digit code to {}", destination)}</p>
                </div>

                <div class="form-control">
                    <label class="label" for="otp">
                        <span class="label-text">"Verification Code"</span>
                    </label>
                    <input
                        id="otp"
                        type="text"
                        inputmode="numeric"
                        placeholder="Enter 6-digit code"
                        maxlength="6"
                        class="input input-bordered text-center text-lg tracking-widest"
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                </div>

                <button
                    class="btn btn-primary btn-lg w-full"
                    disabled=move || !can_verify.get()
                    on:click=move |_| on_verify.run(())
                >
                    {move || if busy.get() {
                        view! { <span class="loading loading-spinner"></span> "Verifying..." }.into_any()
                    } else {
                        "Verify & Continue".into_any()
                    }}
                </button>

                {children.map(|children| children())}
            </div>
        </div>
    }
}

/// 页面顶部的返回栏
#[component]
pub(crate) fn AuthHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="p-4 flex items-center gap-4 border-b border-base-300">
            <button class="btn btn-ghost btn-square" on:click=move |_| on_back.run(())>
                <ArrowLeft attr:class="w-5 h-5" />
            </button>
            <h1 class="text-lg font-semibold">{move || title.get()}</h1>
        </header>
    }
}
