use leptos::prelude::*;
use leptos::task::spawn_local;
use rozgaar_setu::{Back, IdentityGateway, WorkerAuth, WorkerStep};

use super::{AuthHeader, FlowContext, OtpStep, PhoneField};
use crate::components::icons::Phone;
use crate::web::route::AppRoute;

#[component]
pub fn WorkerAuthPage() -> impl IntoView {
    let ctx = FlowContext::new();
    let auth = RwSignal::new(WorkerAuth::new());
    // 只在步骤变化时重新渲染，输入时不重建输入框
    let step = Memo::new(move |_| auth.with(|a| a.step().clone()));
    let busy = Signal::derive(move || auth.with(|a| a.is_busy()));

    let on_back = move |_: ()| {
        if auth.try_update(|a| a.back()) == Some(Back::Exit) {
            ctx.router.navigate_to(AppRoute::Landing);
        }
    };

    let send_code = move || {
        let Some(begun) = auth.try_update(|a| a.begin_send()) else {
            return;
        };
        let phone = match begun {
            Ok(phone) => phone,
            Err(outcome) => return ctx.apply(outcome),
        };
        spawn_local(async move {
            let result = ctx.api.identity().send_code(&phone).await;
            if let Some(outcome) = auth.try_update(|a| a.finish_send(phone, result)) {
                ctx.apply(outcome);
            }
        });
    };

    let verify = move |_: ()| {
        let Some(begun) = auth.try_update(|a| a.begin_verify()) else {
            return;
        };
        let (phone, code) = match begun {
            Ok(pair) => pair,
            Err(outcome) => return ctx.apply(outcome),
        };
        spawn_local(async move {
            let result = ctx.api.identity().verify_code(&phone, &code).await;
            if let Some(outcome) = auth.try_update(|a| a.finish_verify(result)) {
                ctx.apply(outcome);
            }
        });
    };

    let phone_step = move || {
        view! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body gap-6">
                    <div class="text-center space-y-2">
                        <h2 class="text-2xl font-bold">"Enter Your Phone Number"</h2>
                        <p class="text-base-content/70">"We'll send you a verification code to sign in"</p>
                    </div>

                    <PhoneField
                        value=Signal::derive(move || auth.with(|a| a.phone_input().to_string()))
                        on_input=move |raw: String| auth.update(|a| a.set_phone(&raw))
                    />

                    <button
                        class="btn btn-primary btn-lg w-full"
                        disabled=move || !auth.with(|a| a.can_send_code())
                        on:click=move |_| send_code()
                    >
                        {move || if busy.get() {
                            view! { <span class="loading loading-spinner"></span> "Sending..." }.into_any()
                        } else {
                            "Send OTP".into_any()
                        }}
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <AuthHeader title="Worker Login".to_string() on_back=on_back />

            <div class="flex flex-col justify-center items-center p-6 min-h-[calc(100vh-80px)]">
                <div class="w-full max-w-md space-y-8">
                    <div class="text-center">
                        <div class="mx-auto w-16 h-16 bg-accent/10 rounded-full flex items-center justify-center">
                            <Phone attr:class="w-8 h-8 text-accent" />
                        </div>
                    </div>

                    {move || match step.get() {
                        WorkerStep::Phone => phone_step().into_any(),
                        WorkerStep::Otp { phone } => view! {
                            <OtpStep
                                destination=phone.display()
                                value=Signal::derive(move || auth.with(|a| a.otp_input().to_string()))
                                on_input=move |raw: String| auth.update(|a| a.set_otp(&raw))
                                busy=busy
                                can_verify=Signal::derive(move || auth.with(|a| a.can_verify()))
                                on_verify=verify
                            >
                                <button class="btn btn-ghost btn-lg w-full" on:click=move |_| on_back(())>
                                    "Change Phone Number"
                                </button>
                            </OtpStep>
                        }
                        .into_any(),
                    }}

                    <p class="text-center text-base-content/70">
                        "By continuing, you agree to our Terms & Privacy Policy"
                    </p>
                </div>
            </div>
        </div>
    }
}
