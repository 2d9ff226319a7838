use leptos::prelude::*;
use leptos::task::spawn_local;
use rozgaar_setu::auth::customer::CredentialRequest;
use rozgaar_setu::{AuthMethod, Back, CustomerAuth, CustomerStep, IdentityGateway};

use super::{AuthHeader, FlowContext, OtpStep, PhoneField};
use crate::components::icons::{Mail, Phone};
use crate::web::route::AppRoute;

#[component]
pub fn CustomerAuthPage() -> impl IntoView {
    let ctx = FlowContext::new();
    let auth = RwSignal::new(CustomerAuth::new());
    let step = Memo::new(move |_| auth.with(|a| a.step().clone()));
    let mode = Memo::new(move |_| auth.with(|a| a.mode()));
    let busy = Signal::derive(move || auth.with(|a| a.is_busy()));

    let on_back = move |_: ()| {
        if auth.try_update(|a| a.back()) == Some(Back::Exit) {
            ctx.router.navigate_to(AppRoute::Landing);
        }
    };

    let submit_credentials = move || {
        let Some(begun) = auth.try_update(|a| a.begin_credentials()) else {
            return;
        };
        let request = match begun {
            Ok(request) => request,
            Err(outcome) => return ctx.apply(outcome),
        };
        spawn_local(async move {
            let identity = ctx.api.identity();
            let result = match &request {
                CredentialRequest::Password { email, password } => {
                    identity.sign_in_with_password(email, password).await
                }
                CredentialRequest::Code(phone) => identity.send_code(phone).await,
            };
            if let Some(outcome) = auth.try_update(|a| a.finish_credentials(request, result)) {
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

    let choose = move |method: AuthMethod| {
        auth.update(|a| {
            a.choose_method(method);
        });
    };

    // =========================================================
    // 步骤视图
    // =========================================================

    let method_step = move || {
        view! {
            <div class="text-center space-y-4">
                <h2 class="text-2xl font-bold">"Choose Login Method"</h2>
                <p class="text-base-content/70">"How would you like to sign in?"</p>
            </div>

            <div class="space-y-4">
                <div
                    class="card bg-base-100 border-2 border-base-300 hover:border-primary cursor-pointer"
                    on:click=move |_| choose(AuthMethod::Email)
                >
                    <div class="card-body flex-row items-center gap-4">
                        <div class="w-12 h-12 bg-primary/10 rounded-full flex items-center justify-center">
                            <Mail attr:class="w-6 h-6 text-primary" />
                        </div>
                        <div>
                            <h3 class="text-lg font-medium">"Email & Password"</h3>
                            <p class="text-base-content/70">"Sign in with your email address"</p>
                        </div>
                    </div>
                </div>

                <div
                    class="card bg-base-100 border-2 border-base-300 hover:border-primary cursor-pointer"
                    on:click=move |_| choose(AuthMethod::Phone)
                >
                    <div class="card-body flex-row items-center gap-4">
                        <div class="w-12 h-12 bg-accent/10 rounded-full flex items-center justify-center">
                            <Phone attr:class="w-6 h-6 text-accent" />
                        </div>
                        <div>
                            <h3 class="text-lg font-medium">"Phone Number"</h3>
                            <p class="text-base-content/70">"Sign in with OTP verification"</p>
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    let email_fields = move || {
        view! {
            <div class="form-control">
                <label class="label" for="email">
                    <span class="label-text">"Email Address"</span>
                </label>
                <input
                    id="email"
                    type="email"
                    placeholder="Enter your email"
                    class="input input-bordered"
                    prop:value=move || auth.with(|a| a.email().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        auth.update(|a| a.set_email(&value));
                    }
                />
            </div>
            <div class="form-control">
                <label class="label" for="password">
                    <span class="label-text">"Password"</span>
                </label>
                <input
                    id="password"
                    type="password"
                    placeholder="Enter your password"
                    class="input input-bordered"
                    prop:value=move || auth.with(|a| a.password().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        auth.update(|a| a.set_password(&value));
                    }
                />
            </div>
        }
    };

    let credentials_step = move |method: AuthMethod| {
        let (hint, submit_label) = match method {
            AuthMethod::Email => ("Enter your email and password", "Continue"),
            AuthMethod::Phone => ("Enter your phone number", "Send OTP"),
        };
        let fields = match method {
            AuthMethod::Email => email_fields().into_any(),
            AuthMethod::Phone => view! {
                <PhoneField
                    value=Signal::derive(move || auth.with(|a| a.phone_input().to_string()))
                    on_input=move |raw: String| auth.update(|a| a.set_phone(&raw))
                />
            }
            .into_any(),
        };

        view! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body gap-6">
                    <div class="text-center space-y-2">
                        <h2 class="text-2xl font-bold">{move || mode.get().heading()}</h2>
                        <p class="text-base-content/70">{hint}</p>
                    </div>

                    {fields}

                    <button
                        class="btn btn-primary btn-lg w-full"
                        disabled=move || !auth.with(|a| a.can_submit_credentials())
                        on:click=move |_| submit_credentials()
                    >
                        {move || if busy.get() {
                            view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any()
                        } else {
                            submit_label.into_any()
                        }}
                    </button>

                    <div class="text-center">
                        <button class="btn btn-ghost" on:click=move |_| auth.update(|a| a.toggle_mode())>
                            {move || mode.get().toggle_label()}
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <AuthHeader
                title=Signal::derive(move || mode.get().page_title().to_string())
                on_back=on_back
            />

            <div class="flex flex-col justify-center items-center p-6 min-h-[calc(100vh-80px)]">
                <div class="w-full max-w-md space-y-8">
                    {move || match step.get() {
                        CustomerStep::Method => method_step().into_any(),
                        CustomerStep::Credentials(method) => credentials_step(method).into_any(),
                        CustomerStep::Otp { phone } => view! {
                            <OtpStep
                                destination=phone.display()
                                value=Signal::derive(move || auth.with(|a| a.otp_input().to_string()))
                                on_input=move |raw: String| auth.update(|a| a.set_otp(&raw))
                                busy=busy
                                can_verify=Signal::derive(move || auth.with(|a| a.can_verify()))
                                on_verify=verify
                            />
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
