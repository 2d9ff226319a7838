use leptos::prelude::*;
use rozgaar_setu_shared::catalog::Language;

use crate::components::icons::{Briefcase, Shield, Users};
use crate::components::language_selector::LanguageSelector;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
fn FeatureCard(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4 items-center text-center gap-3">
                <div class="w-12 h-12 bg-primary/10 rounded-full flex items-center justify-center text-primary">
                    {children()}
                </div>
                <h3 class="text-lg font-medium">{title}</h3>
                <p class="text-base-content/70">{description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let router = use_router();
    let (show_languages, set_show_languages) = signal(false);
    // 只保存在内存中，不影响界面文字
    let (language, set_language) = signal(Option::<Language>::None);

    let on_select = move |chosen: Language| {
        log::info!("[Landing] Language selected: {}", chosen.code);
        set_language.set(Some(chosen));
        set_show_languages.set(false);
    };
    let on_skip = move |_: ()| set_show_languages.set(false);

    view! {
        <Show
            when=move || !show_languages.get()
            fallback=move || view! { <LanguageSelector on_select=on_select on_skip=on_skip /> }
        >
            <div class="min-h-screen bg-base-100">
                <header class="p-4">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-3">
                            <div class="w-10 h-10 rounded-full bg-primary text-primary-content flex items-center justify-center font-bold">
                                "RS"
                            </div>
                            <h1 class="text-2xl font-bold text-primary">"Rozgaar Setu"</h1>
                        </div>
                        <button class="btn btn-ghost btn-sm" on:click=move |_| set_show_languages.set(true)>
                            {move || language.get().map(|l| l.native).unwrap_or("Language")}
                        </button>
                    </div>
                </header>

                <section class="px-4 py-8 text-center">
                    <div class="max-w-md mx-auto space-y-4">
                        <h2 class="text-2xl font-bold">
                            "Connect with " <span class="text-primary">"Trusted Workers"</span>
                        </h2>
                        <p class="text-base-content/70">
                            "Find verified blue-collar professionals or get hired for jobs in your area"
                        </p>
                    </div>
                </section>

                <section class="px-4 py-8">
                    <div class="max-w-md mx-auto space-y-4">
                        <FeatureCard
                            title="Verified Workers"
                            description="All workers are background verified for your safety and peace of mind"
                        >
                            <Users attr:class="w-6 h-6" />
                        </FeatureCard>
                        <FeatureCard
                            title="Find Work Easily"
                            description="Simple job matching based on your skills and location"
                        >
                            <Briefcase attr:class="w-6 h-6" />
                        </FeatureCard>
                        <FeatureCard
                            title="Secure Payments"
                            description="Safe and transparent payment system for all completed work"
                        >
                            <Shield attr:class="w-6 h-6" />
                        </FeatureCard>
                    </div>
                </section>

                <section class="px-4 py-8">
                    <div class="max-w-md mx-auto space-y-6">
                        <h3 class="text-lg font-medium text-center">"How do you want to use Rozgaar Setu?"</h3>
                        <div class="space-y-4">
                            <div
                                class="card border-2 border-base-300 hover:border-primary cursor-pointer"
                                on:click=move |_| router.navigate_to(AppRoute::WorkerAuth)
                            >
                                <div class="card-body items-center text-center">
                                    <div class="w-16 h-16 bg-accent/10 rounded-full flex items-center justify-center">
                                        <Users attr:class="w-8 h-8 text-accent" />
                                    </div>
                                    <h4 class="text-lg font-semibold">"I'm a Worker"</h4>
                                    <p class="text-base-content/70">"Find jobs in your area and connect with customers"</p>
                                </div>
                            </div>
                            <div
                                class="card border-2 border-base-300 hover:border-primary cursor-pointer"
                                on:click=move |_| router.navigate_to(AppRoute::CustomerAuth)
                            >
                                <div class="card-body items-center text-center">
                                    <div class="w-16 h-16 bg-primary/10 rounded-full flex items-center justify-center">
                                        <Briefcase attr:class="w-8 h-8 text-primary" />
                                    </div>
                                    <h4 class="text-lg font-semibold">"I need Workers"</h4>
                                    <p class="text-base-content/70">"Post jobs and hire verified professionals"</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <footer class="px-4 py-6 text-center">
                    <p class="text-base-content/70">"Join thousands of satisfied users on Rozgaar Setu"</p>
                </footer>
            </div>
        </Show>
    }
}
