use leptos::prelude::*;
use rozgaar_setu_shared::catalog::{LANGUAGES, Language};

use crate::components::icons::Globe;

/// 语言选择
///
/// 点击语言即选中并回调；"Continue" 在选中前禁用。
#[component]
pub fn LanguageSelector(
    #[prop(into)] on_select: Callback<Language>,
    #[prop(into)] on_skip: Callback<()>,
) -> impl IntoView {
    let (selected, set_selected) = signal(Option::<Language>::None);

    let choose = move |language: Language| {
        set_selected.set(Some(language));
        on_select.run(language);
    };

    view! {
        <div class="min-h-screen bg-base-100 flex flex-col justify-center items-center p-6">
            <div class="w-full max-w-md space-y-8">
                <div class="text-center space-y-4">
                    <div class="mx-auto w-16 h-16 bg-primary rounded-full flex items-center justify-center">
                        <Globe attr:class="w-8 h-8 text-primary-content" />
                    </div>
                    <h1 class="text-2xl font-bold">"Choose Your Language"</h1>
                    <p class="text-base-content/70">"Select your preferred language to continue"</p>
                </div>

                <div class="space-y-4">
                    {LANGUAGES
                        .into_iter()
                        .map(|language| {
                            let class = move || {
                                if selected.get().map(|l| l.code) == Some(language.code) {
                                    "card border-2 border-primary bg-primary/5 cursor-pointer"
                                } else {
                                    "card border-2 border-base-300 hover:border-primary/50 cursor-pointer"
                                }
                            };
                            view! {
                                <div class=class on:click=move |_| choose(language)>
                                    <div class="card-body p-4 flex-row items-center gap-4">
                                        <span class="text-2xl">{language.flag}</span>
                                        <div class="flex-1">
                                            <div class="text-lg font-medium">{language.native}</div>
                                            <div class="text-base-content/70">{language.name}</div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="space-y-4">
                    <button
                        class="btn btn-primary btn-lg w-full"
                        disabled=move || selected.get().is_none()
                        on:click=move |_| {
                            if let Some(language) = selected.get() {
                                on_select.run(language);
                            }
                        }
                    >
                        "Continue"
                    </button>
                    <button class="btn btn-ghost btn-lg w-full" on:click=move |_| on_skip.run(())>
                        "Skip for now"
                    </button>
                </div>
            </div>
        </div>
    }
}
