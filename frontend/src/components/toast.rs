//! 提示组件
//!
//! 同一时间只显示一条提示，新提示替换旧提示，到时自动消失。

use leptos::prelude::*;
use rozgaar_setu::{Notice, NoticeKind};

use crate::api::use_api;

/// 提示上下文
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// 当前提示及其序号
    current: RwSignal<Option<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        if notice.is_error() {
            log::warn!("[Toast] {}: {}", notice.title, notice.description);
        } else {
            log::debug!("[Toast] {}: {}", notice.title, notice.description);
        }
        self.current.set(Some((id, notice)));
    }

    /// 只关闭序号为 `id` 的提示，之后出现的提示不受影响
    fn dismiss(&self, id: u64) {
        self.current.update(|current| {
            if matches!(current, Some((shown, _)) if *shown == id) {
                *current = None;
            }
        });
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

fn alert_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "alert alert-info shadow-lg",
        NoticeKind::Success => "alert alert-success shadow-lg",
        NoticeKind::Error => "alert alert-error shadow-lg",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toast = use_toast();
    let duration = use_api().config.toast_duration;

    Effect::new(move |_| {
        if let Some((id, _)) = toast.current.get() {
            set_timeout(move || toast.dismiss(id), duration);
        }
    });

    move || {
        toast.current.get().map(|(id, notice)| {
            view! {
                <div class="toast toast-top toast-center z-50">
                    <div role="alert" class=alert_class(notice.kind) on:click=move |_| toast.dismiss(id)>
                        <div>
                            <h3 class="font-bold">{notice.title}</h3>
                            <div class="text-sm">{notice.description}</div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
