//! 全局提示
//!
//! 放在应用根部，跳转页面后提示仍然可见（如登录成功后进入列表页）。

use std::time::Duration;

use claims_portal::{Notification, NotificationLevel, ToastSlot};
use leptos::prelude::*;

/// 提示停留时长
const TOAST_DURATION_SECS: u64 = 3;

#[derive(Clone, Copy)]
pub struct Toaster {
    slot: RwSignal<ToastSlot>,
}

impl Toaster {
    /// 显示提示，一段时间后自动清除
    pub fn show(&self, notification: Notification) {
        let slot = self.slot;
        let Some(id) = slot.try_update(|s| s.show(notification)) else {
            return;
        };
        set_timeout(
            move || {
                slot.try_update(|s| s.expire(id));
            },
            Duration::from_secs(TOAST_DURATION_SECS),
        );
    }

    pub fn dismiss(&self) {
        self.slot.update(ToastSlot::dismiss);
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        slot: RwSignal::new(ToastSlot::default()),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let slot = toaster.slot;

    move || {
        slot.with(|s| s.current().cloned()).map(|n| {
            let alert_class = match n.level {
                NotificationLevel::Success => "alert alert-success shadow-lg",
                NotificationLevel::Error => "alert alert-error shadow-lg",
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=alert_class>
                        <span>{n.message}</span>
                        <button
                            class="btn btn-sm btn-circle btn-ghost ml-2"
                            on:click=move |_| toaster.dismiss()
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
