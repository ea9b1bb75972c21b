use claims_portal::auth::sign_out;
use claims_portal::{AppRoute, AuthStatus};
use leptos::prelude::*;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::{LogIn, LogOut};
use crate::web::use_router;

/// 登录 / 注销按钮，认证探测进行中显示加载指示
#[component]
pub fn AuthButton() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let router = use_router();

    let on_logout = move |_| {
        let target = sign_out(&api);
        auth.set(AuthStatus::SIGNED_OUT);
        router.navigate(target);
    };
    let on_login = move |_| router.navigate(AppRoute::Login);

    move || {
        let status = auth.status().get();
        if status.is_loading {
            view! { <span class="loading loading-spinner loading-md text-primary"></span> }
                .into_any()
        } else if status.is_authenticated {
            view! {
                <button on:click=on_logout.clone() class="btn btn-outline btn-error gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            }
            .into_any()
        } else {
            view! {
                <button on:click=on_login class="btn btn-primary gap-2">
                    <LogIn attr:class="h-4 w-4" /> "Login"
                </button>
            }
            .into_any()
        }
    }
}

/// 未登录时受保护视图显示的提示
#[component]
pub fn LoginPrompt() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="card bg-base-100 shadow-xl max-w-md mx-auto">
            <div class="card-body items-center text-center">
                <h2 class="card-title">"You are not logged in"</h2>
                <p class="text-base-content/70">"Please log in to continue."</p>
                <div class="card-actions mt-4">
                    <button on:click=move |_| router.navigate(AppRoute::Login) class="btn btn-primary">
                        "Login"
                    </button>
                </div>
            </div>
        </div>
    }
}
