use claims_portal::AppRoute;
use leptos::prelude::*;

use crate::components::auth_button::AuthButton;
use crate::components::icons::{ArrowLeft, ShieldCheck};
use crate::web::Link;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <ShieldCheck attr:class="text-primary h-6 w-6" />
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">"Claims Portal"</Link>
            </div>
            <div class="flex-none gap-2">
                <AuthButton />
            </div>
        </div>
    }
}

#[component]
pub fn BackLink(to: AppRoute, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <Link to=to class="btn btn-ghost btn-sm gap-2 w-fit">
            <ArrowLeft attr:class="h-4 w-4" />
            {label}
        </Link>
    }
}

/// 页面外壳：页头加内容区
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <SiteHeader />
                {children()}
            </div>
        </div>
    }
}
