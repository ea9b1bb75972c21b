//! 登录 / 注册页
//!
//! 两个页面共用同一个表单，只在提交的接口与成功后的去向上不同。

use claims_portal::auth::authenticate;
use claims_portal::{AppRoute, AuthAttempt, AuthMode};
use claims_portal_shared::Credentials;
use claims_portal_shared::validation::{CredentialField, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::site_header::PageShell;
use crate::components::toast::use_toaster;
use crate::web::{Link, use_router};

#[derive(Clone, Copy)]
struct FormCopy {
    title: &'static str,
    submit: &'static str,
    pending: &'static str,
    switch_hint: &'static str,
    switch_label: &'static str,
    switch_to: AppRoute,
}

fn copy_for(mode: AuthMode) -> FormCopy {
    match mode {
        AuthMode::Login => FormCopy {
            title: "Login",
            submit: "Login",
            pending: "Logging in...",
            switch_hint: "Don't have an account?",
            switch_label: "Register",
            switch_to: AppRoute::Register,
        },
        AuthMode::Register => FormCopy {
            title: "Create an account",
            submit: "Register",
            pending: "Registering...",
            switch_hint: "Already have an account?",
            switch_label: "Login",
            switch_to: AppRoute::Login,
        },
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageShell>
            <CredentialsForm mode=AuthMode::Login />
        </PageShell>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <PageShell>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <CredentialsForm mode=AuthMode::Register /> }
            >
                <div role="alert" class="alert alert-info max-w-md mx-auto">
                    <span>"You are already authenticated."</span>
                </div>
            </Show>
        </PageShell>
    }
}

#[component]
fn CredentialsForm(mode: AuthMode) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();
    let copy = copy_for(mode);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::<CredentialField>::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let field_error = move |field: CredentialField| {
        move || errors.with(|e| e.get(field).map(str::to_string))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };

        set_is_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match authenticate(&api, mode, credentials).await {
                AuthAttempt::Invalid(found) => errors.set(found),
                AuthAttempt::Done(outcome) => {
                    errors.set(ValidationErrors::new());
                    toaster.show(outcome.notification);
                    if let Some(target) = outcome.redirect {
                        auth.set(outcome.status);
                        router.navigate(target);
                    }
                }
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="card w-full max-w-md mx-auto shadow-2xl bg-base-100">
            <form class="card-body" on:submit=on_submit novalidate>
                <h2 class="card-title text-2xl">{copy.title}</h2>

                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        on:input=move |ev| email.set(event_target_value(&ev))
                        prop:value=move || email.get()
                        class="input input-bordered"
                    />
                    <span class="text-error text-sm mt-1">{field_error(CredentialField::Email)}</span>
                </div>

                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">"Password"</span>
                    </label>
                    <input
                        id="password"
                        type="password"
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:value=move || password.get()
                        class="input input-bordered"
                    />
                    <span class="text-error text-sm mt-1">{field_error(CredentialField::Password)}</span>
                </div>

                <div class="form-control mt-6">
                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> {copy.pending} }.into_any()
                        } else {
                            copy.submit.into_any()
                        }}
                    </button>
                </div>

                <p class="text-sm text-center text-base-content/70">
                    {copy.switch_hint} " "
                    <Link to=copy.switch_to class="link link-primary">{copy.switch_label}</Link>
                </p>
            </form>
        </div>
    }
}
