//! 提交理赔页

mod form_state;

use claims_portal::views::create_claim::{
    ImageRead, SubmitOutcome, create_claim_screen, create_claim_state, submit_claim_files,
};
use claims_portal::{AppRoute, Screen, log_warn};
use claims_portal_shared::date::MIN_ACCIDENT_DATE;
use claims_portal_shared::protocol::UploadFile;
use claims_portal_shared::validation::{
    ACCEPTED_IMAGE_TYPES, ClaimField, MSG_IMAGE_RULES, ValidationErrors, check_image_meta,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::auth_button::LoginPrompt;
use crate::components::icons::Upload;
use crate::components::site_header::{BackLink, PageShell};
use crate::components::skeleton::DetailSkeleton;
use crate::components::toast::use_toaster;

use form_state::ClaimFormState;

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// 把所选文件读入内存，失败时返回文件名
async fn read_file(file: &web_sys::File) -> ImageRead {
    match JsFuture::from(file.array_buffer()).await {
        Ok(buf) => Ok(UploadFile::new(
            file.name(),
            file.type_(),
            js_sys::Uint8Array::new(&buf).to_vec(),
        )),
        Err(e) => {
            log_warn!("[CreateClaim] failed to read {}: {:?}", file.name(), e);
            Err(file.name())
        }
    }
}

fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn CreateClaimPage() -> impl IntoView {
    let auth = use_auth();
    let screen = Memo::new(move |_| create_claim_screen(&create_claim_state(auth.status().get())));

    view! {
        <PageShell>
            <BackLink to=AppRoute::Claims label="Back to claims" />
            {move || match screen.get() {
                Screen::Skeleton => view! { <DetailSkeleton /> }.into_any(),
                Screen::Content(()) => view! { <CreateClaimForm /> }.into_any(),
                Screen::LoginPrompt | Screen::Redirect(_) => view! { <LoginPrompt /> }.into_any(),
            }}
        </PageShell>
    }
}

#[component]
fn CreateClaimForm() -> impl IntoView {
    let api = use_api();
    let toaster = use_toaster();
    let state = ClaimFormState::new();
    let (is_submitting, set_is_submitting) = signal(false);

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        state.images.set(selected_files(&input));
    };

    // 文件在这里才读取，提交的一定是当前的选择
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = state.to_draft();
        let files = state.images.get_untracked();
        set_is_submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let mut reads = Vec::with_capacity(files.len());
            for file in &files {
                reads.push(read_file(file).await);
            }
            match submit_claim_files(&api, draft, reads, today()).await {
                SubmitOutcome::Invalid(errors) => {
                    state.errors.try_set(errors);
                }
                SubmitOutcome::Done(notification) => {
                    state.errors.try_set(ValidationErrors::new());
                    toaster.show(notification);
                }
            }
            set_is_submitting.try_set(false);
        });
    };

    let max_date = today().format("%Y-%m-%d").to_string();
    let min_date = MIN_ACCIDENT_DATE.format("%Y-%m-%d").to_string();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body gap-4" on:submit=on_submit novalidate>
                <h2 class="card-title">"Create Claim"</h2>

                <TextField id="policy_number" label="Policy Number" placeholder="pol-123456"
                    value=state.policy_number error=state.error_for(ClaimField::PolicyNumber) />

                <div class="form-control">
                    <label class="label" for="date_of_accident">
                        <span class="label-text">"Date of Accident"</span>
                    </label>
                    <input
                        id="date_of_accident"
                        type="date"
                        min=min_date
                        max=max_date
                        on:input=move |ev| state.date_of_accident.set(event_target_value(&ev))
                        prop:value=move || state.date_of_accident.get()
                        class="input input-bordered w-full"
                    />
                    <span class="text-error text-sm mt-1">{state.error_for(ClaimField::DateOfAccident)}</span>
                </div>

                <TextField id="accident_type" label="Accident Type" placeholder="Property damage"
                    value=state.accident_type error=state.error_for(ClaimField::AccidentType) />

                <TextAreaField id="description" label="Description" placeholder="Describe the accident in detail"
                    value=state.description error=state.error_for(ClaimField::Description) />

                <TextAreaField id="damage_details" label="Damage Details" placeholder="Describe the damage suffered"
                    value=state.damage_details error=state.error_for(ClaimField::DamageDetails) />

                <label class="label cursor-pointer justify-start gap-3">
                    <input
                        type="checkbox"
                        class="checkbox checkbox-primary"
                        prop:checked=move || state.injuries_reported.get()
                        on:change=move |ev| state.injuries_reported.set(event_target_checked(&ev))
                    />
                    <span class="label-text">"Were there any injuries?"</span>
                </label>

                <div class="form-control">
                    <label class="label" for="images">
                        <span class="label-text">"Images"</span>
                    </label>
                    <input
                        id="images"
                        type="file"
                        multiple
                        accept=ACCEPTED_IMAGE_TYPES.join(",")
                        on:change=on_files
                        class="file-input file-input-bordered w-full"
                    />
                    <span class="text-xs text-base-content/60 mt-1">{MSG_IMAGE_RULES}</span>
                    <ul class="text-sm mt-2">
                        {move || {
                            state.images.with(|files| {
                                files
                                    .iter()
                                    .map(|f| {
                                        let accepted = check_image_meta(&f.type_(), f.size() as u64).is_ok();
                                        let class = if accepted { "" } else { "text-error" };
                                        view! { <li class=class>{f.name()}</li> }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                    <span class="text-error text-sm mt-1">{state.error_for(ClaimField::Images)}</span>
                </div>

                <div class="form-control mt-4">
                    <button class="btn btn-primary gap-2" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                        } else {
                            view! { <Upload attr:class="h-4 w-4" /> "Submit Claim" }.into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: impl Fn() -> Option<String> + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
            <span class="text-error text-sm mt-1">{error}</span>
        </div>
    }
}

#[component]
fn TextAreaField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: impl Fn() -> Option<String> + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <textarea
                id=id
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="textarea textarea-bordered w-full"
                rows="4"
            ></textarea>
            <span class="text-error text-sm mt-1">{error}</span>
        </div>
    }
}
