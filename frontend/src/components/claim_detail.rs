//! 理赔详情页

use claims_portal::views::claim_detail::{ClaimDetailView, claim_detail};
use claims_portal::{AppRoute, Screen};
use leptos::prelude::*;

use crate::components::auth_button::LoginPrompt;
use crate::components::site_header::{BackLink, PageShell};
use crate::components::skeleton::DetailSkeleton;
use crate::query::use_guarded_query;
use crate::web::use_router;

#[component]
pub fn ClaimDetailPage(id: i64) -> impl IntoView {
    let router = use_router();
    let state = use_guarded_query(move |api| async move { api.get_claim(id).await });
    let screen = Memo::new(move |_| state.with(claim_detail));

    // 拉取失败直接回到列表
    Effect::new(move |_| {
        if let Screen::Redirect(target) = screen.get() {
            router.redirect(target);
        }
    });

    view! {
        <PageShell>
            <BackLink to=AppRoute::Claims label="Back to claims" />
            {move || match screen.get() {
                Screen::Skeleton => view! { <DetailSkeleton /> }.into_any(),
                Screen::LoginPrompt => view! { <LoginPrompt /> }.into_any(),
                Screen::Content(detail) => view! { <ClaimDetailCard detail=detail /> }.into_any(),
                Screen::Redirect(_) => ().into_any(),
            }}
        </PageShell>
    }
}

#[component]
fn ClaimDetailCard(detail: ClaimDetailView) -> impl IntoView {
    let fields = [
        ("Date of Accident", detail.date_of_accident),
        ("Accident Type", detail.accident_type),
        ("Description", detail.description),
        ("Damage Details", detail.damage_details),
        ("Injuries Reported", detail.injuries_reported.to_string()),
    ];

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Policy " {detail.policy_number}</h2>
                <dl class="grid gap-4 md:grid-cols-2">
                    {fields
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div>
                                    <dt class="text-sm text-base-content/60">{label}</dt>
                                    <dd class="font-medium whitespace-pre-wrap">{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
                <div class="grid gap-4 mt-4 sm:grid-cols-2 lg:grid-cols-3">
                    {detail
                        .images
                        .into_iter()
                        .map(|src| {
                            view! {
                                <img src=src class="rounded-box object-cover w-full h-48" alt="Claim image" />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
