//! 理赔列表页

use claims_portal::AppRoute;
use claims_portal::Screen;
use claims_portal::views::claims_table::{COLUMNS, ClaimRow, claims_table};
use leptos::prelude::*;

use crate::components::auth_button::LoginPrompt;
use crate::components::icons::FilePlus;
use crate::components::site_header::PageShell;
use crate::components::skeleton::TableSkeleton;
use crate::components::toast::use_toaster;
use crate::query::use_guarded_query;
use crate::web::use_router;

#[component]
pub fn ClaimsPage() -> impl IntoView {
    let router = use_router();

    view! {
        <PageShell>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <div>
                            <h3 class="card-title">"My Claims"</h3>
                            <p class="text-base-content/70 text-sm">"Every claim you have submitted."</p>
                        </div>
                        <button on:click=move |_| router.navigate(AppRoute::CreateClaim) class="btn btn-primary gap-2">
                            <FilePlus attr:class="h-4 w-4" /> "Create Claim"
                        </button>
                    </div>
                    <ClaimsTable />
                </div>
            </div>
        </PageShell>
    }
}

#[component]
fn ClaimsTable() -> impl IntoView {
    let toaster = use_toaster();
    let state = use_guarded_query(|api| async move { api.list_claims().await });
    let table = Memo::new(move |_| state.with(claims_table));

    Effect::new(move |_| {
        if let Some(notification) = table.with(|t| t.notification.clone()) {
            toaster.show(notification);
        }
    });

    move || match table.with(|t| t.screen.clone()) {
        Screen::Skeleton => view! { <TableSkeleton /> }.into_any(),
        Screen::LoginPrompt => view! { <LoginPrompt /> }.into_any(),
        Screen::Content(rows) => view! { <ClaimRows rows=rows /> }.into_any(),
        Screen::Redirect(_) => ().into_any(),
    }
}

#[component]
fn ClaimRows(rows: Vec<ClaimRow>) -> impl IntoView {
    let router = use_router();
    let is_empty = rows.is_empty();

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || is_empty>
                        <tr>
                            <td colspan=COLUMNS.len().to_string() class="text-center py-8 text-base-content/50">
                                "No claims yet."
                            </td>
                        </tr>
                    </Show>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let target = row.route();
                            view! {
                                <tr class="hover cursor-pointer" on:click=move |_| router.navigate(target)>
                                    {row.cells().into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
