use claims_portal::AppRoute;
use leptos::prelude::*;

use crate::components::site_header::PageShell;
use crate::web::Link;

const STEPS: [(&str, &str); 3] = [
    ("Create an account", "Register with your email address and a password."),
    ("Submit your claim", "Describe the accident and upload photos of the damage."),
    ("Track its progress", "Review every claim you have filed in one place."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell>
            <div class="hero bg-base-100 rounded-box shadow-xl py-12">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-5xl font-bold">"File insurance claims in minutes"</h1>
                    <p class="py-4 text-base-content/70 max-w-xl">
                        "Report an accident, attach your photos and follow up, all from your browser."
                    </p>
                    <div class="flex gap-2">
                        <Link to=AppRoute::Register class="btn btn-primary">"Get started"</Link>
                        <Link to=AppRoute::Claims class="btn btn-outline">"My claims"</Link>
                    </div>
                </div>
            </div>

            <div class="grid gap-4 md:grid-cols-3">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, body))| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <div class="badge badge-primary">{i + 1}</div>
                                    <h3 class="card-title">{*title}</h3>
                                    <p class="text-base-content/70">{*body}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageShell>
    }
}
