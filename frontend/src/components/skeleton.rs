use leptos::prelude::*;

/// 列表加载占位
#[component]
pub fn TableSkeleton(#[prop(default = 5)] rows: usize) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-3 w-full">
            <div class="skeleton h-10 w-full"></div>
            {(0..rows).map(|_| view! { <div class="skeleton h-8 w-full"></div> }).collect_view()}
        </div>
    }
}

/// 详情加载占位
#[component]
pub fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 w-full max-w-2xl">
            <div class="skeleton h-8 w-1/2"></div>
            <div class="skeleton h-4 w-full"></div>
            <div class="skeleton h-4 w-full"></div>
            <div class="skeleton h-4 w-3/4"></div>
            <div class="skeleton h-48 w-full"></div>
        </div>
    }
}
