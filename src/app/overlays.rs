use leptos::prelude::*;

use crate::page::PageState;

use super::browser::BrowserDocument;

#[component]
pub fn Splash() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let loading = Memo::new(move |_| page.with(PageState::loading));

    view! {
        <Show when=move || loading.get()>
            <div class="loading fixed inset-0 z-50 flex items-center justify-center bg-background">
                <div class="loader"></div>
            </div>
        </Show>
    }
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    view! {
        <div
            class="scroll-progress fixed top-0 left-0 z-50 h-1 bg-accent"
            style:width=move || format!("{}%", page.with(PageState::progress_percent))
        ></div>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let visible = Memo::new(move |_| page.with(PageState::show_back_to_top));

    view! {
        <button
            class="back-to-top fixed bottom-8 right-8 z-40 w-12 h-12 rounded-full bg-accent text-background text-xl"
            class:visible=move || visible.get()
            aria-label="Back to top"
            aria-hidden=move || (!visible.get()).to_string()
            on:click=move |_| page.with_untracked(|p| p.back_to_top(&mut BrowserDocument))
        >
            "↑"
        </button>
    }
}
