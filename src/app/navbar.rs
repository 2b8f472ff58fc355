use leptos::{either::Either, prelude::*};

use crate::{content::portfolio, nav::Section, page::PageState};

use super::browser::{navigate, toggle_theme, LocalThemeStore};

#[component]
pub fn Navbar() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let store = expect_context::<LocalThemeStore>();
    let menu_open = Memo::new(move |_| page.with(PageState::menu_open));
    let theme = Memo::new(move |_| page.with(PageState::theme));

    view! {
        <nav class="sticky top-0 z-40 border-b border-edge bg-background/85 backdrop-blur">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between gap-4">
                <button
                    class="flex items-center gap-2 text-xl font-bold text-accent"
                    on:click=move |_| navigate(page, Section::Home.id())
                >
                    <span class="font-mono">"</>"</span>
                    <span>{portfolio().profile.name.clone()}</span>
                </button>

                <div class="hidden md:flex gap-6">
                    <NavButtons />
                </div>

                <div class="flex items-center gap-3">
                    <button
                        class="md:hidden text-2xl w-10 h-10"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| page.update(PageState::toggle_menu)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                    <button
                        class="theme-toggle text-xl w-10 h-10 rounded-full border border-edge hover:bg-surface"
                        aria-label="Toggle theme"
                        on:click=move |_| toggle_theme(page, store)
                    >
                        {move || theme.get().toggle_icon()}
                    </button>
                    <a
                        href=Section::Contact.href()
                        class="hidden sm:inline-block px-4 py-2 rounded-md bg-accent text-background font-medium"
                    >
                        "Hire Me"
                    </a>
                </div>
            </div>
            {move || {
                if menu_open.get() {
                    Either::Left(
                        view! {
                            <div class="mobile-menu md:hidden flex flex-col gap-2 px-6 pb-4">
                                <NavButtons />
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </nav>
    }
}

/// One button per section; shared by the desktop and mobile menus and the footer.
#[component]
pub fn NavButtons() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="text-left text-muted hover:text-accent transition-colors duration-200"
                    on:click=move |_| navigate(page, section.id())
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}
