mod browser;
mod contact;
mod experience;
mod footer;
mod homepage;
mod navbar;
mod overlays;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::portfolio, page::PageState, theme::Theme};

use browser::LocalThemeStore;
use footer::Footer;
use homepage::HomePage;
use navbar::Navbar;
use overlays::{BackToTop, ScrollProgress, Splash};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=Theme::default().as_str()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let page = RwSignal::new(PageState::default());
    let store = LocalThemeStore::new();
    provide_context(page);
    provide_context(store);

    #[cfg(feature = "hydrate")]
    browser::install(page, store);

    let profile = &portfolio().profile;
    let name = profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=profile.description.clone() />

        <Router>
            <Splash />
            <ScrollProgress />
            <Navbar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <BackToTop />
        </Router>
    }
}
