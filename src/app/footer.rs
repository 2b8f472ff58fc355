use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::portfolio;

use super::navbar::NavButtons;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &portfolio().profile;
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-edge py-12">
            <div class="max-w-6xl mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between gap-8 mb-8">
                    <div>
                        <div class="flex items-center gap-2 text-xl font-bold text-accent">
                            <span class="font-mono">"</>"</span>
                            <span>{profile.short_name.clone()}</span>
                        </div>
                        <p class="text-muted mt-2">{profile.headline.clone()}</p>
                    </div>
                    <div class="flex flex-col gap-2">
                        <h4 class="font-medium mb-2">"Navigation"</h4>
                        <NavButtons />
                    </div>
                </div>
                <div class="flex flex-col sm:flex-row justify-between items-center gap-4 pt-8 border-t border-edge text-sm text-muted">
                    <p>{format!("© {year} {}. {}.", profile.name, profile.headline)}</p>
                    <a
                        href=profile.resume_path.clone()
                        download=""
                        class="px-4 py-2 rounded-md border border-accent text-accent"
                    >
                        "⬇ Download Resume"
                    </a>
                </div>
            </div>
        </footer>
    }
}
