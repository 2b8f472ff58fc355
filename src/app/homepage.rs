use leptos::prelude::*;
use leptos_meta::Title;

use crate::{content::portfolio, nav::Section};

use super::{
    contact::ContactSection, experience::ExperienceSection, projects::ProjectsSection,
    skills::SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <AboutSection />
        <ExperienceSection />
        <SkillsSection />
        <ProjectsSection />
        <ContactSection />
    }
}

/// Icon, heading and subtitle opening every section after the hero.
#[component]
pub fn SectionHeader(
    icon: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="reveal text-center mb-12">
            <div class="text-3xl text-accent mb-2">{icon}</div>
            <h2 class="text-3xl font-bold">{title}</h2>
            <p class="text-muted mt-2">{subtitle}</p>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;
    let socials = &portfolio().contact.socials;

    view! {
        <section id=Section::Home.id() class="min-h-[90vh] flex items-center">
            <div class="max-w-6xl mx-auto px-6 py-24 reveal">
                <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-surface text-accent text-sm mb-6">
                    "✨ " {profile.headline.clone()}
                </div>
                <h1 class="text-5xl lg:text-6xl font-bold mb-4">{profile.name.clone()}</h1>
                <h2 class="text-xl lg:text-2xl text-muted mb-6">{profile.subtitle.clone()}</h2>
                <p class="max-w-2xl text-lg leading-relaxed mb-8">{profile.description.clone()}</p>

                <div class="flex gap-12 mb-10">
                    {profile
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="flex flex-col">
                                    <span class="text-3xl font-bold text-accent">
                                        {stat.value.clone()}
                                    </span>
                                    <span class="text-sm text-muted">{stat.label.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-wrap items-center gap-4">
                    <a
                        href=Section::Projects.href()
                        class="px-6 py-3 rounded-md bg-accent text-background font-medium"
                    >
                        "🚀 View Projects"
                    </a>
                    <a
                        href=profile.resume_path.clone()
                        download=""
                        class="px-6 py-3 rounded-md border border-accent text-accent font-medium"
                    >
                        "⬇ Download CV"
                    </a>
                    <div class="flex gap-3 text-2xl">
                        {socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-muted hover:text-accent"
                                        aria-label=social.label.clone()
                                    >
                                        <i class=social.icon.clone()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let about = &portfolio().about;

    view! {
        <section id=Section::About.id() class="py-24 bg-surface">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader
                    icon="👤"
                    title=about.title.clone()
                    subtitle=about.subtitle.clone()
                />
                <div class="grid gap-8 md:grid-cols-3">
                    {about
                        .cards
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="reveal p-6 rounded-lg bg-background border border-edge">
                                    <div class="text-2xl text-accent mb-4">{card.icon.clone()}</div>
                                    <h3 class="text-xl font-bold mb-2">{card.title.clone()}</h3>
                                    <p class="text-muted leading-relaxed">
                                        {card.description.clone()}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
