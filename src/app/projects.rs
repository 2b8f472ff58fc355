use leptos::prelude::*;

use crate::{
    content::{portfolio, ProjectEntry},
    nav::Section,
};

use super::homepage::SectionHeader;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-24">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader
                    icon="🌐"
                    title="Projects"
                    subtitle="Web & Mobile applications delivered"
                />
                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                    {portfolio()
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="reveal flex flex-col p-6 rounded-lg bg-surface border border-edge">
            <div class="mb-4">
                <div class="flex items-center gap-2 text-sm text-muted mb-2">
                    <span>{project.kind.icon()}</span>
                    <span>{project.kind.label()}</span>
                </div>
                <h3 class="text-xl font-bold">{project.title.clone()}</h3>
                <span class="text-sm text-accent">{project.role.clone()}</span>
            </div>
            <p class="text-muted mb-4 flex-grow">{project.description.clone()}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 py-1 rounded bg-background text-xs">{tech.clone()}</span>
                        }
                    })
                    .collect_view()}
            </div>
            {project
                .link
                .clone()
                .map(|link| {
                    view! {
                        <a
                            href=link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-sm text-accent hover:underline"
                        >
                            "↗ Visit Site"
                        </a>
                    }
                })}
        </div>
    }
}
