use leptos::prelude::*;

use crate::{
    content::{portfolio, ExperienceEntry},
    nav::Section,
};

use super::homepage::SectionHeader;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-24">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeader
                    icon="💼"
                    title="Work Experience"
                    subtitle="5+ years of progressive growth"
                />
                <div class="timeline relative border-l-2 border-edge ml-3 space-y-12">
                    {portfolio()
                        .experience
                        .iter()
                        .map(|job| view! { <TimelineItem job /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(job: &'static ExperienceEntry) -> impl IntoView {
    let tags = (!job.tags.is_empty())
        .then(|| {
            view! {
                <div class="flex flex-wrap gap-2 mb-4">
                    {job
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 rounded bg-surface text-accent text-xs">
                                    {tag.icon.clone()} " " {tag.label.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            }
        });

    view! {
        <div class="reveal relative pl-8">
            <div class="absolute -left-[9px] top-2 w-4 h-4 rounded-full bg-accent"></div>
            <div class="mb-4">
                <h3 class="text-xl font-bold">{job.title.clone()}</h3>
                <div class="flex flex-wrap gap-x-4 text-sm text-muted">
                    <span class="text-accent font-medium">{job.company.clone()}</span>
                    <span>{job.period.clone()}</span>
                    <span>"📍 " {job.location.clone()}</span>
                </div>
            </div>
            {tags}
            <ul class="space-y-2">
                {job
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex gap-2">
                                <span class="text-accent">"✓"</span>
                                {achievement.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
