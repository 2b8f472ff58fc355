use leptos::{either::Either, prelude::*};

use crate::{
    content::{portfolio, SkillCategory, SkillItems},
    nav::Section,
};

use super::homepage::SectionHeader;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-24 bg-surface">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader
                    icon="🧠"
                    title="Technical Skills"
                    subtitle="5+ years mastering modern technologies"
                />
                <div class="grid gap-8 md:grid-cols-3">
                    {portfolio()
                        .skills
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="reveal p-6 rounded-lg bg-background border border-edge">
                                    <h3 class="text-lg font-bold mb-4">
                                        <span class="text-accent">{category.icon.clone()}</span>
                                        " "
                                        {category.title.clone()}
                                    </h3>
                                    <SkillList category />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillList(category: &'static SkillCategory) -> impl IntoView {
    match &category.items {
        SkillItems::Levels(levels) => Either::Left(view! {
            <div class="space-y-4">
                {levels
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        view! {
                            <div class="skill-item" style=format!("--index: {index}")>
                                <div class="flex justify-between text-sm mb-1">
                                    <span class="font-medium">{skill.name.clone()}</span>
                                    <span class="text-muted">{skill.years.clone()}</span>
                                </div>
                                <div class="h-2 rounded-full bg-surface overflow-hidden">
                                    <div
                                        class="skill-level h-full rounded-full bg-accent"
                                        style:width=skill.width()
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }),
        SkillItems::Tags(tags) => Either::Right(view! {
            <div class="flex flex-wrap gap-2">
                {tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="px-3 py-1 rounded-md bg-surface text-sm">{tag.clone()}</span>
                        }
                    })
                    .collect_view()}
            </div>
        }),
    }
}
