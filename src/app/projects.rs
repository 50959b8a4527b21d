use leptos::prelude::*;

use super::{
    reveal::{Animated, RevealSection},
    scroll::{follow_link, scroll_to_section},
};
use crate::{
    content::{projects_in, Project, ProjectCategory, PROFILE},
    motion::{CARD_RISE, PROJECT_STAGGER, STAGGER_CHILDREN},
    nav::SectionId,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Projects class="py-20 bg-background" stagger=PROJECT_STAGGER>
            <div class="container mx-auto px-4 max-w-6xl">
                <Animated class="text-center mb-16">
                    <h2 class="font-poppins font-bold text-4xl md:text-5xl text-foreground mb-4">
                        "Featured " <span class="text-primary">"Projects"</span>
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "A collection of professional and personal projects showcasing my expertise in modern web development and problem-solving capabilities."
                    </p>
                </Animated>

                <Animated index=1 class="mb-16">
                    <ProjectGroup category=ProjectCategory::Professional />
                </Animated>
                <Animated index=2>
                    <ProjectGroup category=ProjectCategory::Personal />
                </Animated>

                <Animated index=3 class="text-center mt-16">
                    <div class="bg-gradient-portfolio rounded-2xl p-8 text-white">
                        <h3 class="font-poppins font-semibold text-2xl mb-4">
                            "Interested in Working Together?"
                        </h3>
                        <p class="text-white/80 mb-6 max-w-md mx-auto">
                            "I'm always excited to take on new challenges and create amazing digital experiences."
                        </p>
                        <button
                            class="bg-white text-primary hover:bg-white/90 font-medium px-8 py-3 rounded-md"
                            on:click=move |_| scroll_to_section(SectionId::Contact)
                        >
                            "Start a Project →"
                        </button>
                    </div>
                </Animated>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectGroup(category: ProjectCategory) -> impl IntoView {
    view! {
        <h3 class="font-poppins font-semibold text-2xl text-foreground mb-8 text-center">
            {category.heading()}
        </h3>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {projects_in(category)
                .enumerate()
                .map(|(i, project)| view! { <ProjectCard project=*project index=i /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <Animated motion=CARD_RISE index=index stagger=STAGGER_CHILDREN class="group">
            <div class="h-full border border-border/50 hover:border-primary/20 hover:shadow-xl transition-all duration-300 rounded-lg p-6">
                <h3 class="font-poppins font-semibold text-xl text-foreground mb-3 group-hover:text-primary transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-muted-foreground leading-relaxed mb-4">{project.description}</p>

                <div class="mb-4">
                    <h4 class="font-medium text-foreground mb-2 text-sm">"Key Achievements:"</h4>
                    <ul class="space-y-1">
                        {project
                            .achievements
                            .iter()
                            .map(|achievement| {
                                view! {
                                    <li class="flex items-start space-x-2 text-sm text-muted-foreground">
                                        <span class="text-primary">"→"</span>
                                        <span>{*achievement}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="mb-6 flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-muted text-muted-foreground rounded-md text-xs hover:bg-primary/10 hover:text-primary transition-colors duration-200">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex space-x-3 pt-4 border-t border-border/50">
                    {project
                        .link
                        .map(|link| {
                            view! {
                                <a
                                    href=link
                                    on:click=move |ev| follow_link(&ev, link)
                                    class="flex-1 text-center border border-border rounded-md py-2 text-sm hover:bg-muted"
                                >
                                    "↗ Live Demo"
                                </a>
                            }
                        })}
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center border border-border rounded-md py-2 text-sm hover:bg-muted"
                    >
                        <i class="devicon-github-plain mr-2"></i>
                        "View Code"
                    </a>
                </div>
            </div>
        </Animated>
    }
}
