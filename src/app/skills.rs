use leptos::prelude::*;

use super::reveal::{Animated, RevealSection};
use crate::{
    content::{SkillCategory, SKILL_CATEGORIES, SOFT_SKILLS},
    motion::{CARD_RISE, POP_IN, SKILL_ITEM_STAGGER, SLIDE_FROM_LEFT, STAGGER_CHILDREN},
    nav::SectionId,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Skills class="py-20 bg-section-bg">
            <div class="container mx-auto px-4 max-w-6xl">
                <Animated class="text-center mb-16">
                    <span class="text-accent font-medium text-sm tracking-wide uppercase mb-2 block">
                        "Skills & Expertise"
                    </span>
                    <h2 class="font-poppins font-bold text-4xl md:text-5xl text-foreground mb-4">
                        "My " <span class="text-primary">"Technical"</span> " Arsenal"
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "A comprehensive toolkit built through hands-on experience and continuous learning in modern web development technologies."
                    </p>
                </Animated>

                <Animated index=1 class="mb-16">
                    <h3 class="font-poppins font-semibold text-2xl text-foreground mb-8 text-center">
                        "Technical Skills"
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(i, category)| view! { <CategoryCard category=*category index=i /> })
                            .collect_view()}
                    </div>
                </Animated>

                <Animated index=2>
                    <h3 class="font-poppins font-semibold text-2xl text-foreground mb-8 text-center">
                        "Soft Skills & Personal Strengths"
                    </h3>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                        {SOFT_SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <Animated
                                        motion=POP_IN
                                        index=i
                                        stagger=STAGGER_CHILDREN
                                        class="group"
                                    >
                                        <div class="text-center border border-border/50 hover:border-primary/20 hover:shadow-md transition-all duration-300 rounded-lg p-6">
                                            <div class="w-12 h-12 bg-gradient-portfolio rounded-lg flex items-center justify-center mx-auto mb-3 text-2xl group-hover:scale-110 transition-transform duration-300">
                                                {skill.icon}
                                            </div>
                                            <h4 class="font-semibold text-foreground mb-1 group-hover:text-primary transition-colors duration-300">
                                                {skill.name}
                                            </h4>
                                            <p class="text-sm text-muted-foreground">{skill.description}</p>
                                        </div>
                                    </Animated>
                                }
                            })
                            .collect_view()}
                    </div>
                </Animated>
            </div>
        </RevealSection>
    }
}

#[component]
fn CategoryCard(category: SkillCategory, index: usize) -> impl IntoView {
    view! {
        <Animated motion=CARD_RISE index=index stagger=STAGGER_CHILDREN class="group">
            <div class="h-full border border-border/50 hover:border-primary/20 hover:shadow-lg transition-all duration-300 rounded-lg p-6">
                <div class="flex items-center space-x-3 mb-4">
                    <div class="w-10 h-10 bg-primary/10 rounded-lg flex items-center justify-center">
                        {category.icon}
                    </div>
                    <h4 class="font-semibold text-foreground group-hover:text-primary transition-colors duration-300">
                        {category.title}
                    </h4>
                </div>
                <div class="space-y-2">
                    {category
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <Animated
                                    motion=SLIDE_FROM_LEFT
                                    index=i
                                    stagger=SKILL_ITEM_STAGGER
                                    class="flex items-center space-x-2"
                                >
                                    <div class="w-1.5 h-1.5 bg-primary rounded-full"></div>
                                    <span class="text-muted-foreground text-sm hover:text-foreground transition-colors duration-200">
                                        {*skill}
                                    </span>
                                </Animated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Animated>
    }
}
