use leptos::prelude::*;

use super::reveal::{Animated, RevealSection};
use crate::{
    content::EXPERIENCE,
    motion::{SLIDE_FROM_RIGHT, STAGGER_CHILDREN},
    nav::SectionId,
};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let role = EXPERIENCE;

    view! {
        <RevealSection section=SectionId::Experience class="py-20 bg-background">
            <div class="container mx-auto px-4 max-w-4xl">
                <Animated class="text-center mb-16">
                    <span class="text-accent font-medium text-sm tracking-wide uppercase mb-2 block">
                        "Experience"
                    </span>
                    <h2 class="font-poppins font-bold text-4xl md:text-5xl text-foreground mb-4">
                        "My Working " <span class="text-primary">"Process"</span>
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "A journey of continuous learning, growth, and delivering exceptional results in the fast-paced world of front-end development."
                    </p>
                </Animated>

                <Animated index=1>
                    <div class="border-2 border-primary/20 shadow-lg hover:shadow-xl transition-all duration-300 rounded-lg p-8">
                        <div class="flex flex-col lg:flex-row lg:items-start lg:space-x-8">
                            <div class="lg:w-1/3 mb-6 lg:mb-0">
                                <div class="flex items-center space-x-3 mb-4">
                                    <div class="w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center text-2xl">
                                        "🏢"
                                    </div>
                                    <div>
                                        <h3 class="font-poppins font-bold text-xl text-foreground">
                                            {role.company}
                                        </h3>
                                        <p class="text-muted-foreground text-sm">{role.company_kind}</p>
                                    </div>
                                </div>
                                <div class="space-y-3">
                                    <div class="text-sm text-muted-foreground">{role.period}</div>
                                    <div class="inline-block px-3 py-1 bg-primary/10 text-primary rounded-full text-sm font-medium">
                                        {role.title}
                                    </div>
                                </div>
                            </div>

                            <div class="lg:w-2/3">
                                <h4 class="font-semibold text-lg text-foreground mb-4">
                                    "Key Achievements & Responsibilities"
                                </h4>
                                <div class="space-y-3">
                                    {role
                                        .achievements
                                        .iter()
                                        .enumerate()
                                        .map(|(i, achievement)| {
                                            view! {
                                                <Animated
                                                    motion=SLIDE_FROM_RIGHT
                                                    index=i
                                                    stagger=STAGGER_CHILDREN
                                                    class="flex items-start space-x-3 group"
                                                >
                                                    <span class="text-primary mt-0.5">"›"</span>
                                                    <p class="text-muted-foreground leading-relaxed">
                                                        {*achievement}
                                                    </p>
                                                </Animated>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="mt-6">
                                    <h5 class="font-medium text-foreground mb-3">"Technologies & Tools"</h5>
                                    <div class="flex flex-wrap gap-2">
                                        {role
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-3 py-1 bg-muted text-muted-foreground rounded-full text-sm hover:bg-primary/10 hover:text-primary transition-colors duration-200">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </Animated>
            </div>
        </RevealSection>
    }
}
