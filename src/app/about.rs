use leptos::prelude::*;

use super::reveal::{Animated, RevealSection};
use crate::{
    content::{BIO, CORE_STRENGTHS, EDUCATION, QUICK_STATS},
    motion::POP_IN,
    nav::SectionId,
};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::About class="py-20 bg-section-bg">
            <div class="container mx-auto px-4 max-w-6xl">
                <Animated class="text-center mb-16">
                    <span class="text-accent font-medium text-sm tracking-wide uppercase mb-2 block">
                        "About Me"
                    </span>
                    <h2 class="font-poppins font-bold text-4xl md:text-5xl text-foreground mb-4">
                        "Designing Solutions, Not " <br />
                        <span class="text-primary">"Just Visuals"</span>
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "I'm passionate about creating digital experiences that not only look great but also solve real problems and deliver exceptional user value."
                    </p>
                </Animated>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <Animated index=1>
                        <h3 class="font-poppins font-semibold text-2xl text-foreground mb-6">
                            "Front-End Developer with a Passion for Excellence"
                        </h3>
                        {BIO
                            .iter()
                            .map(|para| {
                                view! {
                                    <p class="text-muted-foreground leading-relaxed mb-6">{*para}</p>
                                }
                            })
                            .collect_view()}
                        <div class="border border-border/50 shadow-sm rounded-lg p-6 flex items-start space-x-4">
                            <span class="text-2xl">"🎓"</span>
                            <div>
                                <h4 class="font-semibold text-foreground mb-1">{EDUCATION.degree}</h4>
                                <p class="text-muted-foreground text-sm mb-2">{EDUCATION.school}</p>
                                <div class="flex items-center space-x-4 text-sm text-muted-foreground">
                                    <span>{EDUCATION.years}</span>
                                    <span>{EDUCATION.grade}</span>
                                </div>
                            </div>
                        </div>
                    </Animated>

                    <Animated index=2>
                        <h3 class="font-poppins font-semibold text-2xl text-foreground mb-6">
                            "Core Strengths & Values"
                        </h3>
                        <div class="grid grid-cols-2 gap-4 mb-8">
                            {CORE_STRENGTHS
                                .iter()
                                .enumerate()
                                .map(|(i, (emoji, strength))| {
                                    view! {
                                        <Animated motion=POP_IN index=i class="group">
                                            <div class="border border-border/50 hover:border-primary/20 hover:shadow-md transition-all duration-300 rounded-lg p-6 text-center">
                                                <div class="w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center mx-auto mb-3">
                                                    <span class="text-2xl">{*emoji}</span>
                                                </div>
                                                <h4 class="font-semibold text-foreground group-hover:text-primary transition-colors duration-300">
                                                    {*strength}
                                                </h4>
                                            </div>
                                        </Animated>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="grid grid-cols-3 gap-4">
                            {QUICK_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="font-poppins font-bold text-3xl text-primary mb-1">
                                                {stat.value}
                                            </div>
                                            <div class="text-sm text-muted-foreground">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Animated>
                </div>
            </div>
        </RevealSection>
    }
}
