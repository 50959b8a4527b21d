use leptos::prelude::*;

use super::{
    reveal::{provide_reveal, reveal_on_mount, Animated},
    scroll::scroll_to_section,
};
use crate::{
    content::PROFILE,
    motion::{HERO_ITEM, HERO_STAGGER, HERO_TEXT},
    nav::SectionId,
};

const ICON_BUTTON: &str =
    "inline-flex items-center justify-center w-10 h-10 rounded-md text-white hover:bg-white/10 transition-colors";

#[component]
pub fn HeroSection() -> impl IntoView {
    provide_reveal(reveal_on_mount(), HERO_STAGGER);
    let item = HERO_ITEM.delayed(400);
    let initial = PROFILE.name.chars().next().unwrap_or('?');

    view! {
        <section id=SectionId::Home.as_str() class="min-h-screen relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-portfolio"></div>
            <div class="absolute top-20 left-10 w-20 h-20 bg-white/10 rounded-full blur-xl"></div>
            <div class="absolute top-40 right-20 w-32 h-32 bg-white/5 rounded-full blur-2xl"></div>
            <div class="absolute bottom-20 left-20 w-24 h-24 bg-white/10 rounded-full blur-xl"></div>

            <div class="relative z-10 container mx-auto px-4 lg:px-8 xl:px-20 h-screen flex items-center">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 xl:gap-20 items-center w-full max-w-7xl mx-auto">
                    <Animated motion=HERO_TEXT class="text-white order-2 lg:order-1">
                        <Animated motion=item index=0 class="mb-6">
                            <span class="inline-block px-4 py-2 bg-white/20 backdrop-blur-sm rounded-full text-sm lg:text-base font-medium mb-4">
                                "👋 Hello, I'm"
                            </span>
                        </Animated>
                        <Animated motion=item index=1>
                            <h1 class="font-poppins font-bold text-5xl md:text-6xl lg:text-7xl mb-4 leading-tight">
                                {PROFILE.name}
                            </h1>
                        </Animated>
                        <Animated motion=item index=2>
                            <h2 class="text-xl md:text-2xl lg:text-3xl font-medium mb-6 text-white/90">
                                {PROFILE.headline}
                            </h2>
                        </Animated>
                        <Animated motion=item index=3>
                            <p class="text-lg lg:text-xl text-white/80 mb-8 max-w-md lg:max-w-lg leading-relaxed">
                                {PROFILE.tagline}
                            </p>
                        </Animated>
                        <Animated motion=item index=4 class="flex flex-col sm:flex-row gap-4 mb-8">
                            <button
                                class="bg-white text-primary font-medium px-8 py-3 rounded-md"
                                on:click=move |_| scroll_to_section(SectionId::Contact)
                            >
                                "Get In Touch"
                            </button>
                            <a
                                href=PROFILE.resume
                                target="_blank"
                                rel="noopener noreferrer"
                                class="border border-white/40 text-white font-medium px-8 py-3 rounded-md text-center hover:bg-white/10 transition-colors"
                            >
                                "👁 Preview CV"
                            </a>
                        </Animated>
                        <Animated motion=item index=5 class="flex space-x-4">
                            <a
                                href=PROFILE.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class=ICON_BUTTON
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href=PROFILE.linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class=ICON_BUTTON
                                aria-label="LinkedIn Profile"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a href=PROFILE.mailto() class=ICON_BUTTON aria-label="Email">
                                "✉"
                            </a>
                        </Animated>
                    </Animated>

                    <div class="order-1 lg:order-2 flex justify-center mt-10 sm:mt-20 lg:mt-0">
                        <div
                            class="w-72 h-72 md:w-96 md:h-96 rounded-full border-4 border-white/20 shadow-2xl bg-white/10 flex items-center justify-center font-poppins font-bold text-8xl text-white"
                            role="img"
                            aria-label=PROFILE.name
                        >
                            {initial.to_string()}
                        </div>
                    </div>
                </div>

                <Animated
                    motion=HERO_ITEM.delayed(2000)
                    class="absolute bottom-8 left-1/2 -translate-x-1/2"
                >
                    <button
                        class="text-white/80 hover:text-white transition-colors duration-200 animate-bounce"
                        aria-label="Scroll to about"
                        on:click=move |_| scroll_to_section(SectionId::About)
                    >
                        "↓"
                    </button>
                </Animated>
            </div>
        </section>
    }
}
