use chrono::{Datelike, Utc};
use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::{
    reveal::{provide_reveal, reveal_once, Animated},
    scroll::{follow_link, scroll_to_top},
};
use crate::{
    content::{BUILT_WITH, PROFILE},
    motion::{BACK_TO_TOP, FOOTER_ITEM, FOOTER_STAGGER},
    nav::SectionId,
};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let node = NodeRef::<html::Footer>::new();
    provide_reveal(reveal_once(use_element_visibility(node)), FOOTER_STAGGER);
    let year = Utc::now().year();

    view! {
        <footer node_ref=node class="bg-foreground text-background py-12 relative">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    <Animated motion=FOOTER_ITEM index=0 class="space-y-4">
                        <h3 class="font-poppins font-bold text-2xl text-primary">{PROFILE.name}</h3>
                        <p class="text-background/80 leading-relaxed">
                            "Front-End Developer passionate about creating exceptional digital experiences with modern technologies and clean code."
                        </p>
                        <div class="text-sm text-background/70">
                            "Made with " <span class="text-red-400">"♥"</span> " using Rust & Leptos"
                        </div>
                    </Animated>

                    <Animated motion=FOOTER_ITEM index=1 class="space-y-4">
                        <h4 class="font-semibold text-lg text-background">"Quick Links"</h4>
                        <div class="space-y-2">
                            {SectionId::QUICK_LINKS
                                .into_iter()
                                .map(|section| {
                                    let href = section.href();
                                    view! {
                                        <a
                                            href=href.clone()
                                            class="block text-background/80 hover:text-primary transition-colors duration-200"
                                            on:click=move |ev| follow_link(&ev, &href)
                                        >
                                            {section.label()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Animated>

                    <Animated motion=FOOTER_ITEM index=2 class="space-y-4">
                        <h4 class="font-semibold text-lg text-background">"Get in Touch"</h4>
                        <div class="space-y-2 text-background/80">
                            <div>
                                <span class="block">"Email:"</span>
                                <a
                                    href=PROFILE.mailto()
                                    class="text-primary hover:text-primary/80 transition-colors duration-200"
                                >
                                    {PROFILE.email}
                                </a>
                            </div>
                            <div>
                                <span class="block">"Phone:"</span>
                                <a
                                    href=PROFILE.tel()
                                    class="text-primary hover:text-primary/80 transition-colors duration-200"
                                >
                                    {PROFILE.phone}
                                </a>
                            </div>
                        </div>
                    </Animated>
                </div>

                <Animated
                    motion=FOOTER_ITEM
                    index=3
                    class="border-t border-background/20 pt-8 flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0"
                >
                    <div class="text-background/70 text-sm">
                        {format!("© {year} {}. All rights reserved.", PROFILE.name)}
                    </div>
                    <div class="flex items-center space-x-4">
                        <span class="text-background/70 text-sm">"Built with modern technologies"</span>
                        <div class="flex space-x-2">
                            {BUILT_WITH
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-2 py-1 bg-primary/20 text-primary rounded text-xs">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Animated>

                <Animated motion=BACK_TO_TOP class="absolute -top-6 right-8">
                    <button
                        class="w-12 h-12 bg-primary hover:bg-primary/90 text-primary-foreground rounded-full shadow-lg"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        "↑"
                    </button>
                </Animated>
            </div>
        </footer>
    }
}
