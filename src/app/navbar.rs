use leptos::{ev::MouseEvent, prelude::*};

use super::scroll::follow_link;
use crate::{content::PROFILE, nav::SectionId};

#[component]
pub fn NavBar() -> impl IntoView {
    let (open, set_open) = signal(false);

    let go = move |ev: MouseEvent, href: &str| {
        set_open.set(false);
        follow_link(&ev, href);
    };
    let home = SectionId::Home.href();

    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-background/80 backdrop-blur border-b border-border/50">
            <div class="container mx-auto px-4 lg:px-8 flex flex-wrap items-center justify-between min-h-16">
                <a
                    href=home.clone()
                    class="font-poppins font-bold text-xl text-primary py-4"
                    on:click=move |ev| go(ev, &home)
                >
                    {PROFILE.name}
                </a>
                <button
                    class="md:hidden p-2 text-foreground"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    "☰"
                </button>
                <ul class=move || {
                    if open.get() {
                        "flex flex-col w-full pb-4 gap-2 md:flex md:flex-row md:w-auto md:pb-0 md:gap-6"
                    } else {
                        "hidden md:flex md:flex-row md:gap-6"
                    }
                }>
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            let href = section.href();
                            view! {
                                <li>
                                    <a
                                        href=href.clone()
                                        class="text-foreground/80 hover:text-primary transition-colors duration-200"
                                        on:click=move |ev| go(ev, &href)
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
