use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{
    motion::{Motion, RevealOnce, Stagger, FADE_IN_UP, STAGGER_CHILDREN},
    nav::SectionId,
};

#[derive(Debug, Clone, Copy)]
struct RevealContext {
    revealed: Signal<bool>,
    stagger: Stagger,
}

/// Turns a visibility signal into one that flips to `true` the first time
/// the element is in view and stays there.
pub fn reveal_once(in_view: Signal<bool>) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    let mut latch = RevealOnce::default();
    Effect::new(move |_| {
        if latch.observe(in_view.get()) {
            set_revealed.set(true);
        }
    });
    revealed.into()
}

/// Reveal as soon as the page is interactive, for content above the fold.
pub fn reveal_on_mount() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

/// Makes `revealed` drive every [`Animated`] below the current owner.
pub fn provide_reveal(revealed: Signal<bool>, stagger: Stagger) {
    provide_context(RevealContext { revealed, stagger });
}

#[component]
pub fn RevealSection(
    section: SectionId,
    #[prop(into)] class: String,
    #[prop(default = STAGGER_CHILDREN)] stagger: Stagger,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    provide_reveal(reveal_once(use_element_visibility(node)), stagger);

    view! {
        <section id=section.as_str() class=class node_ref=node>
            {children()}
        </section>
    }
}

/// One animated child. `index` is its place in the stagger sequence of the
/// enclosing reveal, or of `stagger` when given.
#[component]
pub fn Animated(
    #[prop(default = FADE_IN_UP)] motion: Motion,
    #[prop(default = 0)] index: usize,
    #[prop(optional)] stagger: Option<Stagger>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = expect_context::<RevealContext>();
    let delay = stagger.unwrap_or(ctx.stagger).delay(index);
    let style = move || motion.style(ctx.revealed.get(), delay);

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
