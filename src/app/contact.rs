use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::{
    reveal::{Animated, RevealSection},
    toast::use_toasts,
};
use crate::{
    contact::{deliver, ContactForm, Field, SubmitRejected},
    content::{contact_channels, AVAILABILITY, PROFILE},
    motion::{SLIDE_FROM_LEFT, STAGGER_CHILDREN},
    nav::SectionId,
    relay::{EmailRelay, RelayConfig},
};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border border-border bg-background text-foreground placeholder-muted-foreground focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Contact class="py-20 bg-section-bg">
            <div class="container mx-auto px-4 max-w-6xl">
                <Animated class="text-center mb-16">
                    <span class="text-accent font-medium text-sm tracking-wide uppercase mb-2 block">
                        "Get In Touch"
                    </span>
                    <h2 class="font-poppins font-bold text-4xl md:text-5xl text-foreground mb-4">
                        "Let's Start a " <span class="text-primary">"Conversation"</span>
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "I'm always excited to discuss new opportunities, answer questions, or just have a friendly chat about technology and development."
                    </p>
                </Animated>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Animated index=1>
                        <ContactInfo />
                    </Animated>
                    <Animated index=2>
                        <div class="border border-border/50 shadow-lg rounded-lg p-6">
                            <h3 class="font-poppins font-semibold text-xl text-foreground mb-6">
                                "Send a Message"
                            </h3>
                            <MessageForm />
                            <div class="mt-6 pt-6 border-t border-border/50">
                                <p class="text-sm text-muted-foreground text-center">
                                    "Usually respond within 24 hours ⚡"
                                </p>
                            </div>
                        </div>
                    </Animated>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="mb-8">
            <h3 class="font-poppins font-semibold text-2xl text-foreground mb-4">"Let's Connect"</h3>
            <p class="text-muted-foreground leading-relaxed">
                "Whether you have a project in mind, need technical consultation, or want to explore collaboration opportunities, I'd love to hear from you."
            </p>
        </div>
        <div class="space-y-4">
            {contact_channels()
                .into_iter()
                .enumerate()
                .map(|(i, channel)| {
                    let (target, rel) = if channel.opens_new_tab() {
                        ("_blank", Some("noopener noreferrer"))
                    } else {
                        ("_self", None)
                    };
                    view! {
                        <Animated motion=SLIDE_FROM_LEFT index=i stagger=STAGGER_CHILDREN>
                            <a
                                href=channel.href
                                target=target
                                rel=rel
                                class="flex items-center space-x-4 group border border-border/50 hover:border-primary/20 hover:shadow-md transition-all duration-300 rounded-lg p-4"
                            >
                                <div class="w-12 h-12 bg-primary/10 rounded-lg flex items-center justify-center text-xl group-hover:bg-primary/20 transition-colors duration-300">
                                    {channel.icon}
                                </div>
                                <div>
                                    <div class="font-medium text-foreground group-hover:text-primary transition-colors duration-300">
                                        {channel.label}
                                    </div>
                                    <div class="text-sm text-muted-foreground">{channel.value}</div>
                                </div>
                            </a>
                        </Animated>
                    }
                })
                .collect_view()}
        </div>
        <div class="mt-8 p-6 bg-gradient-portfolio rounded-xl text-white">
            <h4 class="font-semibold text-lg mb-2">"Quick Info"</h4>
            <div class="space-y-2 text-sm text-white/80">
                <div>"📍 " {PROFILE.location}</div>
                {AVAILABILITY
                    .iter()
                    .map(|line| view! { <div>"• " {*line}</div> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(ContactForm::default());
    let relay_config = StoredValue::new(RelayConfig::from_build_env());

    let value_of = move |field: Field| move || form.with(|f| f.fields().get(field).to_string());
    let set_value = move |field: Field| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| f.set_field(field, value));
        }
    };
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // begin_submit flips to Submitting inside this update, so a second
        // submit event is rejected before the first request is even sent
        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(SubmitRejected::InFlight)) => {
                log::debug!("ignoring submit while a message is in flight");
                return;
            }
            Some(Err(SubmitRejected::Invalid(e))) => {
                log::debug!("contact form incomplete: {e}");
                return;
            }
            None => return,
        };
        let config = relay_config.get_value();
        spawn_local(async move {
            let outcome = match config {
                Ok(config) => deliver(&EmailRelay::new(config), &submission).await,
                Err(e) => {
                    log::error!("contact submission failed: {e}");
                    Err(e)
                }
            };
            if let Some(notice) = form.try_update(|f| f.settle(&outcome)) {
                toasts.push(notice);
            }
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label for="name" class="block text-sm font-medium text-foreground mb-2">
                    "Your Name"
                </label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    placeholder="Enter your full name"
                    required
                    class=INPUT_CLASS
                    prop:value=value_of(Field::Name)
                    on:input=set_value(Field::Name)
                />
            </div>
            <div>
                <label for="email" class="block text-sm font-medium text-foreground mb-2">
                    "Email Address"
                </label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    placeholder="Enter your email address"
                    required
                    class=INPUT_CLASS
                    prop:value=value_of(Field::Email)
                    on:input=set_value(Field::Email)
                />
            </div>
            <div>
                <label for="message" class="block text-sm font-medium text-foreground mb-2">
                    "Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    placeholder="Tell me about your project or question..."
                    required
                    rows="6"
                    class=format!("{INPUT_CLASS} resize-none")
                    prop:value=value_of(Field::Message)
                    on:input=set_value(Field::Message)
                ></textarea>
            </div>
            {move || {
                form.with(|f| f.validation_error())
                    .map(|e| {
                        view! {
                            <p class="text-sm text-red-500" role="alert">
                                {e.to_string()}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="w-full bg-primary hover:bg-primary/90 text-primary-foreground font-medium py-3 rounded-md disabled:opacity-60 disabled:cursor-not-allowed"
                disabled=submitting
                aria-busy=move || submitting().to_string()
            >
                <Show
                    when=submitting
                    fallback=|| view! { <span>"➤ Send Message"</span> }
                >
                    <span class="flex items-center justify-center space-x-2">
                        <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                        <span>"Sending..."</span>
                    </span>
                </Show>
            </button>
            {move || {
                form.with(|f| f.notice())
                    .map(|notice| {
                        let tone = if notice.is_error() { "text-red-500" } else { "text-green-600" };
                        view! {
                            <p class=format!("text-sm text-center {tone}") role="status">
                                {notice.title()}
                            </p>
                        }
                    })
            }}
        </form>
    }
}
