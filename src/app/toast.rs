use std::time::Duration;

use leptos::prelude::*;

use crate::contact::Notice;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Page-wide notification stack.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Toast { id, notice }));

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        items: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div
            class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-full max-w-sm px-4 sm:px-0"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = if toast.notice.is_error() {
                        "flex items-start gap-3 p-4 rounded-lg shadow-lg border bg-red-600 text-white border-red-700"
                    } else {
                        "flex items-start gap-3 p-4 rounded-lg shadow-lg border bg-background text-foreground border-border"
                    };
                    view! {
                        <div class=class>
                            <div class="flex-1">
                                <p class="font-semibold">{toast.notice.title()}</p>
                                <p class="text-sm opacity-90">{toast.notice.description()}</p>
                            </div>
                            <button
                                class="opacity-70 hover:opacity-100"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.dismiss(toast.id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
