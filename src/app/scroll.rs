use leptos::{ev::MouseEvent, prelude::*};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::nav::SectionId;

/// Smooth-scrolls so the section's top meets the viewport top. Does nothing
/// if the section isn't on the page.
pub fn scroll_to_section(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.as_str()) else {
        log::debug!("section #{section} not found, not scrolling");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Click handler for links. A `#section` link scrolls smoothly instead of
/// jumping; any other link keeps the browser's default behavior.
pub fn follow_link(ev: &MouseEvent, href: &str) {
    if let Some(section) = SectionId::from_href(href) {
        ev.prevent_default();
        scroll_to_section(section);
    }
}
