use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the fixed navbar element; its rendered height sets the anchor
/// scroll offset.
pub const NAV_ELEMENT_ID: &str = "site-nav";
const NAV_FALLBACK_HEIGHT: f64 = 72.0;
const NAV_GAP: f64 = 8.0;

fn smooth_scroll_to(top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

pub fn to_top() {
    smooth_scroll_to(0.0);
}

/// Scroll the section with `id` so its top lands just below the navbar.
/// Returns `false` when the target is not in the document yet (content
/// still mounting); callers retry on an interval.
pub fn to_section(id: &str) -> bool {
    let document = document();
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };
    let nav_height = document
        .get_element_by_id(NAV_ELEMENT_ID)
        .and_then(|nav| nav.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(NAV_FALLBACK_HEIGHT);
    let page_offset = window().page_y_offset().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + page_offset - nav_height - NAV_GAP;
    smooth_scroll_to(top);
    true
}
