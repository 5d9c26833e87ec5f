use std::cell::Cell;
use std::time::Duration;

use leptos::{either::Either, ev::KeyboardEvent, html, prelude::*};
use leptos_router::{components::*, hooks::use_location};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::nav::{NavAction, NavState, NavTarget, RetryBudget, NAV_LINKS};

use super::scroll;

/// Anchor targets may still be mounting when navigation lands, so the
/// scroll manager retries on a short interval before giving up.
const SCROLL_RETRY_MS: u64 = 50;
const SCROLL_MAX_ATTEMPTS: u32 = 20;

const FOCUSABLE_SELECTOR: &str = "a, button, [tabindex]:not([tabindex='-1'])";

fn menu_focusables(menu: &web_sys::Element) -> Option<(web_sys::HtmlElement, web_sys::HtmlElement)> {
    let list = menu.query_selector_all(FOCUSABLE_SELECTOR).ok()?;
    let len = list.length();
    if len == 0 {
        return None;
    }
    let first = list.get(0)?.dyn_into::<web_sys::HtmlElement>().ok()?;
    let last = list.get(len - 1)?.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some((first, last))
}

fn has_focus(el: &web_sys::HtmlElement) -> bool {
    document()
        .active_element()
        .is_some_and(|active| active.is_same_node(Some(el.unchecked_ref())))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let toggle_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Div>::new();
    let retry_handle = StoredValue::new(None::<IntervalHandle>);

    let clear_retry = move || {
        retry_handle.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    };

    let close_menu = move |_| nav.update(|s| s.apply(NavAction::CloseMenu));
    let menu_open = Memo::new(move |_| nav.with(|s| s.menu_open));

    // Opening the menu locks background scroll and moves focus into the
    // sheet; closing restores both.
    Effect::new(move |prev: Option<bool>| {
        let open = menu_open.get();
        if let Some(body) = document().body() {
            let style = body.style();
            if open {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
        if open {
            // defer until the sheet has rendered
            set_timeout(
                move || {
                    if let Some(menu) = menu_ref.get_untracked() {
                        if let Some((first, _)) = menu_focusables(&menu) {
                            let _ = first.focus();
                        }
                    }
                },
                Duration::ZERO,
            );
        } else if prev == Some(true) {
            if let Some(toggle) = toggle_ref.get_untracked() {
                let _ = toggle.focus();
            }
        }
        open
    });

    // Escape dismisses the menu; Tab cycles within it first <-> last.
    let _ = use_event_listener(use_document(), leptos::ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            nav.update(|s| s.apply(NavAction::CloseMenu));
            return;
        }
        if ev.key() != "Tab" || !menu_open.get_untracked() {
            return;
        }
        let Some(menu) = menu_ref.get_untracked() else {
            return;
        };
        let Some((first, last)) = menu_focusables(&menu) else {
            return;
        };
        if ev.shift_key() && has_focus(&first) {
            ev.prevent_default();
            let _ = last.focus();
        } else if !ev.shift_key() && has_focus(&last) {
            ev.prevent_default();
            let _ = first.focus();
        }
    });

    // Scroll manager: track the active fragment and bring its section
    // into view, retrying while the page content mounts. A route change
    // without a fragment scrolls to the top instead.
    let location = use_location();
    Effect::new(move |_| {
        let hash = location.hash.get();
        location.pathname.track();
        nav.update(|s| s.apply(NavAction::LocationChanged(hash.clone())));
        clear_retry();
        let fragment = hash.trim_start_matches('#').to_string();
        if fragment.is_empty() {
            scroll::to_top();
            return;
        }
        if scroll::to_section(&fragment) {
            return;
        }
        let budget = Cell::new(RetryBudget::new(SCROLL_MAX_ATTEMPTS));
        let result = set_interval_with_handle(
            move || {
                if scroll::to_section(&fragment) {
                    clear_retry();
                    return;
                }
                let mut remaining = budget.get();
                if !remaining.spend() {
                    // degraded but not fatal: the anchor never appeared
                    log::debug!("scroll target #{fragment} never mounted; giving up");
                    clear_retry();
                }
                budget.set(remaining);
            },
            Duration::from_millis(SCROLL_RETRY_MS),
        );
        if let Ok(handle) = result {
            retry_handle.set_value(Some(handle));
        }
    });
    on_cleanup(clear_retry);

    view! {
        // Skip link (same-page a11y)
        <a
            href="#home"
            class="sr-only focus:not-sr-only fixed top-2 left-2 z-[60] rounded bg-purple-600 px-3 py-2 text-white"
        >
            "Skip to content"
        </a>

        <nav
            id=scroll::NAV_ELEMENT_ID
            class="fixed inset-x-0 top-0 z-50 border-b border-white/10 bg-[#0f0f1b]/70 backdrop-blur-md text-white"
        >
            <div class="container mx-auto max-w-7xl px-4 py-4 flex justify-between items-center">
                <A
                    href="/#home"
                    attr:class="text-2xl font-bold bg-gradient-to-r from-purple-400 to-indigo-400 bg-clip-text text-transparent"
                >
                    "Portfolio"
                </A>

                // Desktop navigation
                <ul class="hidden md:flex items-center gap-1">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            let active = Signal::derive(move || nav.with(|s| s.is_active(href)));
                            let class = Signal::derive(move || {
                                format!(
                                    "rounded-md px-3 py-2 text-sm font-medium {}",
                                    if active.get() {
                                        "text-white bg-white/5"
                                    } else {
                                        "text-gray-200 hover:text-white hover:bg-white/5"
                                    },
                                )
                            });
                            view! {
                                <li>
                                    <NavLink href=href class=class active=active>
                                        {link.label}
                                    </NavLink>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="ml-2">
                        // dead placeholder: no admin backend exists behind this link
                        <A
                            href="/admin-login"
                            attr:class="rounded-md bg-gradient-to-r from-purple-600 to-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:opacity-95"
                        >
                            "Dashboard"
                        </A>
                    </li>
                </ul>

                // Mobile menu toggle
                <div class="md:hidden">
                    <button
                        node_ref=toggle_ref
                        type="button"
                        on:click=move |_| nav.update(|s| s.apply(NavAction::ToggleMenu))
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls="mobile-menu"
                        aria-label=move || {
                            if menu_open.get() { "Close menu" } else { "Open menu" }
                        }
                        class="p-2 rounded-md hover:bg-white/10"
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            class="h-6 w-6"
                            aria-hidden="true"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke="currentColor"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M4 6h16M4 12h16m-7 6h7"
                            />
                        </svg>
                    </button>
                </div>
            </div>
        </nav>

        // Mobile overlay
        <button
            aria-hidden=move || (!menu_open.get()).to_string()
            tabindex="-1"
            class=move || {
                format!(
                    "fixed inset-0 z-40 bg-black/60 backdrop-blur-sm transition-opacity duration-300 md:hidden {}",
                    if menu_open.get() {
                        "opacity-100 pointer-events-auto"
                    } else {
                        "opacity-0 pointer-events-none"
                    },
                )
            }
            on:click=close_menu
        ></button>

        // Mobile side sheet
        <div
            id="mobile-menu"
            node_ref=menu_ref
            role="dialog"
            aria-modal="true"
            aria-label="Mobile navigation"
            class=move || {
                format!(
                    "fixed top-0 left-0 z-50 h-full w-[70%] md:hidden transform transition-transform duration-300 ease-out {}",
                    if menu_open.get() { "translate-x-0" } else { "-translate-x-full" },
                )
            }
        >
            <div class="relative h-full overflow-hidden bg-[#0b0f1a]/90 backdrop-blur-xl border-r border-white/10 shadow-2xl rounded-r-2xl px-5 pt-4 pb-6 flex flex-col">
                <div class="flex items-center justify-between">
                    <span on:click=close_menu>
                        <A
                            href="/#home"
                            attr:class="text-xl font-bold bg-gradient-to-r from-purple-400 to-indigo-400 bg-clip-text text-transparent"
                        >
                            "Portfolio"
                        </A>
                    </span>
                    <button
                        on:click=close_menu
                        aria-label="Collapse menu"
                        class="rounded-full p-2 text-white/90 hover:bg-white/10 shadow-sm"
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            class="h-5 w-5"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            aria-hidden="true"
                        >
                            <rect x="3" y="4" width="18" height="16" rx="2" />
                            <path d="M9 4v16" />
                            <path d="M14 15l-3-3 3-3" />
                        </svg>
                    </button>
                </div>

                <ul class="mt-8 space-y-2">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let href = link.href;
                            let active = Signal::derive(move || nav.with(|s| s.is_active(href)));
                            let class = Signal::derive(move || {
                                format!(
                                    "group flex items-center justify-between rounded-xl px-4 py-3 text-xl font-semibold {}",
                                    if active.get() {
                                        "bg-white/10 text-white"
                                    } else {
                                        "text-gray-200 hover:text-white hover:bg-white/10"
                                    },
                                )
                            });
                            view! {
                                <li
                                    style=format!("transition-delay: {}ms", i * 40)
                                    class="transform transition-all duration-300"
                                    on:click=close_menu
                                >
                                    <NavLink href=href class=class active=active>
                                        {link.label}
                                    </NavLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="flex-1"></div>

                // Quick actions
                <div class="space-y-3">
                    <div class="grid grid-cols-2 gap-3" on:click=close_menu>
                        <NavLink
                            href="#contact"
                            class=Signal::derive(|| {
                                "rounded-lg bg-gradient-to-r from-purple-600 to-indigo-500 px-4 py-3 text-center font-semibold hover:opacity-95"
                                    .to_string()
                            })
                        >
                            "Contact"
                        </NavLink>
                        <a
                            href="/cv.pdf"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="rounded-lg border border-white/20 bg-white/5 px-4 py-3 text-center font-semibold text-gray-200 hover:bg-white/10 hover:text-white"
                        >
                            "Resume"
                        </a>
                    </div>

                    // Socials
                    <div class="flex items-center justify-center gap-4 pt-1">
                        <a
                            href="https://github.com/haleemakmal"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="rounded-full p-2 text-gray-300 hover:text-white hover:bg-white/10"
                            aria-label="GitHub"
                        >
                            <i class="devicon-github-plain text-xl"></i>
                        </a>
                        <a
                            href="https://linkedin.com/in/haleemakmal"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="rounded-full p-2 text-gray-300 hover:text-white hover:bg-white/10"
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain text-xl"></i>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// A navigation link dispatched on its parsed [`NavTarget`]: external
/// URLs get a plain anchor in a new tab, internal paths and section
/// anchors go through the router (anchors via `/#id` so the scroll
/// manager handles them from any route).
#[component]
fn NavLink(
    href: &'static str,
    #[prop(into)] class: Signal<String>,
    #[prop(optional, into)] active: Signal<bool>,
    children: Children,
) -> impl IntoView {
    match NavTarget::parse(href) {
        NavTarget::External(url) => Either::Left(view! {
            <a href=url target="_blank" rel="noopener noreferrer" class=move || class.get()>
                {children()}
            </a>
        }),
        target => Either::Right(view! {
            <A
                href=target.href()
                attr:class=move || class.get()
                attr:aria-current=move || if active.get() { Some("page") } else { None }
            >
                {children()}
            </A>
        }),
    }
}
