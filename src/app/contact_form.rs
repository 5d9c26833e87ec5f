use std::time::Duration;

use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::contact::{
    ContactBackend, ContactFormState, ContactRequest, LastResult, SubmitError, MESSAGE_LIMIT,
};

/// Fixed delay for the stubbed delivery.
const STUB_DELAY_MS: u64 = 800;

const INPUT_BASE: &str = "w-full bg-white/[0.04] border border-white/10 rounded-md p-3.5 text-gray-100 placeholder-gray-500 outline-none transition-colors focus-visible:ring-2 focus-visible:ring-purple-500/60 focus-visible:border-transparent";

/// Stand-in for the real submission backend. Resolves success after a
/// fixed delay; swap in a real [`ContactBackend`] to actually deliver.
pub struct StubBackend;

impl ContactBackend for StubBackend {
    fn deliver(&self, _request: ContactRequest, done: Box<dyn FnOnce(Result<(), SubmitError>)>) {
        set_timeout(move || done(Ok(())), Duration::from_millis(STUB_DELAY_MS));
    }
}

fn status_banner(result: LastResult) -> Option<impl IntoView> {
    let (class, text) = match result {
        LastResult::None => return None,
        LastResult::Success => (
            "border-green-600/40 bg-green-600/10 text-green-300",
            "Thanks! I'll get back to you soon.",
        ),
        LastResult::Error => (
            "border-red-600/40 bg-red-600/10 text-red-300",
            "Couldn't send right now. Please try again or email me directly.",
        ),
    };
    Some(view! {
        <div
            role="status"
            aria-live="polite"
            class=format!("mb-4 rounded-md border px-4 py-3 text-sm {class}")
        >
            {text}
        </div>
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());
    let form_ref = NodeRef::<html::Form>::new();
    let first_ref = NodeRef::<html::Input>::new();
    let last_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let field = |node_ref: NodeRef<html::Input>| {
            node_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default()
        };
        let subject = field(subject_ref);
        let request = ContactRequest {
            first_name: field(first_ref),
            last_name: field(last_ref),
            email: field(email_ref),
            subject: (!subject.trim().is_empty()).then_some(subject),
            message: state.with_untracked(|s| s.message.clone()),
        };

        let mut accepted = false;
        state.update(|s| accepted = s.begin_submit(&request).is_ok());
        if !accepted {
            // duplicate submit, or a blank required field the browser let through
            return;
        }

        StubBackend.deliver(
            request,
            Box::new(move |outcome| {
                let succeeded = outcome.is_ok();
                state.update(|s| s.complete(outcome));
                if succeeded {
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                }
            }),
        );
    };

    let is_submitting = move || state.with(|s| s.is_submitting);
    let counter = move || state.with(|s| format!("{}/{}", s.message_len(), MESSAGE_LIMIT));

    view! {
        <section id="contact" class="bg-[#0e1526] text-white py-24">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                // Section title
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-2 tracking-tight">"Get In Touch"</h2>
                    <p class="text-lg text-gray-300/90">
                        "Have a project in mind? Let's discuss how we can work together"
                    </p>
                    <div class="w-24 h-1 bg-gradient-to-r from-purple-600 to-blue-500 rounded-full mx-auto mt-4"></div>
                </div>

                <div class="flex flex-col lg:flex-row gap-10 lg:gap-20">
                    // Left: contact information
                    <div class="lg:w-2/5">
                        <h3 class="text-2xl font-semibold mb-4">"Let's Connect"</h3>
                        <p class="text-gray-400 mb-8">
                            "I'm always interested in hearing about new projects and opportunities. Whether you're a company looking to hire, or a fellow developer who wants to collaborate, I'd love to hear from you."
                        </p>

                        <div class="space-y-6">
                            <a
                                href="mailto:haleemakmal48@gmail.com"
                                class="flex items-start gap-4 group"
                                aria-label="Send me an email"
                            >
                                <div class="bg-purple-600/20 text-purple-400 w-12 h-12 flex items-center justify-center rounded-lg transition-colors group-hover:bg-purple-600/30">
                                    <i class="extra-email text-xl" aria-hidden="true"></i>
                                </div>
                                <div>
                                    <h4 class="font-semibold text-white">"Email"</h4>
                                    <p class="text-gray-300 group-hover:text-white transition-colors">
                                        "haleemakmal48@gmail.com"
                                    </p>
                                </div>
                            </a>

                            <a href="tel:+94776485166" class="flex items-start gap-4 group" aria-label="Call me">
                                <div class="bg-purple-600/20 text-purple-400 w-12 h-12 flex items-center justify-center rounded-lg transition-colors group-hover:bg-purple-600/30">
                                    <i class="extra-phone text-xl" aria-hidden="true"></i>
                                </div>
                                <div>
                                    <h4 class="font-semibold text-white">"Phone"</h4>
                                    <p class="text-gray-300 group-hover:text-white transition-colors">
                                        "+94 776485166"
                                    </p>
                                </div>
                            </a>

                            <a
                                href="https://maps.google.com/?q=Batticaloa, Sri Lanka"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-start gap-4 group"
                                aria-label="Open location on Google Maps"
                            >
                                <div class="bg-purple-600/20 text-purple-400 w-12 h-12 flex items-center justify-center rounded-lg transition-colors group-hover:bg-purple-600/30">
                                    <i class="extra-location text-xl" aria-hidden="true"></i>
                                </div>
                                <div>
                                    <h4 class="font-semibold text-white">"Location"</h4>
                                    <p class="text-gray-300 group-hover:text-white transition-colors">
                                        "Batticaloa, Sri Lanka"
                                    </p>
                                </div>
                            </a>
                        </div>
                    </div>

                    // Right: contact form
                    <div class="lg:w-3/5 bg-white/[0.04] p-6 sm:p-8 rounded-lg border border-white/10">
                        <h3 class="text-2xl font-semibold mb-6">"Send a Message"</h3>

                        {move || status_banner(state.with(|s| s.last_result))}

                        <form class="space-y-6" node_ref=form_ref on:submit=on_submit>
                            <div class="flex flex-col sm:flex-row gap-6">
                                <div class="sm:w-1/2">
                                    <label for="firstName" class="block mb-2 text-sm font-medium text-gray-300">
                                        "First Name " <span class="text-red-400">"*"</span>
                                    </label>
                                    <input
                                        type="text"
                                        id="firstName"
                                        name="firstName"
                                        autocomplete="given-name"
                                        required
                                        node_ref=first_ref
                                        class=INPUT_BASE
                                    />
                                </div>
                                <div class="sm:w-1/2">
                                    <label for="lastName" class="block mb-2 text-sm font-medium text-gray-300">
                                        "Last Name " <span class="text-red-400">"*"</span>
                                    </label>
                                    <input
                                        type="text"
                                        id="lastName"
                                        name="lastName"
                                        autocomplete="family-name"
                                        required
                                        node_ref=last_ref
                                        class=INPUT_BASE
                                    />
                                </div>
                            </div>

                            <div>
                                <label for="email" class="block mb-2 text-sm font-medium text-gray-300">
                                    "Email " <span class="text-red-400">"*"</span>
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    autocomplete="email"
                                    required
                                    node_ref=email_ref
                                    class=INPUT_BASE
                                />
                            </div>

                            <div>
                                <label for="subject" class="block mb-2 text-sm font-medium text-gray-300">
                                    "Subject"
                                </label>
                                <input
                                    type="text"
                                    id="subject"
                                    name="subject"
                                    autocomplete="organization-title"
                                    node_ref=subject_ref
                                    class=INPUT_BASE
                                />
                            </div>

                            <div>
                                <label for="message" class="block mb-2 text-sm font-medium text-gray-300">
                                    "Message " <span class="text-red-400">"*"</span>
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    required
                                    maxlength=MESSAGE_LIMIT.to_string()
                                    prop:value=move || state.with(|s| s.message.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| s.edit_message(&value));
                                    }
                                    placeholder="Tell me about your project…"
                                    aria-describedby="message-help"
                                    class=format!("{INPUT_BASE} resize-y")
                                ></textarea>
                                <div
                                    id="message-help"
                                    class="mt-1 flex items-center justify-between text-xs text-gray-400"
                                >
                                    <span>"Share goals, budget range, and timeline if you can."</span>
                                    <span>{counter}</span>
                                </div>
                            </div>

                            <button
                                type="submit"
                                disabled=is_submitting
                                class="w-full bg-gradient-to-r from-purple-600 to-blue-500 text-white font-semibold py-3 px-6 rounded-md hover:opacity-95 transition-opacity duration-300 flex items-center justify-center gap-2 disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || if is_submitting() { "Sending…" } else { "Send Message" }}
                                <i class="extra-send" aria-hidden="true"></i>
                            </button>
                            <p class="text-[11px] text-gray-500 text-center">
                                "Prefer email? Write to me at "
                                <a class="underline text-gray-300" href="mailto:haleemakmal48@gmail.com">
                                    "haleemakmal48@gmail.com"
                                </a>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
