use chrono::Datelike;
use leptos::prelude::*;

use super::scroll;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-[#0D0D0D] text-gray-400 py-8 px-4 border-t border-white/10">
            <div class="container mx-auto max-w-7xl">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="text-sm text-center md:text-left">
                        {format!("© {year} Haleem Akmal. All rights reserved.")}
                    </div>

                    <div class="flex items-center gap-6">
                        <a
                            href="https://github.com/haleemakmal"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-white transition-colors duration-300"
                            aria-label="GitHub"
                        >
                            <i class="devicon-github-plain text-xl"></i>
                        </a>
                        <a
                            href="https://linkedin.com/in/haleemakmal"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-white transition-colors duration-300"
                            aria-label="LinkedIn"
                        >
                            <i class="devicon-linkedin-plain text-xl"></i>
                        </a>

                        // Back to top
                        <button
                            on:click=move |_| scroll::to_top()
                            class="bg-white/[0.05] p-2 rounded-full hover:bg-purple-600 hover:text-white transition-all duration-300"
                            aria-label="Scroll back to top"
                        >
                            <i class="extra-arrow-up" aria-hidden="true"></i>
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
