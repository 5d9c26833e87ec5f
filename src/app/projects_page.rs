use leptos::prelude::*;
use leptos_meta::Title;

use crate::projects::{Category, CategoryFilter, FilterState, ALL_PROJECTS};

use super::showcase::ProjectCard;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(FilterState::default());
    // recomputed on every keystroke and chip click; cheap at this size
    let filtered = Memo::new(move |_| {
        filter.with(|f| {
            f.apply(&ALL_PROJECTS)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let chips = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.iter().copied().map(CategoryFilter::Only))
        .collect::<Vec<_>>();

    view! {
        <Title text="My Projects" />
        <div class="min-h-screen bg-[#04060b] text-white pt-28 pb-24 px-4">
            <div class="container mx-auto max-w-7xl">
                // Header
                <header class="text-center mb-12">
                    <h1 class="text-4xl sm:text-5xl font-extrabold tracking-tight mb-3">
                        "My Projects"
                    </h1>
                    <p class="text-lg text-gray-300/90 max-w-2xl mx-auto">
                        "A collection of projects showcasing my skills in web development, mobile apps, and more"
                    </p>
                </header>

                // Search + filters
                <div class="mb-12 space-y-6">
                    <div class="relative max-w-2xl mx-auto">
                        <i
                            class="extra-search absolute left-4 top-1/2 -translate-y-1/2 text-gray-400"
                            aria-hidden="true"
                        ></i>
                        <input
                            type="text"
                            placeholder="Search projects..."
                            prop:value=move || filter.with(|f| f.search_term.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.set_term(&value));
                            }
                            class="w-full bg-[#0b0f1a] border border-white/10 rounded-md py-3.5 pl-12 pr-4 text-gray-100 placeholder-gray-500 focus:ring-2 focus:ring-purple-500/60 focus:border-transparent outline-none shadow-inner"
                        />
                    </div>

                    <div class="flex flex-wrap justify-center gap-2 sm:gap-3">
                        {chips
                            .into_iter()
                            .map(|chip| {
                                let active = move || filter.with(|f| f.active_category == chip);
                                view! {
                                    <button
                                        on:click=move |_| filter.update(|f| f.set_category(chip))
                                        class=move || {
                                            format!(
                                                "px-3.5 py-1.5 rounded-md text-sm font-semibold transition-colors border {}",
                                                if active() {
                                                    "bg-purple-600 text-white border-transparent"
                                                } else {
                                                    "bg-black/40 text-gray-200 border-white/10 hover:bg-black/50"
                                                },
                                            )
                                        }
                                    >
                                        {chip.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Project grid
                <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filtered
                            .get()
                            .into_iter()
                            .map(|project| {
                                view! { <ProjectCard project=project show_category=true /> }
                            })
                            .collect_view()
                    }}
                </section>

                // Empty state
                <Show when=move || filtered.with(|p| p.is_empty())>
                    <p class="text-center text-gray-400 mt-12">
                        "No projects found. Try a different search or filter!"
                    </p>
                </Show>
            </div>
        </div>
    }
}
