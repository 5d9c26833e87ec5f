use leptos::prelude::*;
use leptos_router::components::A;

use crate::projects::{featured, Project};

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    view! {
        <section id="projects" class="bg-[#0D0D0D] text-white py-24 px-4">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                // Section title
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-2">"Featured Projects"</h2>
                    <p class="text-lg text-gray-400">
                        "Here are some of my recent projects that showcase my skills and experience."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {featured()
                        .iter()
                        .cloned()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>

                // CTA
                <div class="text-center mt-16">
                    <A
                        href="/projects"
                        attr:class="bg-white/[0.03] border border-white/10 text-gray-200 px-6 py-2.5 rounded-md hover:bg-white/[0.07] hover:text-white transition-colors"
                    >
                        "View All Projects"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] show_category: bool) -> impl IntoView {
    let Project {
        image,
        title,
        description,
        tags,
        category,
        github_link,
        live_link,
        ..
    } = project;
    let image = format!("{image}?auto=compress&cs=tinysrgb&w=1200");
    let alt = format!("{title} screenshot");
    let code_label = format!("{title} code on GitHub");
    let demo_label = format!("Open live demo of {title}");

    view! {
        <article class="group rounded-2xl overflow-hidden border border-white/10 bg-white/[0.03] shadow-sm transition-all duration-300 hover:-translate-y-1 hover:shadow-xl hover:shadow-black/40 flex flex-col">
            // Image
            <div class="relative aspect-[16/10] overflow-hidden">
                <img
                    src=image
                    alt=alt
                    loading="lazy"
                    decoding="async"
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-[1.04]"
                />
                <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent"></div>
            </div>

            // Content
            <div class="p-6 flex flex-col flex-grow">
                <div class="flex items-start justify-between gap-4">
                    <h3 class="text-xl font-semibold tracking-tight">{title}</h3>
                    {show_category
                        .then(|| {
                            view! {
                                <span class="shrink-0 text-[11px] uppercase tracking-wide text-gray-300 bg-white/[0.06] border border-white/10 rounded-full px-2 py-1">
                                    {category.as_str()}
                                </span>
                            }
                        })}
                </div>

                <p class="mt-2 text-sm text-gray-300/90 leading-relaxed line-clamp-3 flex-grow">
                    {description}
                </p>

                // Tags
                <div class="mt-4 flex flex-wrap gap-2">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="text-[11px] text-gray-200 bg-white/[0.06] border border-white/10 rounded-md px-2 py-1">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                // Actions
                <div class="mt-5 flex items-center gap-3">
                    <a
                        href=github_link
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=code_label
                        class="flex-1 inline-flex items-center justify-center gap-2 rounded-md border border-white/10 bg-white/[0.06] px-4 py-2.5 text-gray-200 hover:bg-white/[0.1] transition-colors"
                    >
                        <i class="devicon-github-plain" aria-hidden="true"></i>
                        "Code"
                    </a>
                    <a
                        href=live_link
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=demo_label
                        class="flex-1 inline-flex items-center justify-center gap-2 rounded-md bg-gradient-to-r from-purple-600 to-indigo-500 px-4 py-2.5 text-white hover:opacity-95 transition-opacity"
                    >
                        <i class="extra-link" aria-hidden="true"></i>
                        "Demo"
                    </a>
                </div>
            </div>
        </article>
    }
}
