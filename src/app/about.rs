use leptos::prelude::*;

const SKILLS: [&str; 12] = [
    "React",
    "Node.js",
    "Firebase",
    "JavaScript",
    "TailwindCSS",
    "Git",
    "GitHub",
    "REST APIs",
    "Vite",
    "Python",
    "AWS",
    "Docker",
];

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "extra-code",
        title: "Web Development",
        description: "Full-stack web applications using modern technologies and best practices.",
    },
    Service {
        icon: "extra-pen",
        title: "UI/UX Design",
        description: "Beautiful, intuitive user interfaces that provide exceptional user experiences.",
    },
    Service {
        icon: "extra-zap",
        title: "Performance Optimization",
        description: "Fast, scalable applications optimized for performance and user engagement.",
    },
    Service {
        icon: "extra-users",
        title: "Team Collaboration",
        description: "Experienced in agile methodologies and cross-functional team collaboration.",
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="bg-[#0c1220] text-white py-24">
            <div class="container mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                // Section title
                <div class="text-center mb-12">
                    <h2 class="text-4xl font-bold mb-2 tracking-tight">"About Me"</h2>
                    <p class="text-lg text-gray-300/90">
                        "Passionate developer with a love for creating innovative digital solutions."
                    </p>
                    <div class="w-24 h-1 bg-gradient-to-r from-purple-600 to-indigo-500 rounded-full mx-auto mt-4"></div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16 items-start mb-16">
                    // Left: my story
                    <div class="max-w-prose">
                        <h3 class="text-2xl font-semibold mb-4 text-white">"My Story"</h3>
                        <div class="space-y-4 text-gray-300 leading-relaxed">
                            <p>
                                "I'm a passionate full-stack developer with over 5 years of experience in creating innovative web applications and digital solutions. My journey began with a curiosity for technology and has evolved into a deep expertise in modern web development."
                            </p>
                            <p>
                                "I specialize in React, TypeScript, Node.js, and cloud technologies, always staying current with the latest industry trends and best practices. I believe in writing clean, maintainable code and creating user experiences that make a difference."
                            </p>
                            <p>
                                "When I'm not coding, you'll find me contributing to open source projects, mentoring junior developers, or exploring new technologies that could enhance my work and the projects I'm passionate about."
                            </p>
                        </div>

                        // CTAs
                        <div class="mt-6 flex flex-wrap gap-3">
                            <a
                                href="/cv.pdf"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 bg-white/[0.06] text-gray-200 px-4 py-2.5 rounded-md border border-white/10 hover:bg-white/[0.1] transition-colors"
                            >
                                <i class="extra-download" aria-hidden="true"></i>
                                "Download Resume"
                            </a>
                            <a
                                href="#contact"
                                class="inline-flex items-center gap-2 bg-gradient-to-r from-purple-600 to-indigo-500 text-white px-4 py-2.5 rounded-md hover:opacity-95 transition-opacity"
                            >
                                <i class="extra-email" aria-hidden="true"></i>
                                "Contact Me"
                            </a>
                        </div>
                    </div>

                    // Right: skills
                    <div>
                        <h3 class="text-2xl font-semibold mb-4 text-white">"Skills & Technologies"</h3>
                        <ul role="list" aria-label="Skills and technologies" class="flex flex-wrap gap-3">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <li>
                                            <span class="select-none inline-flex items-center rounded-md border border-white/10 bg-white/[0.04] px-3 py-1.5 text-sm text-gray-200 hover:bg-white/[0.08] transition-colors">
                                                {*skill}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                // Service cards
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="rounded-lg border border-white/10 bg-white/[0.03] p-6 transition-all duration-300 hover:-translate-y-1 hover:border-purple-500/60 hover:shadow-lg hover:shadow-purple-600/20">
                                    <div class="bg-gradient-to-tr from-purple-600 to-indigo-600 text-white w-12 h-12 flex items-center justify-center rounded-lg mb-4">
                                        <i class=service.icon aria-hidden="true"></i>
                                    </div>
                                    <h4 class="text-xl font-semibold mb-2 text-white">
                                        {service.title}
                                    </h4>
                                    <p class="text-gray-400 text-sm leading-relaxed">
                                        {service.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
