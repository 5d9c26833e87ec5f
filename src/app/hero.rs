use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="relative isolate min-h-screen flex flex-col justify-center items-center text-white p-4 pt-24 md:pt-4 pb-40 md:pb-4"
        >
            // Background image + overlays
            <div
                class="absolute inset-0 -z-10 bg-cover bg-center"
                style="background-image: url('/hero-bg.jpg')"
                aria-hidden="true"
            ></div>
            <div class="absolute inset-0 -z-10 bg-black/60 backdrop-blur-sm" aria-hidden="true"></div>
            <div
                class="absolute inset-0 -z-10 opacity-70"
                style="background: radial-gradient(60% 50% at 30% 45%, rgba(124,58,237,0.18) 0%, rgba(0,0,0,0) 60%)"
                aria-hidden="true"
            ></div>

            <div class="relative z-10 container mx-auto max-w-7xl flex flex-col md:flex-row items-center justify-center gap-6 md:gap-10">
                // Left: text
                <div class="xl:ps-8 md:w-1/2 flex flex-col items-center md:items-start text-center md:text-left order-2 md:order-1">
                    <span class="mb-3 inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/[0.06] px-3 py-1 text-xs text-gray-200">
                        "Full-Stack Developer"
                    </span>

                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold mb-4 leading-tight">
                        "Hi, I'm"
                        <br />
                        <span class="bg-gradient-to-r from-purple-400 via-pink-400 to-sky-400 bg-clip-text text-transparent">
                            "Haleem Akmal"
                        </span>
                    </h1>

                    <p class="text-base md:text-xl max-w-xl mb-8 text-gray-300 leading-relaxed">
                        "Full-Stack Developer crafting beautiful, functional, and user-centered digital experiences"
                    </p>

                    <div class="flex flex-col sm:flex-row justify-center md:justify-start items-center gap-4">
                        <a
                            href="#projects"
                            class="group flex items-center justify-center bg-purple-600 text-white px-6 py-3 rounded-md font-semibold hover:bg-purple-700 hover:scale-105 active:scale-95 transition-transform duration-300 w-48"
                        >
                            "View My Work"
                            <span class="ml-2 transition-transform duration-300 group-hover:translate-x-1">
                                "→"
                            </span>
                        </a>

                        <a
                            href="/cv.pdf"
                            download="cv.pdf"
                            aria-label="Download my CV"
                            class="group flex items-center justify-center text-gray-300 px-6 py-3 rounded-md font-semibold hover:bg-white/10 hover:text-white active:scale-95 transition-transform duration-300 w-48"
                        >
                            <i class="extra-download mr-2" aria-hidden="true"></i>
                            "Download CV"
                        </a>
                    </div>
                </div>

                // Right: headshot
                <div class="md:w-1/2 flex justify-center order-1 md:order-2">
                    <img
                        src="/headshot.jpg"
                        alt="Haleem Akmal headshot"
                        loading="eager"
                        decoding="async"
                        draggable="false"
                        class="w-64 h-64 md:w-80 md:h-80 xl:w-[28rem] xl:h-[28rem] object-cover rounded-full border border-white/10 ring-1 ring-white/10 shadow-2xl shadow-black/60"
                    />
                </div>
            </div>

            // Scroll cue
            <div class="absolute bottom-10 left-0 right-0 z-10 flex flex-col items-center gap-6">
                <div class="w-7 h-12 border-2 border-gray-400 rounded-full flex justify-center items-start p-1">
                    <div class="w-1 h-3 bg-gray-400 rounded-full animate-bounce"></div>
                </div>
            </div>
        </section>
    }
}
