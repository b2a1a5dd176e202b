use super::{Glyph, SocialLinks};
use crate::{
    content::{Icon, PROFILE},
    scroll::Scroller,
    section::Section,
    state::PageState,
};
use leptos::prelude::*;

/// Classes of the hero content: hidden below its final position until the
/// page has loaded, then settled.
pub fn entrance_class(loaded: bool) -> &'static str {
    if loaded {
        "text-center transform transition-all duration-1000 translate-y-0 opacity-100"
    } else {
        "text-center transform transition-all duration-1000 translate-y-20 opacity-0"
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<PageState>();
    let scroller = expect_context::<Scroller>();

    view! {
        <section
            id=Section::Hero.id()
            class="relative z-10 min-h-screen flex items-center justify-center px-6"
        >
            <div data-testid="hero-content" class=move || entrance_class(state.is_loaded.get())>
                <div class="mb-8">
                    <div class="w-32 h-32 mx-auto mb-8 rounded-full bg-gradient-to-r from-purple-500 to-cyan-500 p-1 animate-spin-slow">
                        <div class="w-full h-full rounded-full bg-black flex items-center justify-center">
                            <div class="w-24 h-24 rounded-full bg-gradient-to-r from-purple-400 to-cyan-400 animate-pulse"></div>
                        </div>
                    </div>
                </div>

                <h1 class="text-6xl md:text-8xl font-bold mb-6 bg-gradient-to-r from-purple-400 via-pink-400 to-cyan-400 bg-clip-text text-transparent">
                    {PROFILE.name}
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-4 max-w-2xl mx-auto">
                    {PROFILE.headline}
                </p>
                <p class="text-lg text-gray-400 mb-8 max-w-xl mx-auto">{PROFILE.summary}</p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <button
                        class="group px-8 py-4 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-full hover:from-purple-500 hover:to-cyan-500 transition-all duration-300 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/25"
                        data-testid="view-work"
                        on:click=move |_| state.navigate_to(Section::Projects, &scroller)
                    >
                        <span class="flex items-center justify-center gap-2">
                            "View My Work"
                            <Glyph
                                icon=Icon::ArrowRight
                                icon_class="w-5 h-5 group-hover:translate-x-1 transition-transform"
                            />
                        </span>
                    </button>
                    <button class="px-8 py-4 border border-purple-500 rounded-full hover:bg-purple-500/10 transition-all duration-300 hover:scale-105">
                        <span class="flex items-center justify-center gap-2">
                            <Glyph icon=Icon::Download icon_class="w-5 h-5" />
                            "Download CV"
                        </span>
                    </button>
                </div>

                <SocialLinks
                    container_class="flex justify-center space-x-6"
                    link_class="p-3 rounded-full bg-white/10 hover:bg-purple-500/20 transition-all duration-300 hover:scale-110"
                />
            </div>
        </section>
    }
}
