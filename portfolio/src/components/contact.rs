use super::Glyph;
use crate::{
    content::{Icon, PROFILE},
    section::Section,
};
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="relative z-10 py-20 px-6">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-5xl font-bold mb-8 bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                    {PROFILE.contact_headline}
                </h2>
                <p class="text-xl text-gray-300 mb-12 max-w-2xl mx-auto">{PROFILE.contact_pitch}</p>

                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <a
                        href=PROFILE.mailto()
                        data-testid="get-in-touch"
                        class="group px-8 py-4 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-full hover:from-purple-500 hover:to-cyan-500 transition-all duration-300 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/25"
                    >
                        <span class="flex items-center justify-center gap-2">
                            <Glyph icon=Icon::Mail icon_class="w-5 h-5" />
                            "Get In Touch"
                        </span>
                    </a>
                </div>
            </div>
        </section>
    }
}
