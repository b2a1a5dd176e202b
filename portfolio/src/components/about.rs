use super::Glyph;
use crate::{
    content::{Skill, PROFILE, SKILLS},
    section::Section,
};
use leptos::prelude::*;

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="group" data-testid="skill">
            <div class="flex items-center justify-between mb-2">
                <div class="flex items-center gap-3">
                    <div class="p-2 rounded-lg bg-purple-500/20 text-purple-400">
                        <Glyph icon=skill.icon icon_class="w-6 h-6" />
                    </div>
                    <span class="font-semibold">{skill.name}</span>
                </div>
                <span class="text-purple-400 font-bold">{format!("{}%", skill.proficiency)}</span>
            </div>
            <div class="w-full bg-gray-800 rounded-full h-2">
                <div
                    class="bg-gradient-to-r from-purple-500 to-cyan-500 h-2 rounded-full transition-all duration-1000 group-hover:from-purple-400 group-hover:to-cyan-400"
                    style:width=skill.bar_width()
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="relative z-10 py-20 px-6">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-5xl font-bold text-center mb-16 bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                    "About Me"
                </h2>

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <p class="text-lg text-gray-300 mb-6 leading-relaxed">{PROFILE.bio[0]}</p>
                        <p class="text-lg text-gray-300 mb-8 leading-relaxed">{PROFILE.bio[1]}</p>
                    </div>
                    <div class="space-y-6">
                        {SKILLS.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
