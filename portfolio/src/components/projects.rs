use super::Glyph;
use crate::{
    content::{Icon, Project, PROJECTS},
    section::Section,
};
use leptos::prelude::*;

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div
            class="group relative overflow-hidden rounded-2xl bg-gradient-to-br from-gray-900/50 to-gray-800/50 backdrop-blur-sm border border-white/10 hover:border-purple-500/50 transition-all duration-500 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/20"
            data-testid="project"
        >
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br {} opacity-0 group-hover:opacity-20 transition-opacity duration-500",
                project.color_theme,
            )></div>

            <div class="relative p-8">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-xl font-bold group-hover:text-purple-300 transition-colors">
                        {project.title}
                    </h3>
                    <Glyph
                        icon=Icon::ExternalLink
                        icon_class="w-5 h-5 text-gray-400 group-hover:text-purple-400 transition-colors group-hover:scale-110"
                    />
                </div>

                <p class="text-gray-300 mb-6 leading-relaxed">{project.description}</p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-purple-500/20 text-purple-300 rounded-full text-sm border border-purple-500/30 hover:bg-purple-500/30 transition-colors">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="relative z-10 py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-5xl font-bold text-center mb-16 bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                    "Featured Projects"
                </h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
