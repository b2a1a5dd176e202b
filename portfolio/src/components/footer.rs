use super::SocialLinks;
use crate::content::PROFILE;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 py-8 px-6 border-t border-white/10">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between items-center">
                <div class="text-gray-400 mb-4 md:mb-0">{PROFILE.copyright()}</div>
                <SocialLinks
                    container_class="flex space-x-6"
                    link_class="text-gray-400 hover:text-purple-400 transition-colors hover:scale-110 transform duration-300"
                />
            </div>
        </footer>
    }
}
