use crate::{
    content::{Icon, PROFILE},
    scroll::Scroller,
    section::Section,
    state::PageState,
};
use leptos::prelude::*;

/// One navigation control per section.
#[component]
fn SectionLinks(
    /// Classes applied to every button.
    button_class: &'static str,
) -> impl IntoView {
    let state = expect_context::<PageState>();
    let scroller = expect_context::<Scroller>();

    Section::ALL
        .into_iter()
        .map(|section| {
            let scroller = scroller.clone();
            view! {
                <button
                    class=button_class
                    data-section=section.id()
                    on:click=move |_| state.navigate_to(section, &scroller)
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<PageState>();
    let menu_open = state.mobile_menu_open;

    view! {
        <nav
            class="fixed top-0 w-full z-50 backdrop-blur-xl bg-black/30 border-b border-white/10"
            data-active-section=move || state.active_section.get().to_string()
        >
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <div class="text-2xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                    {PROFILE.name}
                </div>

                <div class="hidden md:flex space-x-8" data-testid="desktop-nav">
                    <SectionLinks button_class="hover:text-purple-400 transition-all duration-300 hover:scale-110" />
                </div>

                <button
                    class="md:hidden"
                    data-testid="menu-toggle"
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| state.toggle_mobile_menu()
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                        class="w-6 h-6"
                        inner_html=move || menu_icon(menu_open.get()).svg_body()
                    ></svg>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div
                    class="md:hidden bg-black/90 backdrop-blur-xl border-t border-white/10"
                    data-testid="mobile-nav"
                >
                    <div class="px-6 py-4 space-y-4">
                        <SectionLinks button_class="block w-full text-left hover:text-purple-400 transition-colors" />
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Icon on the menu toggle: what pressing it will do next.
pub fn menu_icon(open: bool) -> Icon {
    if open {
        Icon::Close
    } else {
        Icon::Menu
    }
}
