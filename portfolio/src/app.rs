use crate::{
    components::{About, Background, Contact, Footer, Hero, NavBar, Projects},
    pointer::track_pointer,
    scroll::Scroller,
    settings::Settings,
    state::PageState,
};
use leptos::prelude::*;

/// The whole page.
///
/// Owns the [`PageState`] of this mount and provides it, along with the
/// [`Settings`] and the [`Scroller`], to every section through context.
#[component]
pub fn Portfolio(
    /// Overrides the default [`Settings`].
    #[prop(optional)]
    settings: Option<Settings>,
    /// Brings sections into view on navigation. Defaults to smooth-scrolling
    /// the document.
    #[prop(optional)]
    scroller: Option<Scroller>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    let state = PageState::new();
    provide_context(settings);
    provide_context(scroller.unwrap_or_default());
    provide_context(state);

    track_pointer(state, settings.pointer_sampling);

    // the first frame paints the entrance state, the second one settles it
    Effect::new(move |_| {
        log::debug!("portfolio mounted");
        request_animation_frame(move || {
            request_animation_frame(move || state.mark_loaded());
        });
    });

    view! {
        <div class="min-h-screen bg-black text-white overflow-x-hidden">
            <Background />
            <NavBar />
            <Hero />
            <About />
            <Projects />
            <Contact />
            <Footer />
        </div>
    }
}
