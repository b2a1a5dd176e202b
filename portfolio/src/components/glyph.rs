use crate::content::Icon;
use leptos::prelude::*;

/// Renders a bundled [`Icon`] as inline SVG.
#[component]
pub fn Glyph(
    icon: Icon,
    /// Sizing and color classes for the `<svg>`.
    #[prop(optional)]
    icon_class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=icon_class
            inner_html=icon.svg_body()
        ></svg>
    }
}
