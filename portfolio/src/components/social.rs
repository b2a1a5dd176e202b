use super::Glyph;
use crate::content::SOCIAL_LINKS;
use leptos::prelude::*;

/// The outbound profile and mail links, as a row of icons.
#[component]
pub fn SocialLinks(
    container_class: &'static str,
    link_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=container_class data-testid="social-links">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a href=link.href class=link_class aria-label=link.label>
                            <Glyph icon=link.icon icon_class="w-6 h-6" />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
