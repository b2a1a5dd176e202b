use super::*;
use crate::portfolio_page as ui;
use portfolio::content::{PROFILE, PROJECTS, SKILLS, SOCIAL_LINKS};
use pretty_assertions::assert_eq;

#[wasm_bindgen_test]
fn should_render_every_section_at_once() {
    // Given
    let _page = ui::view_portfolio();

    // Then
    for id in ["hero", "about", "projects", "contact"] {
        assert!(ui::section_exists(id), "missing #{id}");
    }
    assert_eq!(ui::count("footer"), 1);
}

#[wasm_bindgen_test]
fn should_list_every_project_and_skill() {
    // Given
    let _page = ui::view_portfolio();

    // Then
    assert_eq!(ui::count("[data-testid=\"project\"]") as usize, PROJECTS.len());
    assert_eq!(ui::count("[data-testid=\"skill\"]") as usize, SKILLS.len());
    assert!(ui::text_of("#projects").contains(PROJECTS[0].title));
}

#[wasm_bindgen_test]
fn should_repeat_social_links_in_hero_and_footer() {
    // Given
    let _page = ui::view_portfolio();
    let expected = SOCIAL_LINKS
        .iter()
        .map(|link| link.href.to_string())
        .collect::<Vec<_>>();

    // Then
    assert_eq!(ui::hrefs("#hero [data-testid=\"social-links\"] a"), expected);
    assert_eq!(ui::hrefs("footer [data-testid=\"social-links\"] a"), expected);
    assert_eq!(
        ui::hrefs("[data-testid=\"get-in-touch\"]"),
        vec![PROFILE.mailto()]
    );
}

#[wasm_bindgen_test]
fn should_scatter_the_configured_particles() {
    // Given
    let _page = ui::view_portfolio();

    // Then
    assert_eq!(ui::count("[data-testid=\"particles\"] > div"), 5);
}
