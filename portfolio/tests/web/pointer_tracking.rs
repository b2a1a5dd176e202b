use super::*;
use crate::portfolio_page as ui;
use portfolio::{
    pointer::active_pointer_subscriptions,
    settings::{PointerSampling, Settings},
};
use pretty_assertions::assert_eq;

#[wasm_bindgen_test]
async fn should_center_the_glow_on_the_pointer() {
    // Given
    let _page = ui::view_portfolio();

    // When
    ui::move_pointer(120, 48);
    ui::settle().await;

    // Then
    assert!(ui::pointer_glow().contains("120px 48px"), "{}", ui::pointer_glow());

    // When
    ui::move_pointer(7, 300);
    ui::settle().await;

    // Then
    assert!(ui::pointer_glow().contains("7px 300px"), "{}", ui::pointer_glow());
}

#[wasm_bindgen_test]
async fn should_keep_the_latest_pointer_per_frame() {
    // Given
    let _page = ui::view_portfolio_with(Settings {
        particle_count: 0,
        pointer_sampling: PointerSampling::AnimationFrame,
    });

    // When
    ui::move_pointer(10, 10);
    ui::move_pointer(20, 20);
    ui::move_pointer(640, 360);
    ui::next_frame().await;

    // Then
    assert!(ui::pointer_glow().contains("640px 360px"), "{}", ui::pointer_glow());
}

#[wasm_bindgen_test]
fn should_release_the_listener_on_unmount() {
    // Given
    let before = active_pointer_subscriptions();

    // When
    let page = ui::view_portfolio();

    // Then
    assert_eq!(active_pointer_subscriptions(), before + 1);

    // When
    drop(page);

    // Then
    assert_eq!(active_pointer_subscriptions(), before);
}
