use super::*;
use crate::portfolio_page as ui;

#[wasm_bindgen_test]
async fn should_paint_the_entrance_state_before_settling() {
    // Given
    let _page = ui::view_portfolio();

    // Then
    assert!(ui::hero_classes().contains("translate-y-20 opacity-0"));

    // When
    ui::settle().await;
    ui::next_frame().await;

    // Then
    // a whole frame has gone by with the entrance classes applied
    assert!(ui::hero_classes().contains("translate-y-20 opacity-0"));

    // When
    ui::next_frame().await;

    // Then
    assert!(ui::hero_classes().contains("translate-y-0 opacity-100"));
}
