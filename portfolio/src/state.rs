use crate::{scroll::ScrollTarget, section::SectionId};
use leptos::prelude::*;

/// Pointer coordinates, in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_event(ev: &web_sys::MouseEvent) -> Self {
        Self::new(ev.client_x().into(), ev.client_y().into())
    }

    /// CSS background that lights up the area around the pointer.
    pub fn glow(&self) -> String {
        format!(
            "radial-gradient(circle at {}px {}px, rgba(139, 92, 246, 0.3) 0%, transparent 50%)",
            self.x, self.y
        )
    }
}

/// Transient UI state of one mounted page.
///
/// Each field is its own signal so that, for example, a pointer move only
/// re-renders the background gradient.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    pub pointer: RwSignal<PointerPosition>,
    /// The identifier last passed to [`PageState::navigate_to`]. Nothing
    /// renders differently based on it.
    pub active_section: RwSignal<SectionId>,
    pub is_loaded: RwSignal<bool>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            pointer: RwSignal::new(PointerPosition::default()),
            active_section: RwSignal::new(SectionId::default()),
            is_loaded: RwSignal::new(false),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    /// Records `id` as the active section, closes the mobile menu and asks
    /// `scroller` to bring the matching element into view.
    ///
    /// A missing element is not an error: the page simply does not move.
    pub fn navigate_to(
        &self,
        id: impl Into<SectionId>,
        scroller: &impl ScrollTarget,
    ) {
        let id = id.into();
        self.mobile_menu_open.set(false);
        if let Err(e) = scroller.scroll_to(id.as_str()) {
            log::debug!("not scrolling to {id}: {e}");
        }
        self.active_section.set(id);
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn move_pointer(&self, position: PointerPosition) {
        // try_set: a frame requested before unmount may land after disposal
        self.pointer.try_set(position);
    }

    pub fn mark_loaded(&self) {
        self.is_loaded.try_set(true);
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
