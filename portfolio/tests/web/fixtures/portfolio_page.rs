use js_sys::Promise;
use leptos::{prelude::*, task::tick};
use portfolio::{
    scroll::{DocumentScroller, ScrollError, ScrollTarget, Scroller},
    settings::{PointerSampling, Settings},
    Portfolio,
};
use std::{
    any::Any,
    sync::{Arc, Mutex},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};

/// Keeps a mounted page alive; dropping it unmounts the page.
pub struct MountedPage {
    _handle: Box<dyn Any>,
    scrolls: Arc<Mutex<Vec<String>>>,
}

impl MountedPage {
    /// Ids of the sections navigation has scrolled into view, oldest first.
    pub fn scrolled_sections(&self) -> Vec<String> {
        self.scrolls.lock().unwrap().clone()
    }
}

/// Scrolls the document and remembers which sections it reached.
struct ScrollLog {
    scrolls: Arc<Mutex<Vec<String>>>,
}

impl ScrollTarget for ScrollLog {
    fn scroll_to(&self, id: &str) -> Result<(), ScrollError> {
        DocumentScroller.scroll_to(id)?;
        self.scrolls.lock().unwrap().push(id.to_owned());
        Ok(())
    }
}

// Actions

pub fn view_portfolio() -> MountedPage {
    view_portfolio_with(Settings {
        particle_count: 5,
        pointer_sampling: PointerSampling::EveryEvent,
    })
}

pub fn view_portfolio_with(settings: Settings) -> MountedPage {
    remove_existing_pages();
    let document = document();
    let wrapper = document.create_element("main").unwrap();
    wrapper.set_attribute("data-testid", "page").unwrap();
    document.body().unwrap().append_child(&wrapper).unwrap();

    let scrolls = Arc::new(Mutex::new(Vec::new()));
    let scroller = Scroller::new(ScrollLog {
        scrolls: Arc::clone(&scrolls),
    });
    let handle = mount_to(wrapper.unchecked_into(), move || {
        view! { <Portfolio settings scroller /> }
    });
    MountedPage {
        _handle: Box::new(handle),
        scrolls,
    }
}

pub fn click_nav(section: &str) {
    html_element(&format!("[data-testid=\"desktop-nav\"] [data-section=\"{section}\"]"))
        .click();
}

pub fn click_mobile_nav(section: &str) {
    html_element(&format!("[data-testid=\"mobile-nav\"] [data-section=\"{section}\"]"))
        .click();
}

pub fn click_by_testid(id: &str) {
    html_element(&format!("[data-testid=\"{id}\"]")).click();
}

pub fn toggle_menu() {
    html_element("[data-testid=\"menu-toggle\"]").click();
}

pub fn move_pointer(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let ev = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    window().dispatch_event(&ev).unwrap();
}

/// Lets pending effects run.
pub async fn settle() {
    tick().await;
}

/// Waits for the next animation frame, then lets pending effects run.
pub async fn next_frame() {
    let frame = Promise::new(&mut |resolve, _| {
        window().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(frame).await.unwrap();
    tick().await;
}

// Results

pub fn active_section() -> String {
    element("nav").get_attribute("data-active-section").unwrap()
}

pub fn mobile_menu_is_open() -> bool {
    find("[data-testid=\"mobile-nav\"]").is_some()
}

pub fn menu_toggle_label() -> String {
    element("[data-testid=\"menu-toggle\"]")
        .get_attribute("aria-label")
        .unwrap()
}

pub fn hero_classes() -> String {
    element("[data-testid=\"hero-content\"]").class_name()
}

pub fn pointer_glow() -> String {
    html_element("[data-testid=\"pointer-glow\"]")
        .style()
        .get_property_value("background-image")
        .unwrap()
}

pub fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

pub fn section_exists(id: &str) -> bool {
    document().get_element_by_id(id).is_some()
}

pub fn text_of(selector: &str) -> String {
    element(selector).text_content().unwrap_or_default()
}

pub fn hrefs(selector: &str) -> Vec<String> {
    let nodes = document().query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| el.get_attribute("href"))
        .collect()
}

// Internal

fn find(selector: &str) -> Option<Element> {
    document().query_selector(selector).unwrap()
}

fn element(selector: &str) -> Element {
    find(selector).unwrap_or_else(|| panic!("nothing matches {selector}"))
}

fn html_element(selector: &str) -> HtmlElement {
    element(selector).dyn_into::<HtmlElement>().unwrap()
}

fn remove_existing_pages() {
    while let Some(page) = find("[data-testid=\"page\"]") {
        page.remove();
    }
}
