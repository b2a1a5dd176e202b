use leptos::{mount::mount_to_body, prelude::*};
use portfolio::Portfolio;

pub fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    log::debug!("csr mode - mounting to body");

    mount_to_body(|| view! { <Portfolio /> });
}
