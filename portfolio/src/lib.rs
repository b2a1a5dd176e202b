//! A single-page personal portfolio, rendered in the browser with Leptos.
//!
//! The page is one [`Portfolio`] component made of a navigation bar and four
//! addressable sections (`hero`, `about`, `projects`, `contact`) over a
//! background that follows the pointer. All content is static
//! ([`content`]); the only state is the transient [`state::PageState`] of the
//! mounted page.
//!
//! ```rust,no_run
//! use leptos::{mount::mount_to_body, prelude::*};
//! use portfolio::Portfolio;
//!
//! mount_to_body(|| view! { <Portfolio /> });
//! ```

mod app;
pub mod components;
pub mod content;
pub mod pointer;
pub mod scroll;
pub mod section;
pub mod settings;
pub mod state;

pub use app::Portfolio;
