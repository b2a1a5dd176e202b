//! The page, one component per section.

mod about;
mod background;
mod contact;
mod footer;
mod glyph;
mod hero;
mod nav;
mod projects;
mod social;

pub use about::About;
pub use background::{Background, Particle};
pub use contact::Contact;
pub use footer::Footer;
pub use glyph::Glyph;
pub use hero::{entrance_class, Hero};
pub use nav::{menu_icon, NavBar};
pub use projects::Projects;
pub use social::SocialLinks;
