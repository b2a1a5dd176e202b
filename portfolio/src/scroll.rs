use std::{fmt, sync::Arc};
use thiserror::Error;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("no element with id {0:?}")]
    MissingTarget(String),
    #[error("no document to scroll")]
    NoDocument,
}

/// Something that can bring an element, looked up by its id, into view.
pub trait ScrollTarget {
    fn scroll_to(&self, id: &str) -> Result<(), ScrollError>;
}

/// Smooth-scrolls elements of the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScroller;

impl ScrollTarget for DocumentScroller {
    fn scroll_to(&self, id: &str) -> Result<(), ScrollError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ScrollError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| ScrollError::MissingTarget(id.to_owned()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// The [`ScrollTarget`] navigation uses, shared through context.
#[derive(Clone)]
pub struct Scroller(Arc<dyn ScrollTarget + Send + Sync>);

impl Scroller {
    pub fn new(target: impl ScrollTarget + Send + Sync + 'static) -> Self {
        Self(Arc::new(target))
    }
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new(DocumentScroller)
    }
}

impl fmt::Debug for Scroller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scroller").finish_non_exhaustive()
    }
}

impl ScrollTarget for Scroller {
    fn scroll_to(&self, id: &str) -> Result<(), ScrollError> {
        self.0.scroll_to(id)
    }
}
