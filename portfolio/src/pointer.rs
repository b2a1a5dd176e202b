//! Window-wide pointer tracking, scoped to the lifetime of a mounted page.

use crate::{
    settings::PointerSampling,
    state::{PageState, PointerPosition},
};
use leptos::{ev, prelude::*};
use std::{
    cell::RefCell,
    fmt,
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

static ACTIVE_SUBSCRIPTIONS: AtomicUsize = AtomicUsize::new(0);

/// Number of [`PointerSubscription`]s currently alive.
pub fn active_pointer_subscriptions() -> usize {
    ACTIVE_SUBSCRIPTIONS.load(Ordering::SeqCst)
}

/// A live pointer-move listener. Dropping it removes the listener.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct PointerSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl PointerSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        ACTIVE_SUBSCRIPTIONS.fetch_add(1, Ordering::SeqCst);
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription").finish_non_exhaustive()
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            ACTIVE_SUBSCRIPTIONS.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

/// Coalesces pointer events so that at most one update lands per frame.
#[derive(Debug, Default)]
pub struct FrameSampler {
    latest: Option<PointerPosition>,
    frame_requested: bool,
}

impl FrameSampler {
    /// Stores `position` as the latest sample. Returns `true` if the caller
    /// must request a frame to flush it.
    pub fn record(&mut self, position: PointerPosition) -> bool {
        self.latest = Some(position);
        !std::mem::replace(&mut self.frame_requested, true)
    }

    /// Takes the latest sample, if any, and rearms the sampler.
    pub fn flush(&mut self) -> Option<PointerPosition> {
        self.frame_requested = false;
        self.latest.take()
    }
}

/// Starts writing `mousemove` coordinates to `state.pointer`.
///
/// The listener lives until the current reactive owner is cleaned up.
pub fn track_pointer(state: PageState, sampling: PointerSampling) {
    let handle = match sampling {
        PointerSampling::EveryEvent => {
            window_event_listener(ev::mousemove, move |ev| {
                state.move_pointer(PointerPosition::from_event(&ev));
            })
        }
        PointerSampling::AnimationFrame => {
            let sampler = Rc::new(RefCell::new(FrameSampler::default()));
            window_event_listener(ev::mousemove, move |ev| {
                let position = PointerPosition::from_event(&ev);
                if sampler.borrow_mut().record(position) {
                    let sampler = Rc::clone(&sampler);
                    request_animation_frame(move || {
                        let latest = sampler.borrow_mut().flush();
                        if let Some(position) = latest {
                            state.move_pointer(position);
                        }
                    });
                }
            })
        }
    };

    let subscription = PointerSubscription::new(move || handle.remove());
    log::debug!("pointer tracking started ({sampling:?})");
    on_cleanup(move || {
        drop(subscription);
        log::debug!("pointer tracking stopped");
    });
}
