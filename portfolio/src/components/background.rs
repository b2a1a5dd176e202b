use crate::{settings::Settings, state::PageState};
use leptos::prelude::*;
use rand::Rng;

/// A decorative dot scattered over the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal offset, percent of the viewport width.
    pub left: f64,
    /// Vertical offset, percent of the viewport height.
    pub top: f64,
    /// Ping animation delay, in seconds.
    pub delay: f64,
}

impl Particle {
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
        (0..count)
            .map(|_| Particle {
                left: rng.random_range(0.0..100.0),
                top: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..3.0),
            })
            .collect()
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation-delay: {:.3}s;",
            self.left, self.top, self.delay
        )
    }
}

#[component]
pub fn Background() -> impl IntoView {
    let state = expect_context::<PageState>();
    let settings = expect_context::<Settings>();
    let particles = Particle::scatter(settings.particle_count, &mut rand::rng());

    view! {
        <div class="fixed inset-0 z-0" aria-hidden="true">
            <div
                data-testid="pointer-glow"
                class="absolute inset-0 opacity-30 transition-all duration-300"
                style:background=move || state.pointer.get().glow()
            ></div>
            <div class="absolute inset-0 bg-gradient-to-br from-purple-900/20 via-blue-900/20 to-teal-900/20"></div>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_50%_50%,rgba(139,92,246,0.1)_0%,transparent_50%)] animate-pulse"></div>
            <div class="absolute inset-0" data-testid="particles">
                {particles
                    .into_iter()
                    .map(|particle| {
                        view! {
                            <div
                                class="absolute w-1 h-1 bg-purple-400 rounded-full opacity-30 animate-ping"
                                style=particle.style()
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
