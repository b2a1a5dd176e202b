/// How pointer-move events reach the background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSampling {
    /// Write every raw `mousemove` to the pointer signal.
    EveryEvent,
    /// Keep only the latest event and write it once per animation frame.
    #[default]
    AnimationFrame,
}

/// Page-level knobs, provided to every section through context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of decorative particles scattered over the background.
    pub particle_count: usize,
    pub pointer_sampling: PointerSampling,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: 20,
            pointer_sampling: PointerSampling::default(),
        }
    }
}
