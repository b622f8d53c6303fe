use serde::Serialize;

use crate::core::FigureId;

/// Session configuration for a [`Gallery`](super::Gallery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GalleryConfig {
    pub initial_figure: FigureId,
    /// Fixed seed for reproducible datasets; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GalleryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_figure(mut self, figure: FigureId) -> Self {
        self.initial_figure = figure;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
