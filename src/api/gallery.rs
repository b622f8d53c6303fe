use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::core::{FigureId, rng_for};
use crate::data::Dataset;
use crate::error::GalleryResult;
use crate::navigation::{NavigationController, PageIndicator, Transition};
use crate::registry::{FigureDescriptor, FigureRegistry};
use crate::render::RenderAdapter;

use super::GalleryConfig;

/// Figure selected by a transition, with the dataset generated for it.
///
/// The gallery never keeps this around; each transition produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFigure {
    pub descriptor: &'static FigureDescriptor,
    pub dataset: Dataset,
}

impl ActiveFigure {
    #[must_use]
    pub fn id(&self) -> FigureId {
        self.descriptor.id
    }
}

/// Main facade consumed by host UIs.
///
/// `Gallery` ties the navigation state machine to the registry, the random
/// source and a render adapter. Every transition, including boundary no-ops,
/// looks the figure up, generates a fresh dataset and renders it.
pub struct Gallery<A: RenderAdapter> {
    adapter: A,
    registry: FigureRegistry,
    navigation: NavigationController,
    rng: StdRng,
}

impl<A: RenderAdapter> Gallery<A> {
    #[must_use]
    pub fn new(adapter: A, config: GalleryConfig) -> Self {
        debug!(
            initial_figure = config.initial_figure.get(),
            seeded = config.seed.is_some(),
            "gallery session started"
        );
        Self {
            adapter,
            registry: FigureRegistry::standard(),
            navigation: NavigationController::starting_at(config.initial_figure),
            rng: rng_for(config.seed),
        }
    }

    #[must_use]
    pub fn current_figure(&self) -> FigureId {
        self.navigation.current_figure()
    }

    #[must_use]
    pub fn total_figures(&self) -> u8 {
        self.registry.total_figures()
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.navigation.can_go_previous()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.navigation.can_go_next()
    }

    pub fn page_indicators(&self) -> impl Iterator<Item = PageIndicator> + '_ {
        self.navigation.page_indicators()
    }

    #[must_use]
    pub fn registry(&self) -> FigureRegistry {
        self.registry
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    #[must_use]
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    pub fn next(&mut self) -> GalleryResult<ActiveFigure> {
        self.transition(Transition::Next)
    }

    pub fn previous(&mut self) -> GalleryResult<ActiveFigure> {
        self.transition(Transition::Previous)
    }

    pub fn jump_to(&mut self, target: i64) -> GalleryResult<ActiveFigure> {
        self.transition(Transition::JumpTo(target))
    }

    /// Renders the current figure without moving, e.g. for the first paint.
    pub fn show(&mut self) -> GalleryResult<ActiveFigure> {
        self.present()
    }

    pub fn transition(&mut self, transition: Transition) -> GalleryResult<ActiveFigure> {
        let outcome = self.navigation.apply(transition);
        debug!(
            ?transition,
            from = outcome.from.get(),
            to = outcome.to.get(),
            changed = outcome.changed(),
            "navigation transition"
        );
        self.present()
    }

    fn present(&mut self) -> GalleryResult<ActiveFigure> {
        let descriptor = self.registry.lookup(self.navigation.current_figure());
        let dataset = descriptor.generate(&mut self.rng);
        if let Err(err) = self.adapter.render(&dataset, &descriptor.chart) {
            warn!(figure = descriptor.id.get(), error = %err, "render adapter rejected figure");
            return Err(err);
        }
        debug!(
            figure = descriptor.id.get(),
            records = dataset.len(),
            "figure rendered"
        );
        Ok(ActiveFigure {
            descriptor,
            dataset,
        })
    }
}
