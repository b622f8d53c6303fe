mod catalog;
pub mod chart_spec;

use rand::RngCore;
use serde::Serialize;
use tracing::trace;

use crate::core::{FigureId, TOTAL_FIGURES};
use crate::data::Dataset;
use crate::error::GalleryResult;

pub use catalog::{GALLERY_SUBTITLE, GALLERY_TITLE};
pub use chart_spec::{
    AxisBinding, AxisScale, BarOrientation, CategoryStyle, ChartKind, ChartSpec, ColorEncoding,
    CustomLayout, Mark, ReferenceLine, SeriesBinding, StrokeStyle,
};

/// Dataset generator for one figure. Draws only from the given source.
pub type GenerateFn = fn(&mut dyn RngCore) -> Dataset;

/// Immutable description of one gallery figure.
#[derive(Clone, Copy, Serialize)]
pub struct FigureDescriptor {
    pub id: FigureId,
    pub title: &'static str,
    pub caption: &'static str,
    #[serde(skip)]
    pub generator: GenerateFn,
    pub chart: ChartSpec,
}

impl FigureDescriptor {
    /// Produces a brand-new dataset for this figure.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Dataset {
        let dataset = (self.generator)(rng);
        trace!(
            figure = self.id.get(),
            records = dataset.len(),
            "generated figure dataset"
        );
        dataset
    }
}

/// Descriptors are unique per id.
impl PartialEq for FigureDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FigureDescriptor {}

impl std::fmt::Debug for FigureDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigureDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("chart", &self.chart.kind.name())
            .finish_non_exhaustive()
    }
}

/// Read-only, ordered table of every figure, keyed by [`FigureId`].
#[derive(Debug, Clone, Copy)]
pub struct FigureRegistry {
    figures: &'static [FigureDescriptor; TOTAL_FIGURES as usize],
}

impl Default for FigureRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl FigureRegistry {
    /// The built-in gallery table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            figures: &catalog::FIGURES,
        }
    }

    #[must_use]
    pub const fn total_figures(self) -> u8 {
        TOTAL_FIGURES
    }

    /// Infallible: every `FigureId` indexes the table.
    #[must_use]
    pub fn lookup(self, id: FigureId) -> &'static FigureDescriptor {
        &self.figures[id.index()]
    }

    /// Lookup from an unchecked integer, for callers outside the navigation
    /// surface. Out-of-range ids yield `FigureNotFound`.
    pub fn try_lookup(self, raw: i64) -> GalleryResult<&'static FigureDescriptor> {
        FigureId::new(raw).map(|id| self.lookup(id))
    }

    pub fn iter(self) -> impl Iterator<Item = &'static FigureDescriptor> {
        self.figures.iter()
    }
}
