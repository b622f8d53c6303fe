mod binding;
mod null_renderer;
mod primitives;

pub use binding::{
    BoundChart, BoundPoint, BoundReferenceLine, BoundSeries, Column, CustomGeometry, GridCell,
    TornadoBar, bind,
};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::data::Dataset;
use crate::error::GalleryResult;
use crate::registry::ChartSpec;

/// Contract implemented by any drawing backend.
///
/// Adapters receive a freshly generated dataset together with the figure's
/// declarative chart spec and must bind fields exactly as the spec names
/// them; [`bind`] does that resolution for them.
pub trait RenderAdapter {
    fn render(&mut self, dataset: &Dataset, chart: &ChartSpec) -> GalleryResult<()>;
}
