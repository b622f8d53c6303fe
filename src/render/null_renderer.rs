use crate::core::FigureId;
use crate::data::Dataset;
use crate::error::GalleryResult;
use crate::registry::ChartSpec;
use crate::render::{RenderAdapter, bind};

/// Headless adapter used by tests, benches and the CLI.
///
/// It still binds and validates every frame, so a chart spec that drifts
/// away from its dataset schema fails here before any real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_figure: Option<FigureId>,
    pub last_record_count: usize,
    pub last_series_count: usize,
    pub last_point_count: usize,
}

impl RenderAdapter for NullRenderer {
    fn render(&mut self, dataset: &Dataset, chart: &ChartSpec) -> GalleryResult<()> {
        let bound = bind(dataset, chart)?;
        bound.validate()?;
        self.render_count += 1;
        self.last_figure = Some(bound.figure);
        self.last_record_count = bound.record_count();
        self.last_series_count = bound.series.len();
        self.last_point_count = bound.point_count();
        Ok(())
    }
}
