pub mod records;
pub mod synthesis;
pub mod tables;

use serde::Serialize;

use crate::core::{FieldSchema, FigureId, Record};

pub use records::{
    AreaBin, AttentionWeight, BuildingType, CalibrationBin, CorrelationCell, CorrelationMatrix,
    DataSplit, DemandHour, ErrorSeverity, ErrorSite, FeatureImportance, HourlyAttention,
    IntervalWidth, LossSample, Residual, SobolIndex, SplitPoint, TabularRecord, TornadoParameter,
    TransferPoint,
};

/// Freshly generated rows for one figure.
///
/// Each variant carries the typed rows of exactly one figure; the variant
/// fixes the schema. Datasets are produced per transition and never reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "figure", content = "rows", rename_all = "snake_case")]
pub enum Dataset {
    BuildingAreas(Vec<AreaBin>),
    DataSplits(Vec<SplitPoint>),
    FeatureCorrelations(CorrelationMatrix),
    LearningCurves(Vec<LossSample>),
    SpatialAttention(Vec<AttentionWeight>),
    TemporalAttention(Vec<HourlyAttention>),
    FeatureImportance(Vec<FeatureImportance>),
    Residuals(Vec<Residual>),
    Calibration(Vec<CalibrationBin>),
    ErrorMap(Vec<ErrorSite>),
    SobolIndices(Vec<SobolIndex>),
    Tornado(Vec<TornadoParameter>),
    DemandSeries(Vec<DemandHour>),
    IntervalWidths(Vec<IntervalWidth>),
    TransferCurves(Vec<TransferPoint>),
}

fn rows<T: TabularRecord>(items: &[T]) -> Vec<Record> {
    items.iter().map(TabularRecord::to_record).collect()
}

impl Dataset {
    /// Figure this dataset belongs to.
    #[must_use]
    pub fn figure(&self) -> FigureId {
        let raw = match self {
            Self::BuildingAreas(_) => 1,
            Self::DataSplits(_) => 2,
            Self::FeatureCorrelations(_) => 3,
            Self::LearningCurves(_) => 4,
            Self::SpatialAttention(_) => 5,
            Self::TemporalAttention(_) => 6,
            Self::FeatureImportance(_) => 7,
            Self::Residuals(_) => 8,
            Self::Calibration(_) => 9,
            Self::ErrorMap(_) => 10,
            Self::SobolIndices(_) => 11,
            Self::Tornado(_) => 12,
            Self::DemandSeries(_) => 13,
            Self::IntervalWidths(_) => 14,
            Self::TransferCurves(_) => 15,
        };
        FigureId::clamped(raw)
    }

    #[must_use]
    pub fn schema(&self) -> &'static [FieldSchema] {
        match self {
            Self::BuildingAreas(_) => AreaBin::SCHEMA,
            Self::DataSplits(_) => SplitPoint::SCHEMA,
            Self::FeatureCorrelations(_) => CorrelationCell::SCHEMA,
            Self::LearningCurves(_) => LossSample::SCHEMA,
            Self::SpatialAttention(_) => AttentionWeight::SCHEMA,
            Self::TemporalAttention(_) => HourlyAttention::SCHEMA,
            Self::FeatureImportance(_) => FeatureImportance::SCHEMA,
            Self::Residuals(_) => Residual::SCHEMA,
            Self::Calibration(_) => CalibrationBin::SCHEMA,
            Self::ErrorMap(_) => ErrorSite::SCHEMA,
            Self::SobolIndices(_) => SobolIndex::SCHEMA,
            Self::Tornado(_) => TornadoParameter::SCHEMA,
            Self::DemandSeries(_) => DemandHour::SCHEMA,
            Self::IntervalWidths(_) => IntervalWidth::SCHEMA,
            Self::TransferCurves(_) => TransferPoint::SCHEMA,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::BuildingAreas(items) => items.len(),
            Self::DataSplits(items) => items.len(),
            Self::FeatureCorrelations(matrix) => matrix.cells.len(),
            Self::LearningCurves(items) => items.len(),
            Self::SpatialAttention(items) => items.len(),
            Self::TemporalAttention(items) => items.len(),
            Self::FeatureImportance(items) => items.len(),
            Self::Residuals(items) => items.len(),
            Self::Calibration(items) => items.len(),
            Self::ErrorMap(items) => items.len(),
            Self::SobolIndices(items) => items.len(),
            Self::Tornado(items) => items.len(),
            Self::DemandSeries(items) => items.len(),
            Self::IntervalWidths(items) => items.len(),
            Self::TransferCurves(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field-keyed view of every row, in schema order.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        match self {
            Self::BuildingAreas(items) => rows(items),
            Self::DataSplits(items) => rows(items),
            Self::FeatureCorrelations(matrix) => rows(&matrix.cells),
            Self::LearningCurves(items) => rows(items),
            Self::SpatialAttention(items) => rows(items),
            Self::TemporalAttention(items) => rows(items),
            Self::FeatureImportance(items) => rows(items),
            Self::Residuals(items) => rows(items),
            Self::Calibration(items) => rows(items),
            Self::ErrorMap(items) => rows(items),
            Self::SobolIndices(items) => rows(items),
            Self::Tornado(items) => rows(items),
            Self::DemandSeries(items) => rows(items),
            Self::IntervalWidths(items) => rows(items),
            Self::TransferCurves(items) => rows(items),
        }
    }
}
