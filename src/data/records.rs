use serde::Serialize;

use crate::core::{FieldSchema, FieldValue, Record, record};

/// Row type with a fixed, named schema.
///
/// `SCHEMA` and `to_record` must list fields in the same order; render
/// adapters bind chart channels against these names.
pub trait TabularRecord {
    const SCHEMA: &'static [FieldSchema];

    fn to_record(&self) -> Record;
}

/// Figure 1: building counts per footprint-area bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaBin {
    pub bin: String,
    pub dhaka: u32,
    pub kolkata: u32,
    pub karachi: u32,
}

impl TabularRecord for AreaBin {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("bin"),
        FieldSchema::integer("dhaka"),
        FieldSchema::integer("kolkata"),
        FieldSchema::integer("karachi"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("bin", FieldValue::from(self.bin.as_str())),
            ("dhaka", self.dhaka.into()),
            ("kolkata", self.kolkata.into()),
            ("karachi", self.karachi.into()),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataSplit {
    Train,
    Validation,
    Test,
}

impl DataSplit {
    pub const ALL: [Self; 3] = [Self::Train, Self::Validation, Self::Test];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Train => "Train",
            Self::Validation => "Validation",
            Self::Test => "Test",
        }
    }
}

/// Figure 2: one sampled location and the split it was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitPoint {
    pub x: f64,
    pub y: f64,
    pub set: DataSplit,
}

impl TabularRecord for SplitPoint {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::float("x"),
        FieldSchema::float("y"),
        FieldSchema::text("set"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("x", self.x.into()),
            ("y", self.y.into()),
            ("set", self.set.as_str().into()),
        ])
    }
}

/// Figure 3: one cell of the feature correlation matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationCell {
    pub x: u32,
    pub y: u32,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub value: f64,
}

impl TabularRecord for CorrelationCell {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("x"),
        FieldSchema::integer("y"),
        FieldSchema::text("xLabel"),
        FieldSchema::text("yLabel"),
        FieldSchema::float("value"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("x", self.x.into()),
            ("y", self.y.into()),
            ("xLabel", self.x_label.into()),
            ("yLabel", self.y_label.into()),
            ("value", self.value.into()),
        ])
    }
}

/// Square, symmetric correlation matrix stored row-major as cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub features: &'static [&'static str],
    pub cells: Vec<CorrelationCell>,
}

impl CorrelationMatrix {
    #[must_use]
    pub fn size(&self) -> usize {
        self.features.len()
    }

    /// Value at row `x`, column `y`.
    #[must_use]
    pub fn value(&self, x: usize, y: usize) -> Option<f64> {
        let size = self.size();
        if x >= size || y >= size {
            return None;
        }
        self.cells.get(x * size + y).map(|cell| cell.value)
    }
}

/// Figure 4: per-epoch training and validation loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LossSample {
    pub epoch: u32,
    pub train_loss: f64,
    pub val_loss: f64,
}

impl TabularRecord for LossSample {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("epoch"),
        FieldSchema::float("trainLoss"),
        FieldSchema::float("valLoss"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("epoch", self.epoch.into()),
            ("trainLoss", self.train_loss.into()),
            ("valLoss", self.val_loss.into()),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuildingType {
    Residential,
    Commercial,
    Industrial,
    Mixed,
}

impl BuildingType {
    pub const ALL: [Self; 4] = [
        Self::Residential,
        Self::Commercial,
        Self::Industrial,
        Self::Mixed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
            Self::Mixed => "Mixed",
        }
    }
}

/// Figure 5: attention weight a neighbouring building receives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttentionWeight {
    pub building: u32,
    pub weight: f64,
    pub distance: f64,
    #[serde(rename = "type")]
    pub building_type: BuildingType,
}

impl TabularRecord for AttentionWeight {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("building"),
        FieldSchema::float("weight"),
        FieldSchema::float("distance"),
        FieldSchema::text("type"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("building", self.building.into()),
            ("weight", self.weight.into()),
            ("distance", self.distance.into()),
            ("type", self.building_type.as_str().into()),
        ])
    }
}

/// Figure 6: hour-of-day attention for the three demand regimes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyAttention {
    pub hour: u32,
    pub morning: f64,
    pub evening: f64,
    pub night: f64,
}

impl TabularRecord for HourlyAttention {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("hour"),
        FieldSchema::float("morning"),
        FieldSchema::float("evening"),
        FieldSchema::float("night"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("hour", self.hour.into()),
            ("morning", self.morning.into()),
            ("evening", self.evening.into()),
            ("night", self.night.into()),
        ])
    }
}

/// Figure 7: ablation importance of one input feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
    pub std: f64,
}

impl TabularRecord for FeatureImportance {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("feature"),
        FieldSchema::float("importance"),
        FieldSchema::float("std"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("feature", self.feature.into()),
            ("importance", self.importance.into()),
            ("std", self.std.into()),
        ])
    }
}

/// Figure 8: one prediction residual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Residual {
    pub predicted: f64,
    pub residual: f64,
    pub building_area: f64,
}

impl TabularRecord for Residual {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::float("predicted"),
        FieldSchema::float("residual"),
        FieldSchema::float("buildingArea"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("predicted", self.predicted.into()),
            ("residual", self.residual.into()),
            ("buildingArea", self.building_area.into()),
        ])
    }
}

/// Figure 9: one calibration bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationBin {
    pub predicted: f64,
    pub observed: f64,
    pub ideal: f64,
}

impl TabularRecord for CalibrationBin {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::float("predicted"),
        FieldSchema::float("observed"),
        FieldSchema::float("ideal"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("predicted", self.predicted.into()),
            ("observed", self.observed.into()),
            ("ideal", self.ideal.into()),
        ])
    }
}

/// Severity bucket used to color prediction-error sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    Low,
    Moderate,
    High,
}

impl ErrorSeverity {
    /// Upper bounds (exclusive) of the `Low` and `Moderate` buckets, in MAPE %.
    pub const THRESHOLDS: [f64; 2] = [10.0, 20.0];

    #[must_use]
    pub fn classify(error: f64) -> Self {
        if error < Self::THRESHOLDS[0] {
            Self::Low
        } else if error < Self::THRESHOLDS[1] {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

/// Figure 10: prediction error at one location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorSite {
    pub x: f64,
    pub y: f64,
    pub error: f64,
}

impl ErrorSite {
    #[must_use]
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::classify(self.error)
    }
}

impl TabularRecord for ErrorSite {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::float("x"),
        FieldSchema::float("y"),
        FieldSchema::float("error"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("x", self.x.into()),
            ("y", self.y.into()),
            ("error", self.error.into()),
        ])
    }
}

/// Figure 11: Sobol indices for one uncertain parameter, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SobolIndex {
    pub param: &'static str,
    pub first_order: f64,
    pub total_order: f64,
    pub error: f64,
}

impl TabularRecord for SobolIndex {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("param"),
        FieldSchema::float("firstOrder"),
        FieldSchema::float("totalOrder"),
        FieldSchema::float("error"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("param", self.param.into()),
            ("firstOrder", self.first_order.into()),
            ("totalOrder", self.total_order.into()),
            ("error", self.error.into()),
        ])
    }
}

/// Figure 12: cost impact (billions USD) of a -/+ perturbation of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TornadoParameter {
    pub name: &'static str,
    pub low: f64,
    pub high: f64,
}

impl TornadoParameter {
    #[must_use]
    pub fn swing(&self) -> f64 {
        self.high - self.low
    }
}

impl TabularRecord for TornadoParameter {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("name"),
        FieldSchema::float("low"),
        FieldSchema::float("high"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("name", self.name.into()),
            ("low", self.low.into()),
            ("high", self.high.into()),
        ])
    }
}

/// Figure 13: one hour of the week-long demand comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandHour {
    pub hour: u32,
    pub observed: f64,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

impl TabularRecord for DemandHour {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("hour"),
        FieldSchema::float("observed"),
        FieldSchema::float("predicted"),
        FieldSchema::float("lower"),
        FieldSchema::float("upper"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("hour", self.hour.into()),
            ("observed", self.observed.into()),
            ("predicted", self.predicted.into()),
            ("lower", self.lower.into()),
            ("upper", self.upper.into()),
        ])
    }
}

/// Figure 14: mean prediction-interval width for one building class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalWidth {
    #[serde(rename = "type")]
    pub building_class: &'static str,
    pub width: f64,
    pub std: f64,
}

impl TabularRecord for IntervalWidth {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::text("type"),
        FieldSchema::float("width"),
        FieldSchema::float("std"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("type", self.building_class.into()),
            ("width", self.width.into()),
            ("std", self.std.into()),
        ])
    }
}

/// Figure 15: target-domain MAPE for three country transfer pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPoint {
    pub samples: u32,
    pub india_to_bangladesh: f64,
    pub pakistan_to_india: f64,
    pub bangladesh_to_pakistan: f64,
}

impl TabularRecord for TransferPoint {
    const SCHEMA: &'static [FieldSchema] = &[
        FieldSchema::integer("samples"),
        FieldSchema::float("indiaToBangladesh"),
        FieldSchema::float("pakistanToIndia"),
        FieldSchema::float("bangladeshToPakistan"),
    ];

    fn to_record(&self) -> Record {
        record([
            ("samples", self.samples.into()),
            ("indiaToBangladesh", self.india_to_bangladesh.into()),
            ("pakistanToIndia", self.pakistan_to_india.into()),
            ("bangladeshToPakistan", self.bangladesh_to_pakistan.into()),
        ])
    }
}
