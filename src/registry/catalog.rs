//! The fixed table of gallery figures.

use rand::RngCore;

use crate::core::{FigureId, TOTAL_FIGURES};
use crate::data::{Dataset, ErrorSeverity, synthesis, tables};

use super::FigureDescriptor;
use super::chart_spec::{
    AxisBinding, BarOrientation, CategoryStyle, ChartKind, ChartSpec, ColorEncoding, CustomLayout,
    Mark, ReferenceLine, SeriesBinding, StrokeStyle,
};

pub const GALLERY_TITLE: &str = "Supplementary Figures";
pub const GALLERY_SUBTITLE: &str =
    "Multimodal Machine Learning Framework for High-Resolution Electricity Demand Prediction";

const BLUE: &str = "#3b82f6";
const GREEN: &str = "#10b981";
const AMBER: &str = "#f59e0b";
const RED: &str = "#ef4444";
const VIOLET: &str = "#8b5cf6";
const INDIGO: &str = "#6366f1";
const SLATE: &str = "#94a3b8";

fn building_areas(rng: &mut dyn RngCore) -> Dataset {
    Dataset::BuildingAreas(synthesis::building_area_bins(rng))
}

fn data_splits(rng: &mut dyn RngCore) -> Dataset {
    Dataset::DataSplits(synthesis::split_points(rng))
}

fn feature_correlations(rng: &mut dyn RngCore) -> Dataset {
    Dataset::FeatureCorrelations(synthesis::feature_correlations(rng))
}

fn learning_curves(rng: &mut dyn RngCore) -> Dataset {
    Dataset::LearningCurves(synthesis::learning_curves(rng))
}

fn spatial_attention(rng: &mut dyn RngCore) -> Dataset {
    Dataset::SpatialAttention(synthesis::spatial_attention(rng))
}

fn temporal_attention(rng: &mut dyn RngCore) -> Dataset {
    Dataset::TemporalAttention(synthesis::temporal_attention(rng))
}

fn feature_importance(_rng: &mut dyn RngCore) -> Dataset {
    Dataset::FeatureImportance(tables::feature_importance())
}

fn residuals(rng: &mut dyn RngCore) -> Dataset {
    Dataset::Residuals(synthesis::residuals(rng))
}

fn calibration(rng: &mut dyn RngCore) -> Dataset {
    Dataset::Calibration(synthesis::calibration_bins(rng))
}

fn error_map(rng: &mut dyn RngCore) -> Dataset {
    Dataset::ErrorMap(synthesis::error_sites(rng))
}

fn sobol_indices(_rng: &mut dyn RngCore) -> Dataset {
    Dataset::SobolIndices(tables::sobol_indices())
}

fn tornado(_rng: &mut dyn RngCore) -> Dataset {
    Dataset::Tornado(tables::tornado_parameters())
}

fn demand_series(rng: &mut dyn RngCore) -> Dataset {
    Dataset::DemandSeries(synthesis::demand_series(rng))
}

fn interval_widths(_rng: &mut dyn RngCore) -> Dataset {
    Dataset::IntervalWidths(tables::interval_widths())
}

fn transfer_curves(rng: &mut dyn RngCore) -> Dataset {
    Dataset::TransferCurves(synthesis::transfer_curves(rng))
}

const fn chart(kind: ChartKind, x: AxisBinding, y: AxisBinding) -> ChartSpec {
    ChartSpec {
        kind,
        x,
        y,
        series: &[],
        color: None,
        reference_lines: &[],
        legend: true,
    }
}

const VERTICAL_BAR: ChartKind = ChartKind::Bar {
    orientation: BarOrientation::Vertical,
};
const HORIZONTAL_BAR: ChartKind = ChartKind::Bar {
    orientation: BarOrientation::Horizontal,
};

pub(super) static FIGURES: [FigureDescriptor; TOTAL_FIGURES as usize] = [
    FigureDescriptor {
        id: FigureId::literal(1),
        title: "Figure S1: Distribution of Building Footprint Areas",
        caption: "Right-skewed distributions with long tails characteristic of urban building stock across Dhaka, Kolkata, and Karachi. Log-normal distribution fit shown with dashed lines.",
        generator: building_areas,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("dhaka", "Dhaka", BLUE, Mark::Bar),
                SeriesBinding::new("kolkata", "Kolkata", GREEN, Mark::Bar),
                SeriesBinding::new("karachi", "Karachi", AMBER, Mark::Bar),
            ],
            ..chart(
                VERTICAL_BAR,
                AxisBinding::category("bin"),
                AxisBinding::value().labeled("Building Count"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(2),
        title: "Figure S2: Spatial Distribution of Training/Validation/Test Sets",
        caption: "Geographic stratification ensuring diverse representation across urban zones, settlement types, and infrastructure conditions.",
        generator: data_splits,
        chart: ChartSpec {
            series: &[SeriesBinding::new("y", "Locations", BLUE, Mark::Point)],
            color: Some(ColorEncoding::Categorical {
                field: "set",
                categories: &[
                    CategoryStyle {
                        value: "Train",
                        name: "Training",
                        color: BLUE,
                    },
                    CategoryStyle {
                        value: "Validation",
                        name: "Validation",
                        color: GREEN,
                    },
                    CategoryStyle {
                        value: "Test",
                        name: "Test",
                        color: AMBER,
                    },
                ],
            }),
            ..chart(
                ChartKind::Scatter,
                AxisBinding::number("x").labeled("Longitude (normalized)"),
                AxisBinding::number("y").labeled("Latitude (normalized)"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(3),
        title: "Figure S3: Correlation Matrix of Input Features",
        caption: "Identifying multicollinearity patterns. Strong positive correlations between population density and nighttime lights (r=0.71), moderate negative correlation between NDVI and building area (r=-0.43).",
        generator: feature_correlations,
        chart: ChartSpec {
            series: &[SeriesBinding::new("value", "Correlation", BLUE, Mark::Cell)],
            color: Some(ColorEncoding::Diverging {
                field: "value",
                positive: BLUE,
                negative: RED,
                contrast_above: 0.5,
            }),
            legend: false,
            ..chart(
                ChartKind::Custom {
                    layout: CustomLayout::CorrelationMatrix {
                        row_label: "xLabel",
                        column_label: "yLabel",
                    },
                },
                AxisBinding::number("x"),
                AxisBinding::number("y"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(4),
        title: "Figure S4: Learning Curves",
        caption: "Training and validation loss evolution demonstrating convergence without overfitting. Validation loss plateaus after ~150 epochs, suggesting optimal stopping point.",
        generator: learning_curves,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("trainLoss", "Training Loss", BLUE, Mark::Line),
                SeriesBinding::new("valLoss", "Validation Loss", RED, Mark::Line),
            ],
            ..chart(
                ChartKind::Line,
                AxisBinding::number("epoch").labeled("Epoch"),
                AxisBinding::value().labeled("Loss (MAE)"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(5),
        title: "Figure S5: Spatial Context Attention Weights",
        caption: "Attention weights from graph neural network showing which neighboring buildings most influence predictions. Larger weights on nearby commercial buildings during peak hours.",
        generator: spatial_attention,
        chart: ChartSpec {
            series: &[SeriesBinding::new(
                "weight",
                "Attention Weight",
                BLUE,
                Mark::Point,
            )],
            color: Some(ColorEncoding::Categorical {
                field: "type",
                categories: &[
                    CategoryStyle {
                        value: "Residential",
                        name: "Residential",
                        color: BLUE,
                    },
                    CategoryStyle {
                        value: "Commercial",
                        name: "Commercial",
                        color: GREEN,
                    },
                    CategoryStyle {
                        value: "Industrial",
                        name: "Industrial",
                        color: AMBER,
                    },
                    CategoryStyle {
                        value: "Mixed",
                        name: "Mixed",
                        color: VIOLET,
                    },
                ],
            }),
            ..chart(
                ChartKind::Scatter,
                AxisBinding::number("distance").labeled("Distance (m)"),
                AxisBinding::number("weight").labeled("Attention Weight"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(6),
        title: "Figure S6: Temporal Attention Patterns",
        caption: "Hour-of-day attention weights showing model focus during demand prediction. Peak attention during morning (6-9am) and evening (5-9pm) hours corresponding to high-variability periods.",
        generator: temporal_attention,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("morning", "Morning Peak", AMBER, Mark::Area).fill_opacity(0.6),
                SeriesBinding::new("evening", "Evening Peak", BLUE, Mark::Area).fill_opacity(0.6),
                SeriesBinding::new("night", "Night Base", INDIGO, Mark::Area).fill_opacity(0.6),
            ],
            ..chart(
                ChartKind::StackedArea,
                AxisBinding::number("hour").labeled("Hour of Day"),
                AxisBinding::value().labeled("Attention Weight"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(7),
        title: "Figure S7: Feature Importance from Ablation Studies",
        caption: "Contribution of each input modality measured by performance degradation when removed. Satellite imagery contributes 23%, building attributes 19%, spatial context 16%.",
        generator: feature_importance,
        chart: ChartSpec {
            series: &[SeriesBinding::new(
                "importance",
                "Importance",
                BLUE,
                Mark::Bar,
            )],
            color: Some(ColorEncoding::AlphaRamp {
                field: "importance",
                color: BLUE,
                offset: 0.4,
            }),
            legend: false,
            ..chart(
                HORIZONTAL_BAR,
                AxisBinding::value().labeled("Importance Score"),
                AxisBinding::category("feature"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(8),
        title: "Figure S8: Residual Analysis",
        caption: "Prediction errors versus predicted values showing no systematic bias. Slight heteroskedasticity observed with increased variance for high-demand buildings.",
        generator: residuals,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("residual", "Residuals", BLUE, Mark::Point).fill_opacity(0.5),
            ],
            reference_lines: &[ReferenceLine {
                x_start: 0.0,
                x_end: 150.0,
                y: 0.0,
                color: RED,
                stroke: StrokeStyle::Dashed,
            }],
            legend: false,
            ..chart(
                ChartKind::Scatter,
                AxisBinding::number("predicted").labeled("Predicted Demand (kWh)"),
                AxisBinding::number("residual").labeled("Residual (kWh)"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(9),
        title: "Figure S9: Calibration Curves for Probabilistic Predictions",
        caption: "Well-calibrated uncertainty estimates with observed frequencies closely matching predicted probabilities. Mean calibration error: 3.2%.",
        generator: calibration,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("ideal", "Perfect Calibration", SLATE, Mark::Line)
                    .stroke(StrokeStyle::Dashed, 1.0),
                SeriesBinding::new("observed", "Model Calibration", BLUE, Mark::Line)
                    .stroke(StrokeStyle::Solid, 2.0),
            ],
            ..chart(
                ChartKind::Line,
                AxisBinding::number("predicted").labeled("Predicted Probability"),
                AxisBinding::value().labeled("Observed Frequency"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(10),
        title: "Figure S10: Geographic Distribution of Prediction Errors",
        caption: "Spatial patterns in MAPE showing higher errors in peripheral informal settlements and newly developed areas with limited historical data.",
        generator: error_map,
        chart: ChartSpec {
            series: &[SeriesBinding::new("y", "MAPE (%)", BLUE, Mark::Point)],
            color: Some(ColorEncoding::Threshold {
                field: "error",
                thresholds: ErrorSeverity::THRESHOLDS,
                colors: [GREEN, AMBER, RED],
            }),
            legend: false,
            ..chart(
                ChartKind::Scatter,
                AxisBinding::number("x").labeled("Longitude (normalized)"),
                AxisBinding::number("y").labeled("Latitude (normalized)"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(11),
        title: "Figure S11: Sobol Sensitivity Indices",
        caption: "First-order and total-order indices with 95% confidence intervals. Peak demand growth dominates with 34.2% first-order contribution and 42.8% total effect including interactions.",
        generator: sobol_indices,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("firstOrder", "First-Order", BLUE, Mark::Bar),
                SeriesBinding::new("totalOrder", "Total-Order", GREEN, Mark::Bar),
            ],
            ..chart(
                HORIZONTAL_BAR,
                AxisBinding::value().labeled("Variance Contribution (%)"),
                AxisBinding::category("param"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(12),
        title: "Figure S12: Tornado Diagram - Parameter Sensitivity",
        caption: "Impact of ±20% parameter perturbations on total capacity expansion cost. Demand growth rate shows highest sensitivity with ±$2.8B impact.",
        generator: tornado,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("low", "-20%", RED, Mark::Bar),
                SeriesBinding::new("high", "+20%", BLUE, Mark::Bar),
            ],
            ..chart(
                ChartKind::Custom {
                    layout: CustomLayout::Tornado {
                        base_case: "$15.2B",
                        perturbation_pct: 20,
                    },
                },
                AxisBinding::value().labeled("Cost Impact ($B)"),
                AxisBinding::category("name"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(13),
        title: "Figure S13: Time Series - Observed vs Predicted",
        caption: "Week-long demand profile comparison for representative residential building. Model captures daily patterns and weekend effects with 90% prediction intervals.",
        generator: demand_series,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("upper", "Upper Bound", BLUE, Mark::Area)
                    .stroke(StrokeStyle::None, 0.0)
                    .fill_opacity(0.1),
                SeriesBinding::new("lower", "Lower Bound", BLUE, Mark::Area)
                    .stroke(StrokeStyle::None, 0.0)
                    .fill_opacity(0.1),
                SeriesBinding::new("observed", "Observed", RED, Mark::Line)
                    .stroke(StrokeStyle::Solid, 2.0),
                SeriesBinding::new("predicted", "Predicted", BLUE, Mark::Line)
                    .stroke(StrokeStyle::Solid, 2.0),
            ],
            ..chart(
                ChartKind::Line,
                AxisBinding::number("hour").labeled("Hour"),
                AxisBinding::value().labeled("Demand (kWh)"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(14),
        title: "Figure S14: Distribution of Prediction Interval Widths",
        caption: "Heteroskedastic uncertainty varying with building characteristics. Wider intervals for informal settlements (mean: 18.3 kWh) vs formal areas (mean: 12.1 kWh).",
        generator: interval_widths,
        chart: ChartSpec {
            series: &[SeriesBinding::new(
                "width",
                "Mean Interval Width",
                BLUE,
                Mark::Bar,
            )],
            legend: false,
            ..chart(
                VERTICAL_BAR,
                AxisBinding::category("type"),
                AxisBinding::value().labeled("Prediction Interval Width (kWh)"),
            )
        },
    },
    FigureDescriptor {
        id: FigureId::literal(15),
        title: "Figure S15: Transfer Learning Performance Curves",
        caption: "Cross-country generalization showing MAPE reduction with increasing target domain samples. Rapid improvement in first 500 samples, plateau after ~800 samples.",
        generator: transfer_curves,
        chart: ChartSpec {
            series: &[
                SeriesBinding::new("indiaToBangladesh", "India → Bangladesh", BLUE, Mark::Line)
                    .stroke(StrokeStyle::Solid, 2.0),
                SeriesBinding::new("pakistanToIndia", "Pakistan → India", GREEN, Mark::Line)
                    .stroke(StrokeStyle::Solid, 2.0),
                SeriesBinding::new(
                    "bangladeshToPakistan",
                    "Bangladesh → Pakistan",
                    AMBER,
                    Mark::Line,
                )
                .stroke(StrokeStyle::Solid, 2.0),
            ],
            ..chart(
                ChartKind::Line,
                AxisBinding::number("samples").labeled("Target Domain Training Samples"),
                AxisBinding::value().labeled("MAPE (%)"),
            )
        },
    },
];
