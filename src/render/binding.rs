//! Resolves a [`ChartSpec`] against a [`Dataset`] into backend-agnostic
//! geometry inputs: columns, per-point colors, stack offsets and the two
//! hand-assembled grid layouts.

use ordered_float::OrderedFloat;
use serde::Serialize;
use tracing::warn;

use crate::core::{FieldKind, FieldValue, FigureId, Record, find_field};
use crate::data::Dataset;
use crate::error::{GalleryError, GalleryResult};
use crate::registry::{
    ChartKind, ChartSpec, ColorEncoding, CustomLayout, Mark, SeriesBinding, StrokeStyle,
};

use super::Color;

/// One dataset field materialized in record order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn numeric(&self, index: usize) -> Option<f64> {
        match self {
            Self::Numeric(values) => values.get(index).copied(),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn text(&self, index: usize) -> Option<&str> {
        match self {
            Self::Text(values) => values.get(index).map(String::as_str),
            Self::Numeric(_) => None,
        }
    }
}

/// One drawn sample. `base` is the stack floor; unstacked marks use 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundPoint {
    pub record: usize,
    pub base: f64,
    pub value: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundSeries {
    pub name: String,
    pub field: &'static str,
    pub mark: Mark,
    pub stroke: StrokeStyle,
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub color: Color,
    pub points: Vec<BoundPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundReferenceLine {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
    pub color: Color,
    pub stroke: StrokeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub value: f64,
    pub fill: Color,
    pub text: String,
    /// Light label text on saturated fills.
    pub light_text: bool,
}

/// One tornado row. Extents are fractions of the half-width, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TornadoBar {
    pub name: String,
    pub low: f64,
    pub high: f64,
    pub low_extent: f64,
    pub high_extent: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum CustomGeometry {
    CorrelationGrid {
        labels: Vec<String>,
        cells: Vec<GridCell>,
    },
    Tornado {
        base_case: &'static str,
        perturbation_pct: u8,
        scale: f64,
        bars: Vec<TornadoBar>,
    },
}

/// Chart with every named field resolved to concrete values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundChart {
    pub figure: FigureId,
    pub kind: ChartKind,
    pub domain: Column,
    pub series: Vec<BoundSeries>,
    pub reference_lines: Vec<BoundReferenceLine>,
    pub custom: Option<CustomGeometry>,
}

impl BoundChart {
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }

    pub fn validate(&self) -> GalleryResult<()> {
        for series in &self.series {
            series.color.validate()?;
            for point in &series.points {
                if !point.value.is_finite() || !point.base.is_finite() {
                    return Err(GalleryError::InvalidData(format!(
                        "series `{}` has a non-finite value at record {}",
                        series.name, point.record
                    )));
                }
                point.color.validate()?;
            }
        }
        for line in &self.reference_lines {
            line.color.validate()?;
        }
        match &self.custom {
            Some(CustomGeometry::CorrelationGrid { cells, .. }) => {
                for cell in cells {
                    cell.fill.validate()?;
                }
            }
            Some(CustomGeometry::Tornado { bars, .. }) => {
                for bar in bars {
                    if !(0.0..=1.0).contains(&bar.low_extent)
                        || !(0.0..=1.0).contains(&bar.high_extent)
                    {
                        return Err(GalleryError::InvalidData(format!(
                            "tornado bar `{}` extends past the axis",
                            bar.name
                        )));
                    }
                }
            }
            None => {}
        }
        Ok(())
    }
}

/// Binds `chart` to `dataset`, failing on any field the schema lacks.
pub fn bind(dataset: &Dataset, chart: &ChartSpec) -> GalleryResult<BoundChart> {
    let figure = dataset.figure();
    let schema = dataset.schema();
    for field in chart.referenced_fields() {
        if find_field(schema, field).is_none() {
            warn!(
                figure = figure.get(),
                field, "chart spec references a field missing from the dataset"
            );
            return Err(GalleryError::UnboundField {
                figure: figure.get(),
                field: field.to_owned(),
            });
        }
    }

    let records = dataset.records();
    let domain_field = chart.domain_axis().field.ok_or_else(|| {
        GalleryError::InvalidData(format!("figure {figure}: domain axis has no field"))
    })?;
    let domain = column(&records, domain_field, field_kind(dataset, domain_field))?;

    let series = match chart.color {
        Some(ColorEncoding::Categorical { field, categories }) => {
            let keys = text_column(&records, field)?;
            let mut grouped = Vec::with_capacity(chart.series.len() * categories.len());
            if let Some(unknown) = keys
                .iter()
                .find(|key| !categories.iter().any(|category| category.value == key.as_str()))
            {
                return Err(GalleryError::InvalidData(format!(
                    "figure {figure}: `{field}` value `{unknown}` has no category style"
                )));
            }
            for binding in chart.series {
                let values = numeric_column(dataset, &records, binding.field)?;
                for category in categories {
                    let color = Color::from_hex(category.color)?;
                    let points = values
                        .iter()
                        .enumerate()
                        .filter(|(index, _)| keys[*index] == category.value)
                        .map(|(record, value)| BoundPoint {
                            record,
                            base: 0.0,
                            value: *value,
                            color,
                        })
                        .collect();
                    grouped.push(series_from(binding, category.name, color, points));
                }
            }
            grouped
        }
        encoding => {
            let stacked = matches!(chart.kind, ChartKind::StackedArea);
            let mut floor = vec![0.0; records.len()];
            let mut bound = Vec::with_capacity(chart.series.len());
            for binding in chart.series {
                let values = numeric_column(dataset, &records, binding.field)?;
                let color = Color::from_hex(binding.color)?;
                let mut points = Vec::with_capacity(values.len());
                for (record, value) in values.iter().copied().enumerate() {
                    let base = if stacked { floor[record] } else { 0.0 };
                    let point_color = match encoding {
                        Some(encoding) => {
                            let channel = numeric_value(&records[record], encoding.field())?;
                            encoded_color(encoding, channel, color)?
                        }
                        None => color,
                    };
                    points.push(BoundPoint {
                        record,
                        base,
                        value: base + value,
                        color: point_color,
                    });
                    if stacked {
                        floor[record] += value;
                    }
                }
                bound.push(series_from(binding, binding.name, color, points));
            }
            bound
        }
    };

    let reference_lines = chart
        .reference_lines
        .iter()
        .map(|line| {
            Ok(BoundReferenceLine {
                x_start: line.x_start,
                x_end: line.x_end,
                y: line.y,
                color: Color::from_hex(line.color)?,
                stroke: line.stroke,
            })
        })
        .collect::<GalleryResult<Vec<_>>>()?;

    let custom = match chart.kind {
        ChartKind::Custom { layout } => Some(bind_custom(
            figure, layout, chart, dataset, &records, &domain,
        )?),
        _ => None,
    };

    Ok(BoundChart {
        figure,
        kind: chart.kind,
        domain,
        series,
        reference_lines,
        custom,
    })
}

fn series_from(
    binding: &SeriesBinding,
    name: &str,
    color: Color,
    points: Vec<BoundPoint>,
) -> BoundSeries {
    BoundSeries {
        name: name.to_owned(),
        field: binding.field,
        mark: binding.mark,
        stroke: binding.stroke,
        stroke_width: binding.stroke_width,
        fill_opacity: binding.fill_opacity,
        color,
        points,
    }
}

fn field_kind(dataset: &Dataset, field: &str) -> FieldKind {
    find_field(dataset.schema(), field)
        .map(|schema| schema.kind)
        .unwrap_or(FieldKind::Text)
}

fn column(records: &[Record], field: &str, kind: FieldKind) -> GalleryResult<Column> {
    if kind.is_numeric() {
        records
            .iter()
            .map(|record| numeric_value(record, field))
            .collect::<GalleryResult<Vec<_>>>()
            .map(Column::Numeric)
    } else {
        text_column(records, field).map(Column::Text)
    }
}

fn numeric_column(dataset: &Dataset, records: &[Record], field: &str) -> GalleryResult<Vec<f64>> {
    if !field_kind(dataset, field).is_numeric() {
        return Err(GalleryError::InvalidData(format!(
            "figure {}: series field `{field}` is not numeric",
            dataset.figure()
        )));
    }
    records
        .iter()
        .map(|record| numeric_value(record, field))
        .collect()
}

fn text_column(records: &[Record], field: &str) -> GalleryResult<Vec<String>> {
    records
        .iter()
        .map(|record| match record.get(field) {
            Some(FieldValue::Text(value)) => Ok(value.clone()),
            Some(other) => Ok(match other.as_f64() {
                Some(number) => number.to_string(),
                None => String::new(),
            }),
            None => Err(missing(field)),
        })
        .collect()
}

fn numeric_value(record: &Record, field: &str) -> GalleryResult<f64> {
    let value = record
        .get(field)
        .ok_or_else(|| missing(field))?
        .as_f64()
        .ok_or_else(|| GalleryError::InvalidData(format!("field `{field}` is not numeric")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GalleryError::InvalidData(format!(
            "field `{field}` must be finite"
        )))
    }
}

fn missing(field: &str) -> GalleryError {
    GalleryError::InvalidData(format!("record is missing field `{field}`"))
}

/// Color for one record under a non-categorical encoding.
fn encoded_color(encoding: ColorEncoding, value: f64, fallback: Color) -> GalleryResult<Color> {
    match encoding {
        ColorEncoding::Threshold {
            thresholds, colors, ..
        } => {
            let hex = if value < thresholds[0] {
                colors[0]
            } else if value < thresholds[1] {
                colors[1]
            } else {
                colors[2]
            };
            Color::from_hex(hex)
        }
        ColorEncoding::AlphaRamp { color, offset, .. } => {
            Ok(Color::from_hex(color)?.with_alpha(offset + value))
        }
        ColorEncoding::Diverging {
            positive, negative, ..
        } => diverging_color(positive, negative, value),
        ColorEncoding::Categorical { .. } => Ok(fallback),
    }
}

fn diverging_color(positive: &str, negative: &str, value: f64) -> GalleryResult<Color> {
    if value > 0.0 {
        Ok(Color::from_hex(positive)?.with_alpha(value))
    } else {
        Ok(Color::from_hex(negative)?.with_alpha(-value))
    }
}

fn bind_custom(
    figure: FigureId,
    layout: CustomLayout,
    chart: &ChartSpec,
    dataset: &Dataset,
    records: &[Record],
    domain: &Column,
) -> GalleryResult<CustomGeometry> {
    match layout {
        CustomLayout::CorrelationMatrix { row_label, .. } => {
            let size = (records.len() as f64).sqrt().round() as usize;
            if size == 0 || size * size != records.len() {
                return Err(GalleryError::InvalidData(format!(
                    "figure {figure}: correlation grid needs a square cell count, got {}",
                    records.len()
                )));
            }
            let value_binding = chart.series.first().ok_or_else(|| {
                GalleryError::InvalidData(format!("figure {figure}: grid has no value series"))
            })?;
            let column_field = chart.y.field.ok_or_else(|| {
                GalleryError::InvalidData(format!("figure {figure}: grid has no column field"))
            })?;
            let labels = text_column(records, row_label)?
                .into_iter()
                .step_by(size)
                .collect();

            let mut cells = Vec::with_capacity(records.len());
            for (index, record) in records.iter().enumerate() {
                let value = numeric_value(record, value_binding.field)?;
                let (fill, light_text) = match chart.color {
                    Some(ColorEncoding::Diverging {
                        positive,
                        negative,
                        contrast_above,
                        ..
                    }) => (
                        diverging_color(positive, negative, value)?,
                        value.abs() > contrast_above,
                    ),
                    _ => (Color::from_hex(value_binding.color)?, false),
                };
                cells.push(GridCell {
                    row: domain.numeric(index).unwrap_or_default() as usize,
                    column: numeric_value(record, column_field)? as usize,
                    value,
                    fill,
                    text: format!("{value:.2}"),
                    light_text,
                });
            }
            Ok(CustomGeometry::CorrelationGrid { labels, cells })
        }
        CustomLayout::Tornado {
            base_case,
            perturbation_pct,
        } => {
            let [low_binding, high_binding] = chart.series else {
                return Err(GalleryError::InvalidData(format!(
                    "figure {figure}: tornado needs exactly a low and a high series"
                )));
            };
            let lows = numeric_column(dataset, records, low_binding.field)?;
            let highs = numeric_column(dataset, records, high_binding.field)?;
            let scale = lows
                .iter()
                .chain(highs.iter())
                .map(|value| OrderedFloat(value.abs()))
                .max()
                .map_or(0.0, |max| max.0);
            if scale <= 0.0 {
                return Err(GalleryError::InvalidData(format!(
                    "figure {figure}: tornado impacts are all zero"
                )));
            }

            let mut bars: Vec<TornadoBar> = (0..records.len())
                .map(|index| {
                    let (low, high) = (lows[index], highs[index]);
                    TornadoBar {
                        name: domain.text(index).unwrap_or_default().to_owned(),
                        low,
                        high,
                        low_extent: low.abs() / scale,
                        high_extent: high.abs() / scale,
                        label: format!("{low:.1}B / {high:.1}B"),
                    }
                })
                .collect();
            bars.sort_by_key(|bar| std::cmp::Reverse(OrderedFloat(bar.high - bar.low)));

            Ok(CustomGeometry::Tornado {
                base_case,
                perturbation_pct,
                scale,
                bars,
            })
        }
    }
}
