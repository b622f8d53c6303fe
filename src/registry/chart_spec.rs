use serde::Serialize;

/// Bar direction. Horizontal bars put the category field on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    Vertical,
    Horizontal,
}

/// Hand-assembled grids that are not standard chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum CustomLayout {
    /// Square heatmap; `row_label`/`column_label` name the text fields
    /// holding the feature names.
    CorrelationMatrix {
        row_label: &'static str,
        column_label: &'static str,
    },
    /// Diverging horizontal bars around a base case.
    Tornado {
        base_case: &'static str,
        perturbation_pct: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    /// Multiple series render as grouped bars.
    Bar { orientation: BarOrientation },
    Line,
    Scatter,
    Area,
    StackedArea,
    Custom { layout: CustomLayout },
}

impl ChartKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar {
                orientation: BarOrientation::Vertical,
            } => "bar",
            Self::Bar {
                orientation: BarOrientation::Horizontal,
            } => "horizontal-bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Area => "area",
            Self::StackedArea => "stacked-area",
            Self::Custom {
                layout: CustomLayout::CorrelationMatrix { .. },
            } => "correlation-matrix",
            Self::Custom {
                layout: CustomLayout::Tornado { .. },
            } => "tornado",
        }
    }

    /// Axis holding the independent (category or domain) field.
    #[must_use]
    pub const fn domain_is_y(self) -> bool {
        matches!(
            self,
            Self::Bar {
                orientation: BarOrientation::Horizontal
            } | Self::Custom {
                layout: CustomLayout::Tornado { .. }
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScale {
    Category,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBinding {
    /// Dataset field on this axis; `None` for a pure value axis.
    pub field: Option<&'static str>,
    pub label: Option<&'static str>,
    pub scale: AxisScale,
}

impl AxisBinding {
    #[must_use]
    pub const fn category(field: &'static str) -> Self {
        Self {
            field: Some(field),
            label: None,
            scale: AxisScale::Category,
        }
    }

    #[must_use]
    pub const fn number(field: &'static str) -> Self {
        Self {
            field: Some(field),
            label: None,
            scale: AxisScale::Number,
        }
    }

    #[must_use]
    pub const fn value() -> Self {
        Self {
            field: None,
            label: None,
            scale: AxisScale::Number,
        }
    }

    #[must_use]
    pub const fn labeled(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }
}

/// Visual mark used for one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bar,
    Line,
    Area,
    Point,
    /// One cell of a manual grid layout.
    Cell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeStyle {
    Solid,
    Dashed,
    None,
}

/// Maps one numeric dataset field to a drawn series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesBinding {
    pub field: &'static str,
    pub name: &'static str,
    /// `#rrggbb`.
    pub color: &'static str,
    pub mark: Mark,
    pub stroke: StrokeStyle,
    pub stroke_width: f64,
    pub fill_opacity: f64,
}

impl SeriesBinding {
    #[must_use]
    pub const fn new(
        field: &'static str,
        name: &'static str,
        color: &'static str,
        mark: Mark,
    ) -> Self {
        Self {
            field,
            name,
            color,
            mark,
            stroke: StrokeStyle::Solid,
            stroke_width: 1.0,
            fill_opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn stroke(mut self, stroke: StrokeStyle, width: f64) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub const fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }
}

/// One value of a categorical color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub value: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// Per-record color channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "encoding", rename_all = "snake_case")]
pub enum ColorEncoding {
    /// Splits a scatter into one series per category value.
    Categorical {
        field: &'static str,
        categories: &'static [CategoryStyle],
    },
    /// `value < thresholds[0]` takes `colors[0]`, below `thresholds[1]`
    /// takes `colors[1]`, anything else `colors[2]`.
    Threshold {
        field: &'static str,
        thresholds: [f64; 2],
        colors: [&'static str; 3],
    },
    /// Fixed hue with alpha `offset + value`, capped at 1.
    AlphaRamp {
        field: &'static str,
        color: &'static str,
        offset: f64,
    },
    /// Positive values use `positive` with alpha `v`, the rest `negative`
    /// with alpha `-v`. Labels switch to light text above `contrast_above`.
    Diverging {
        field: &'static str,
        positive: &'static str,
        negative: &'static str,
        contrast_above: f64,
    },
}

impl ColorEncoding {
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Categorical { field, .. }
            | Self::Threshold { field, .. }
            | Self::AlphaRamp { field, .. }
            | Self::Diverging { field, .. } => *field,
        }
    }
}

/// Constant horizontal guide drawn across part of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
    pub color: &'static str,
    pub stroke: StrokeStyle,
}

/// Declarative chart description consumed by render adapters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: AxisBinding,
    pub y: AxisBinding,
    pub series: &'static [SeriesBinding],
    pub color: Option<ColorEncoding>,
    pub reference_lines: &'static [ReferenceLine],
    pub legend: bool,
}

impl ChartSpec {
    /// Axis carrying the independent field for this chart kind.
    #[must_use]
    pub const fn domain_axis(&self) -> AxisBinding {
        if self.kind.domain_is_y() { self.y } else { self.x }
    }

    /// Every dataset field this spec binds, axes first.
    #[must_use]
    pub fn referenced_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let mut push = |field: &'static str| {
            if !fields.contains(&field) {
                fields.push(field);
            }
        };
        if let Some(field) = self.x.field {
            push(field);
        }
        if let Some(field) = self.y.field {
            push(field);
        }
        for series in self.series {
            push(series.field);
        }
        if let Some(color) = self.color {
            push(color.field());
        }
        if let ChartKind::Custom {
            layout:
                CustomLayout::CorrelationMatrix {
                    row_label,
                    column_label,
                },
        } = self.kind
        {
            push(row_label);
            push(column_label);
        }
        fields
    }
}
