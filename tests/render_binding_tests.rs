use approx::assert_relative_eq;
use figure_gallery::data::ErrorSeverity;
use figure_gallery::data::synthesis::{self, CORRELATION_FEATURES};
use figure_gallery::data::{Dataset, tables};
use figure_gallery::registry::{
    AxisBinding, ChartKind, ChartSpec, FigureRegistry, Mark, SeriesBinding, StrokeStyle,
};
use figure_gallery::render::{Color, CustomGeometry, bind};
use figure_gallery::{FigureDescriptor, GalleryError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn descriptor(raw: i64) -> &'static FigureDescriptor {
    FigureRegistry::standard()
        .try_lookup(raw)
        .expect("known figure")
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2718)
}

#[test]
fn unknown_field_is_reported_before_rendering() {
    let dataset = Dataset::BuildingAreas(synthesis::building_area_bins(&mut rng()));
    let learning_curves = descriptor(4).chart;

    let err = bind(&dataset, &learning_curves).expect_err("schema mismatch");
    match err {
        GalleryError::UnboundField { figure, field } => {
            assert_eq!(figure, 1);
            assert_eq!(field, "epoch");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_series_field_is_rejected() {
    const SERIES: &[SeriesBinding] = &[SeriesBinding::new("bin", "Bins", "#3b82f6", Mark::Bar)];
    let chart = ChartSpec {
        kind: ChartKind::Line,
        x: AxisBinding::category("bin"),
        y: AxisBinding::value(),
        series: SERIES,
        color: None,
        reference_lines: &[],
        legend: false,
    };
    let dataset = Dataset::BuildingAreas(synthesis::building_area_bins(&mut rng()));
    assert!(matches!(
        bind(&dataset, &chart),
        Err(GalleryError::InvalidData(_))
    ));
}

#[test]
fn grouped_bars_bind_one_series_per_city() {
    let dataset = descriptor(1).generate(&mut rng());
    let bound = bind(&dataset, &descriptor(1).chart).expect("bind figure 1");

    assert_eq!(bound.record_count(), 12);
    let names: Vec<_> = bound.series.iter().map(|series| series.name.as_str()).collect();
    assert_eq!(names, ["Dhaka", "Kolkata", "Karachi"]);
    assert!(bound.domain.text(0).is_some());
    assert_eq!(bound.point_count(), 36);
    bound.validate().expect("finite geometry");
}

#[test]
fn categorical_scatter_splits_points_by_split() {
    let dataset = descriptor(2).generate(&mut rng());
    let bound = bind(&dataset, &descriptor(2).chart).expect("bind figure 2");

    let names: Vec<_> = bound.series.iter().map(|series| series.name.as_str()).collect();
    assert_eq!(names, ["Training", "Validation", "Test"]);
    assert_eq!(bound.point_count(), 100);

    let Dataset::DataSplits(points) = &dataset else {
        panic!("figure 2 produces split points");
    };
    let training = &bound.series[0];
    assert_eq!(training.color, Color::from_hex("#3b82f6").expect("hex"));
    for point in &training.points {
        assert_eq!(points[point.record].set.as_str(), "Train");
        assert_relative_eq!(point.value, points[point.record].y);
    }
}

#[test]
fn stacked_areas_rest_on_previous_layers() {
    let dataset = descriptor(6).generate(&mut rng());
    let bound = bind(&dataset, &descriptor(6).chart).expect("bind figure 6");
    assert_eq!(bound.series.len(), 3);

    let Dataset::TemporalAttention(hours) = &dataset else {
        panic!("figure 6 produces hourly attention");
    };
    for (index, hour) in hours.iter().enumerate() {
        let morning = bound.series[0].points[index];
        let evening = bound.series[1].points[index];
        let night = bound.series[2].points[index];
        assert_relative_eq!(morning.base, 0.0);
        assert_relative_eq!(morning.value, hour.morning);
        assert_relative_eq!(evening.base, morning.value);
        assert_relative_eq!(night.base, evening.value);
        assert_relative_eq!(night.value, hour.morning + hour.evening + hour.night);
    }
    assert_relative_eq!(bound.series[0].fill_opacity, 0.6);
}

#[test]
fn unstacked_lines_keep_zero_base() {
    let dataset = descriptor(13).generate(&mut rng());
    let bound = bind(&dataset, &descriptor(13).chart).expect("bind figure 13");
    assert!(
        bound
            .series
            .iter()
            .flat_map(|series| &series.points)
            .all(|point| point.base == 0.0)
    );
    assert_eq!(bound.series[0].stroke, StrokeStyle::None);
    assert_relative_eq!(bound.series[0].fill_opacity, 0.1);
}

#[test]
fn threshold_encoding_colors_error_sites() {
    let dataset = descriptor(10).generate(&mut rng());
    let bound = bind(&dataset, &descriptor(10).chart).expect("bind figure 10");
    let Dataset::ErrorMap(sites) = &dataset else {
        panic!("figure 10 produces error sites");
    };

    let green = Color::from_hex("#10b981").expect("hex");
    let amber = Color::from_hex("#f59e0b").expect("hex");
    let red = Color::from_hex("#ef4444").expect("hex");
    for point in &bound.series[0].points {
        let expected = match sites[point.record].severity() {
            ErrorSeverity::Low => green,
            ErrorSeverity::Moderate => amber,
            ErrorSeverity::High => red,
        };
        assert_eq!(point.color, expected);
    }
}

#[test]
fn alpha_ramp_tracks_importance() {
    let dataset = Dataset::FeatureImportance(tables::feature_importance());
    let chart = descriptor(7).chart;
    let bound = bind(&dataset, &chart).expect("bind figure 7");

    assert_eq!(bound.domain.text(0), Some("Building Area"));
    let first = bound.series[0].points[0];
    assert_relative_eq!(first.color.alpha, 0.63, epsilon = 1e-12);
    let last = bound.series[0].points[7];
    assert_relative_eq!(last.color.alpha, 0.44, epsilon = 1e-12);
}

#[test]
fn residual_chart_carries_dashed_zero_line() {
    let dataset = descriptor(8).generate(&mut rng());
    let bound = bind(&dataset, &descriptor(8).chart).expect("bind figure 8");
    assert_eq!(bound.reference_lines.len(), 1);
    let line = bound.reference_lines[0];
    assert_relative_eq!(line.y, 0.0);
    assert_relative_eq!(line.x_end, 150.0);
    assert_eq!(line.stroke, StrokeStyle::Dashed);
}

#[test]
fn correlation_grid_labels_and_contrast() {
    let dataset = descriptor(3).generate(&mut rng());
    let bound = bind(&dataset, &descriptor(3).chart).expect("bind figure 3");

    let Some(CustomGeometry::CorrelationGrid { labels, cells }) = &bound.custom else {
        panic!("figure 3 binds a correlation grid");
    };
    assert_eq!(labels, &CORRELATION_FEATURES);
    assert_eq!(cells.len(), 64);
    for cell in cells {
        if cell.row == cell.column {
            assert_eq!(cell.text, "1.00");
            assert!(cell.light_text);
            assert_relative_eq!(cell.fill.alpha, 1.0);
        } else {
            assert_eq!(cell.light_text, cell.value.abs() > 0.5);
            assert_relative_eq!(cell.fill.alpha, cell.value.abs());
        }
    }
}

#[test]
fn tornado_bars_sorted_by_swing_and_normalized() {
    let dataset = Dataset::Tornado(tables::tornado_parameters());
    let bound = bind(&dataset, &descriptor(12).chart).expect("bind figure 12");

    let Some(CustomGeometry::Tornado {
        base_case,
        perturbation_pct,
        scale,
        bars,
    }) = &bound.custom
    else {
        panic!("figure 12 binds a tornado");
    };
    assert_eq!(*base_case, "$15.2B");
    assert_eq!(*perturbation_pct, 20);
    assert_relative_eq!(*scale, 3.2);

    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0].name, "Demand Growth");
    assert_eq!(bars[0].label, "-2.8B / 3.2B");
    assert_relative_eq!(bars[0].high_extent, 1.0);
    assert_relative_eq!(bars[0].low_extent, 2.8 / 3.2);
    assert!(
        bars.windows(2)
            .all(|pair| pair[0].high - pair[0].low >= pair[1].high - pair[1].low)
    );
    assert!(
        bars.iter()
            .all(|bar| bar.low_extent <= 1.0 && bar.high_extent <= 1.0)
    );
}

#[test]
fn tornado_reorders_unsorted_input() {
    let mut parameters = tables::tornado_parameters();
    parameters.reverse();
    let bound = bind(&Dataset::Tornado(parameters), &descriptor(12).chart).expect("bind tornado");
    let Some(CustomGeometry::Tornado { bars, .. }) = bound.custom else {
        panic!("tornado geometry");
    };
    assert_eq!(bars[0].name, "Demand Growth");
    assert_eq!(bars[5].name, "Discount Rate");
}

#[test]
fn color_hex_parsing() {
    let blue = Color::from_hex("#3b82f6").expect("valid hex");
    assert_relative_eq!(blue.red, 59.0 / 255.0);
    assert_relative_eq!(blue.alpha, 1.0);
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("zzzzzz").is_err());
    assert_relative_eq!(blue.with_alpha(1.7).alpha, 1.0);
}
