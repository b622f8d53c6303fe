//! Stochastic generators.
//!
//! Each function draws from the caller's random source and returns a fresh
//! sequence; none of them keep state between calls. `uniform` below is the
//! `[0, 1)` draw every model is expressed in.

use std::f64::consts::PI;

use rand::Rng;

use super::records::{
    AreaBin, AttentionWeight, BuildingType, CalibrationBin, CorrelationCell, CorrelationMatrix,
    DataSplit, DemandHour, ErrorSite, HourlyAttention, LossSample, Residual, SplitPoint,
    TransferPoint,
};

pub const AREA_BIN_COUNT: usize = 12;
pub const AREA_BIN_WIDTH: f64 = 50.0;
pub const SPLIT_POINT_COUNT: usize = 100;
pub const EPOCH_COUNT: u32 = 200;
pub const ATTENTION_BUILDING_COUNT: u32 = 40;
pub const RESIDUAL_COUNT: usize = 200;
pub const CALIBRATION_BIN_COUNT: u32 = 10;
pub const ERROR_SITE_COUNT: usize = 150;
pub const WEEK_HOURS: u32 = 168;
pub const TRANSFER_STEP_COUNT: u32 = 20;
pub const TRANSFER_SAMPLE_STEP: u32 = 50;

/// Input features of the correlation matrix, in row/column order.
pub const CORRELATION_FEATURES: [&str; 8] = [
    "Pop Density",
    "Bldg Area",
    "NDVI",
    "Night Light",
    "Temp",
    "Road Dist",
    "Settlement Type",
    "Height",
];

/// Learning-curve floors: the loss never drops below these.
pub const TRAIN_LOSS_FLOOR: f64 = 0.05;
pub const VAL_LOSS_FLOOR: f64 = 0.08;

fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Right-skewed building counts per area bin for Dhaka, Kolkata and Karachi.
///
/// Counts decay as `exp(-i/8)` with city scales 500/450/380; the bin label
/// comes from a log-uniform footprint area.
pub fn building_area_bins<R: Rng + ?Sized>(rng: &mut R) -> Vec<AreaBin> {
    (0..AREA_BIN_COUNT)
        .map(|i| {
            let area = (uniform(rng) * 6.0 + 2.0).exp();
            let lower = (area / AREA_BIN_WIDTH).floor() * AREA_BIN_WIDTH;
            let decay = (-(i as f64) / 8.0).exp();
            AreaBin {
                bin: format!("{lower}-{}", lower + AREA_BIN_WIDTH),
                dhaka: (uniform(rng) * 500.0 * decay).floor() as u32,
                kolkata: (uniform(rng) * 450.0 * decay).floor() as u32,
                karachi: (uniform(rng) * 380.0 * decay).floor() as u32,
            }
        })
        .collect()
}

pub fn split_points<R: Rng + ?Sized>(rng: &mut R) -> Vec<SplitPoint> {
    (0..SPLIT_POINT_COUNT)
        .map(|_| SplitPoint {
            x: uniform(rng) * 100.0,
            y: uniform(rng) * 100.0,
            set: DataSplit::ALL[rng.random_range(0..DataSplit::ALL.len())],
        })
        .collect()
}

/// Symmetric correlation matrix over [`CORRELATION_FEATURES`].
///
/// The upper triangle is drawn from `uniform*0.8 - 0.2`; the lower triangle
/// mirrors it and the diagonal is exactly 1.
pub fn feature_correlations<R: Rng + ?Sized>(rng: &mut R) -> CorrelationMatrix {
    let size = CORRELATION_FEATURES.len();
    let mut cells: Vec<CorrelationCell> = Vec::with_capacity(size * size);
    for x in 0..size {
        for y in 0..size {
            let value = if x == y {
                1.0
            } else if x > y {
                // Row `y` is complete, so the mirrored cell already exists.
                cells[y * size + x].value
            } else {
                uniform(rng) * 0.8 - 0.2
            };
            cells.push(CorrelationCell {
                x: x as u32,
                y: y as u32,
                x_label: CORRELATION_FEATURES[x],
                y_label: CORRELATION_FEATURES[y],
                value,
            });
        }
    }

    CorrelationMatrix {
        features: &CORRELATION_FEATURES,
        cells,
    }
}

pub fn learning_curves<R: Rng + ?Sized>(rng: &mut R) -> Vec<LossSample> {
    (0..EPOCH_COUNT)
        .map(|epoch| {
            let t = f64::from(epoch);
            LossSample {
                epoch,
                train_loss: 0.8 * (-t / 30.0).exp() + TRAIN_LOSS_FLOOR + uniform(rng) * 0.02,
                val_loss: 0.9 * (-t / 35.0).exp() + VAL_LOSS_FLOOR + uniform(rng) * 0.03,
            }
        })
        .collect()
}

pub fn spatial_attention<R: Rng + ?Sized>(rng: &mut R) -> Vec<AttentionWeight> {
    (0..ATTENTION_BUILDING_COUNT)
        .map(|building| AttentionWeight {
            building,
            weight: uniform(rng) * 0.8 + 0.1,
            distance: uniform(rng) * 200.0,
            building_type: BuildingType::ALL[rng.random_range(0..BuildingType::ALL.len())],
        })
        .collect()
}

/// Peak windows (inclusive hours) for the temporal attention regimes.
#[must_use]
pub fn is_morning_peak(hour: u32) -> bool {
    (6..=9).contains(&hour)
}

#[must_use]
pub fn is_evening_peak(hour: u32) -> bool {
    (17..=21).contains(&hour)
}

#[must_use]
pub fn is_night(hour: u32) -> bool {
    hour >= 22 || hour <= 5
}

pub fn temporal_attention<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyAttention> {
    const OFF_PEAK: f64 = 0.1;
    (0..24)
        .map(|hour| HourlyAttention {
            hour,
            morning: uniform(rng) * 0.3 + if is_morning_peak(hour) { 0.5 } else { OFF_PEAK },
            evening: uniform(rng) * 0.3 + if is_evening_peak(hour) { 0.6 } else { OFF_PEAK },
            night: uniform(rng) * 0.2 + if is_night(hour) { 0.3 } else { OFF_PEAK },
        })
        .collect()
}

pub fn residuals<R: Rng + ?Sized>(rng: &mut R) -> Vec<Residual> {
    (0..RESIDUAL_COUNT)
        .map(|_| Residual {
            predicted: uniform(rng) * 100.0 + 20.0,
            residual: (uniform(rng) - 0.5) * 30.0,
            building_area: uniform(rng) * 500.0 + 50.0,
        })
        .collect()
}

/// Calibration bins on the fixed grid `(i + 0.5) / 10` with `±0.05` noise.
pub fn calibration_bins<R: Rng + ?Sized>(rng: &mut R) -> Vec<CalibrationBin> {
    (0..CALIBRATION_BIN_COUNT)
        .map(|i| {
            let predicted = (f64::from(i) + 0.5) / 10.0;
            CalibrationBin {
                predicted,
                observed: predicted + (uniform(rng) - 0.5) * 0.1,
                ideal: predicted,
            }
        })
        .collect()
}

pub fn error_sites<R: Rng + ?Sized>(rng: &mut R) -> Vec<ErrorSite> {
    (0..ERROR_SITE_COUNT)
        .map(|_| ErrorSite {
            x: uniform(rng) * 100.0,
            y: uniform(rng) * 100.0,
            error: uniform(rng) * 25.0 + 5.0,
        })
        .collect()
}

/// Noise-free weekly demand profile: daily cycle plus a slower weekly swing.
#[must_use]
pub fn weekly_demand_base(hour: u32) -> f64 {
    let h = f64::from(hour);
    40.0 + 20.0 * (h * PI / 12.0).sin() + 10.0 * (h * PI / 84.0).sin()
}

/// Half-width of the prediction interval around the base profile, in kWh.
pub const DEMAND_INTERVAL_HALF_WIDTH: f64 = 8.0;

pub fn demand_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<DemandHour> {
    (0..WEEK_HOURS)
        .map(|hour| {
            let base = weekly_demand_base(hour);
            DemandHour {
                hour,
                observed: base + (uniform(rng) - 0.5) * 5.0,
                predicted: base + (uniform(rng) - 0.5) * 4.0,
                lower: base - DEMAND_INTERVAL_HALF_WIDTH,
                upper: base + DEMAND_INTERVAL_HALF_WIDTH,
            }
        })
        .collect()
}

/// `(intercept, slope)` of the linear MAPE decay per transfer pair.
pub const INDIA_TO_BANGLADESH: (f64, f64) = (28.0, 0.7);
pub const PAKISTAN_TO_INDIA: (f64, f64) = (26.0, 0.6);
pub const BANGLADESH_TO_PAKISTAN: (f64, f64) = (30.0, 0.65);

pub fn transfer_curves<R: Rng + ?Sized>(rng: &mut R) -> Vec<TransferPoint> {
    let mut decay = |(intercept, slope): (f64, f64), step: f64| {
        intercept - step * slope + uniform(rng) * 2.0
    };
    (0..TRANSFER_STEP_COUNT)
        .map(|i| {
            let step = f64::from(i);
            TransferPoint {
                samples: i * TRANSFER_SAMPLE_STEP,
                india_to_bangladesh: decay(INDIA_TO_BANGLADESH, step),
                pakistan_to_india: decay(PAKISTAN_TO_INDIA, step),
                bangladesh_to_pakistan: decay(BANGLADESH_TO_PAKISTAN, step),
            }
        })
        .collect()
}
