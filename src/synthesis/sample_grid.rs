//! Sample-grid construction.
//!
//! All signals evaluated in one synthesis pass share a single grid of
//! timestamps. Time-indexed forcings contribute their native timestamps;
//! frequency-indexed forcings (harmonic/astronomical) drive an evenly
//! spaced grid dense enough to resolve the fastest constituent present.

use std::collections::BTreeSet;
use std::f64::consts::PI;

use chrono::{DateTime, Duration, Utc};

use crate::astro::AstroComponentTable;
use crate::forcing::ForcingData;

/// Fewest evenly spaced samples emitted for frequency-indexed forcings.
const MIN_SAMPLES: i64 = 500;
/// Most evenly spaced samples emitted for frequency-indexed forcings.
const MAX_SAMPLES: i64 = 10_000;

/// Oversampling relative to the highest angular frequency present.
const SAMPLES_PER_RADIAN: f64 = 4.0;

/// Build the shared sample grid for a set of forcing definitions.
///
/// Rules, applied per definition and merged into one ordered,
/// deduplicated sequence:
///
/// - Time-valued arguments contribute their native timestamps inside
///   `[start, stop]`. When fewer than two grid points have landed inside
///   the window and the source holds more than two points in total, the
///   nearest point just outside the window on each side is added as well,
///   so interpolation at the window edges stays well-defined.
/// - When no time-valued argument exists but frequency-indexed data is
///   present, the highest angular frequency determines an evenly spaced
///   grid of `clamp(4 · f_max · window_hours, 500, 10000)` timestamps
///   starting at `start`.
/// - When neither applies, the grid is exactly `{start, stop}`.
///
/// The result is strictly increasing with no duplicate instants.
pub fn compute_sample_times<'a>(
    arguments: impl IntoIterator<Item = &'a ForcingData>,
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
    astro: &AstroComponentTable,
) -> Vec<DateTime<Utc>> {
    let mut grid = BTreeSet::new();
    let mut sample_frequency: f64 = 0.0;

    for data in arguments {
        if let ForcingData::TimeSeries { times, .. } = data {
            for &time in times.iter().filter(|&&t| t >= start && t <= stop) {
                grid.insert(time);
            }

            // Boundary padding: with too little of the series inside the
            // window, pull in the nearest outside points so the window
            // edges are covered.
            if grid.len() < 2 && times.len() > 2 {
                if let Some(&before) = times.iter().filter(|&&t| t < start).next_back() {
                    grid.insert(before);
                }
                if let Some(&after) = times.iter().find(|&&t| t > stop) {
                    grid.insert(after);
                }
            }
        } else {
            sample_frequency = sample_frequency.max(maximal_frequency(data, astro));
        }
    }

    if sample_frequency > 0.0 {
        let window = stop.signed_duration_since(start);
        let window_hours = window.num_milliseconds() as f64 / 3_600_000.0;
        let samples = ((SAMPLES_PER_RADIAN * sample_frequency * window_hours) as i64)
            .clamp(MIN_SAMPLES, MAX_SAMPLES);
        let step_us = window.num_microseconds().unwrap_or(i64::MAX) / samples;
        for i in 0..samples {
            grid.insert(start + Duration::microseconds(i * step_us));
        }
    } else if grid.is_empty() {
        grid.insert(start);
        grid.insert(stop);
    }

    grid.into_iter().collect()
}

/// Highest angular frequency of a forcing definition, in radians per hour.
///
/// Harmonic frequencies are read directly; astronomical constituent names
/// are resolved through the component table, with unknown names counting
/// as zero. Time-indexed and non-periodic definitions have no frequency.
pub fn maximal_frequency(data: &ForcingData, astro: &AstroComponentTable) -> f64 {
    let max_deg_per_hour = match data {
        ForcingData::Harmonics { frequencies, .. }
        | ForcingData::HarmonicCorrection { frequencies, .. } => {
            frequencies.iter().copied().fold(0.0, f64::max)
        }
        ForcingData::AstroComponents { constituents, .. }
        | ForcingData::AstroCorrection { constituents, .. } => constituents
            .iter()
            .map(|name| astro.frequency(name).unwrap_or(0.0))
            .fold(0.0, f64::max),
        _ => 0.0,
    };
    2.0 * PI * max_deg_per_hour / 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forcing::Component;
    use chrono::TimeZone;

    const TOL: f64 = 1e-10;

    fn t(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn time_series(times: Vec<DateTime<Utc>>) -> ForcingData {
        let n = times.len();
        ForcingData::TimeSeries {
            times,
            components: vec![Component::new("value", "m", vec![0.0; n])],
        }
    }

    fn harmonics(frequencies: Vec<f64>) -> ForcingData {
        let n = frequencies.len();
        ForcingData::Harmonics {
            frequencies,
            components: vec![
                Component::new("amplitude", "m", vec![1.0; n]),
                Component::new("phase", "deg", vec![0.0; n]),
            ],
        }
    }

    fn assert_strictly_increasing(grid: &[DateTime<Utc>]) {
        for pair in grid.windows(2) {
            assert!(pair[0] < pair[1], "grid not strictly increasing");
        }
    }

    #[test]
    fn test_time_series_native_points() {
        let data = time_series(vec![t(1, 0), t(1, 6), t(1, 12)]);
        let grid = compute_sample_times([&data], t(1, 0), t(1, 12), &AstroComponentTable::new());

        assert_eq!(grid, vec![t(1, 0), t(1, 6), t(1, 12)]);
    }

    #[test]
    fn test_time_series_window_clipping() {
        let data = time_series(vec![t(1, 0), t(1, 6), t(1, 12), t(1, 18), t(2, 0)]);
        let grid = compute_sample_times([&data], t(1, 3), t(1, 15), &AstroComponentTable::new());

        assert_eq!(grid, vec![t(1, 6), t(1, 12)]);
    }

    #[test]
    fn test_time_series_boundary_padding() {
        // Only one native point inside the window; the nearest points just
        // outside get pulled in on each side.
        let data = time_series(vec![t(1, 0), t(1, 4), t(1, 8), t(1, 12), t(1, 16)]);
        let grid = compute_sample_times([&data], t(1, 7), t(1, 9), &AstroComponentTable::new());

        assert_eq!(grid, vec![t(1, 4), t(1, 8), t(1, 12)]);
        assert_strictly_increasing(&grid);
    }

    #[test]
    fn test_time_series_duplicates_merged() {
        let a = time_series(vec![t(1, 0), t(1, 6), t(1, 12)]);
        let b = time_series(vec![t(1, 6), t(1, 9), t(1, 12)]);
        let grid = compute_sample_times([&a, &b], t(1, 0), t(1, 12), &AstroComponentTable::new());

        assert_eq!(grid, vec![t(1, 0), t(1, 6), t(1, 9), t(1, 12)]);
        assert_strictly_increasing(&grid);
    }

    #[test]
    fn test_harmonics_sample_count_clamped_low() {
        // One slow constituent over a short window: the lower clamp wins.
        let data = harmonics(vec![1.0]);
        let grid = compute_sample_times([&data], t(1, 0), t(2, 0), &AstroComponentTable::new());

        assert_eq!(grid.len(), MIN_SAMPLES as usize);
        assert_strictly_increasing(&grid);
        assert_eq!(grid[0], t(1, 0));
    }

    #[test]
    fn test_harmonics_sample_count_clamped_high() {
        // Fast constituent over a month: the upper clamp wins.
        let data = harmonics(vec![360.0]);
        let grid = compute_sample_times([&data], t(1, 0), t(31, 0), &AstroComponentTable::new());

        assert_eq!(grid.len(), MAX_SAMPLES as usize);
        assert_strictly_increasing(&grid);
    }

    #[test]
    fn test_harmonics_sample_count_in_between() {
        // f = 30 deg/h -> pi/6 rad/h; 4 * pi/6 * 4800 h ~ 10053 > clamp?
        // Use 240 h window: 4 * pi/6 * 240 = 502.6 -> 502 samples.
        let data = harmonics(vec![30.0]);
        let grid = compute_sample_times([&data], t(1, 0), t(11, 0), &AstroComponentTable::new());

        assert_eq!(grid.len(), 502);
    }

    #[test]
    fn test_empty_inputs_yield_window_endpoints() {
        let grid = compute_sample_times(
            std::iter::empty::<&ForcingData>(),
            t(1, 0),
            t(2, 0),
            &AstroComponentTable::new(),
        );
        assert_eq!(grid, vec![t(1, 0), t(2, 0)]);
    }

    #[test]
    fn test_maximal_frequency_harmonics() {
        let data = harmonics(vec![30.0, 15.0]);
        let f = maximal_frequency(&data, &AstroComponentTable::new());
        assert!((f - 2.0 * PI * 30.0 / 360.0).abs() < TOL);
    }

    #[test]
    fn test_maximal_frequency_astro() {
        let data = ForcingData::AstroComponents {
            constituents: vec!["M2".into(), "K1".into()],
            components: vec![
                Component::new("amplitude", "m", vec![1.0, 0.5]),
                Component::new("phase", "deg", vec![0.0, 0.0]),
            ],
        };
        let table = AstroComponentTable::standard();
        let f = maximal_frequency(&data, &table);
        assert!((f - 2.0 * PI * 28.9841042 / 360.0).abs() < TOL);
    }

    #[test]
    fn test_maximal_frequency_unknown_astro_is_zero() {
        let data = ForcingData::AstroComponents {
            constituents: vec!["NOPE".into()],
            components: vec![
                Component::new("amplitude", "m", vec![1.0]),
                Component::new("phase", "deg", vec![0.0]),
            ],
        };
        let f = maximal_frequency(&data, &AstroComponentTable::standard());
        assert!(f.abs() < TOL);
    }

    #[test]
    fn test_maximal_frequency_time_series_is_zero() {
        let data = time_series(vec![t(1, 0)]);
        assert!(maximal_frequency(&data, &AstroComponentTable::new()).abs() < TOL);
    }
}
