//! Signal synthesis: sample grids, waveform evaluation, series assembly.
//!
//! Given one or more point data wrappers, synthesis produces a combined,
//! resampled time series in three steps:
//!
//! 1. A shared sample grid is built from the wrappers' argument columns
//!    ([`compute_sample_times`]): native timestamps for time series,
//!    frequency-driven even sampling for harmonic/astronomical data.
//! 2. Each wrapper's analytic waveform is evaluated onto that grid and
//!    accumulated ([`accumulate`]):
//!    ```text
//!    v(t) = offset + Σⱼ Aⱼ·factor·cos(π/180·(fⱼ·Δh − φⱼ))
//!    ```
//!    with Δh the hours since the model reference time, or for time
//!    series a linear interpolation scaled by the factor/offset pair.
//! 3. The assembler ([`create_time_series`]) lays the accumulated values
//!    out as named output components, one per variable dimension (and per
//!    vertical layer or sediment fraction where applicable).
//!
//! Every recompute is a full rebuild from current inputs; there is no
//! incremental path.

mod assembler;
mod sample_grid;
mod waveform;

pub use assembler::{create_time_series, SampledSeries, SeriesComponent};
pub use sample_grid::{compute_sample_times, maximal_frequency};
pub use waveform::accumulate;

use chrono::{DateTime, Utc};

/// Hours elapsed from `reference` to `t` (negative before the reference).
pub(crate) fn hours_since(reference: DateTime<Utc>, t: DateTime<Utc>) -> f64 {
    t.signed_duration_since(reference).num_milliseconds() as f64 / 3_600_000.0
}

/// Linear interpolation of `values` over `times` at instant `t`.
///
/// Exact at native timestamps. `times` must be strictly increasing and
/// `t` must lie within `[times[0], times[last]]`.
pub(crate) fn interpolate(times: &[DateTime<Utc>], values: &[f64], t: DateTime<Utc>) -> f64 {
    debug_assert_eq!(times.len(), values.len());
    let upper = times.partition_point(|&x| x < t);
    if upper == 0 {
        return values[0];
    }
    if times[upper] == t {
        return values[upper];
    }
    let t0 = times[upper - 1];
    let t1 = times[upper];
    let span = t1.signed_duration_since(t0).num_milliseconds() as f64;
    let alpha = t.signed_duration_since(t0).num_milliseconds() as f64 / span;
    values[upper - 1] + alpha * (values[upper] - values[upper - 1])
}
