//! Waveform evaluation onto a sample grid.
//!
//! Each summable forcing type has an analytic formula that is evaluated
//! per sample timestamp and **accumulated** into a caller-provided buffer,
//! so repeated calls sum contributions from multiple forcings on the same
//! grid.

use chrono::{DateTime, Utc};

use crate::astro::AstroComponentTable;
use crate::forcing::{Component, ForcingData};
use crate::synthesis::{hours_since, interpolate};

/// Degrees-to-radians prefactor for the cosine terms.
const PREFACTOR: f64 = std::f64::consts::PI / 180.0;

/// Accumulate one forcing contribution into `out`, sample by sample.
///
/// `components` is the slice of columns for the evaluated layer and
/// variable component (see
/// [`PointData::layer_components`](crate::point_data::PointData::layer_components));
/// its column count must match the forcing type: one value column for
/// time series, amplitude and phase for harmonic/astronomical data, plus
/// amplitude- and phase-correction columns for the correction variants.
///
/// Per type:
/// - **Time series**: inside the native time range each sample gains
///   `factor · v(t) + offset` with `v` linearly interpolated; samples
///   outside the range gain nothing (an out-of-range instant means the
///   condition is inactive, not that it extrapolates).
/// - **Harmonics**: each sample gains
///   `offset + Σⱼ Aⱼ·factor·cos(π/180·(fⱼ·Δh − φⱼ mod 360))` with Δh the
///   hours since `reference`; rows with zero frequency contribute their
///   amplitude as a constant, ignoring the phase.
/// - **Harmonic correction**: as harmonics, with the effective amplitude
///   `Aⱼ·A'ⱼ` and effective phase `(φⱼ + φ'ⱼ) mod 360`.
/// - **Astronomical (with/without correction)**: as the harmonic
///   counterparts, with the frequency resolved per row from the
///   constituent name; rows whose name is absent from `astro` are skipped
///   silently.
///
/// # Panics
///
/// Panics when called with a non-summable forcing type (`Empty`,
/// `Constant`, `Qh`): callers are expected to have filtered to summable
/// wrappers, so reaching this is a programming error. Also panics when
/// `components` is shorter than the forcing type requires or `out` is
/// shorter than `times`.
#[allow(clippy::too_many_arguments)]
pub fn accumulate(
    data: &ForcingData,
    components: &[Component],
    times: &[DateTime<Utc>],
    reference: DateTime<Utc>,
    factor: f64,
    offset: f64,
    astro: &AstroComponentTable,
    out: &mut [f64],
) {
    assert!(out.len() >= times.len(), "output buffer shorter than grid");

    match data {
        ForcingData::TimeSeries { times: native, .. } => {
            let (Some(&first), Some(&last)) = (native.first(), native.last()) else {
                return;
            };
            let values = &components[0].values;
            for (i, &time) in times.iter().enumerate() {
                if time >= first && time <= last {
                    out[i] += factor * interpolate(native, values, time) + offset;
                }
            }
        }

        ForcingData::Harmonics { frequencies, .. } => {
            let amplitudes = &components[0].values;
            let phases = &components[1].values;
            for (i, &time) in times.iter().enumerate() {
                let delta_hours = hours_since(reference, time);
                let mut value = offset;
                for (j, &frequency) in frequencies.iter().enumerate() {
                    let amplitude = amplitudes[j] * factor;
                    let phase = phases[j] % 360.0;
                    value += harmonic_term(amplitude, frequency, phase, delta_hours);
                }
                out[i] += value;
            }
        }

        ForcingData::HarmonicCorrection { frequencies, .. } => {
            let amplitudes = &components[0].values;
            let phases = &components[1].values;
            let amplitude_corrections = &components[2].values;
            let phase_corrections = &components[3].values;
            for (i, &time) in times.iter().enumerate() {
                let delta_hours = hours_since(reference, time);
                let mut value = offset;
                for (j, &frequency) in frequencies.iter().enumerate() {
                    let amplitude = amplitudes[j] * amplitude_corrections[j] * factor;
                    let phase = (phases[j] + phase_corrections[j]) % 360.0;
                    value += harmonic_term(amplitude, frequency, phase, delta_hours);
                }
                out[i] += value;
            }
        }

        ForcingData::AstroComponents { constituents, .. } => {
            let amplitudes = &components[0].values;
            let phases = &components[1].values;
            for (i, &time) in times.iter().enumerate() {
                let delta_hours = hours_since(reference, time);
                let mut value = offset;
                for (j, name) in constituents.iter().enumerate() {
                    // Unknown constituents are skipped, not an error.
                    let Some(frequency) = astro.frequency(name) else {
                        continue;
                    };
                    let amplitude = amplitudes[j] * factor;
                    let phase = phases[j] % 360.0;
                    value += harmonic_term(amplitude, frequency, phase, delta_hours);
                }
                out[i] += value;
            }
        }

        ForcingData::AstroCorrection { constituents, .. } => {
            let amplitudes = &components[0].values;
            let phases = &components[1].values;
            let amplitude_corrections = &components[2].values;
            let phase_corrections = &components[3].values;
            for (i, &time) in times.iter().enumerate() {
                let delta_hours = hours_since(reference, time);
                let mut value = offset;
                for (j, name) in constituents.iter().enumerate() {
                    let Some(frequency) = astro.frequency(name) else {
                        continue;
                    };
                    let amplitude = amplitudes[j] * amplitude_corrections[j] * factor;
                    let phase = (phases[j] + phase_corrections[j]) % 360.0;
                    value += harmonic_term(amplitude, frequency, phase, delta_hours);
                }
                out[i] += value;
            }
        }

        ForcingData::Empty | ForcingData::Constant(_) | ForcingData::Qh { .. } => {
            panic!(
                "forcing type {:?} cannot be accumulated onto a sample grid",
                data.forcing_type()
            );
        }
    }
}

/// One cosine term: `A·cos(π/180·(f·Δh − φ))`.
///
/// A zero-frequency row is a constant contribution of the amplitude
/// alone; its phase is meaningless and ignored.
fn harmonic_term(amplitude: f64, frequency: f64, phase: f64, delta_hours: f64) -> f64 {
    if frequency != 0.0 {
        amplitude * (PREFACTOR * (frequency * delta_hours - phase)).cos()
    } else {
        amplitude
    }
}
