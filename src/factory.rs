//! Recompute orchestration for interactively edited boundary conditions.
//!
//! The host edits one condition (the *signal*) while any number of other
//! conditions are overlaid for comparison (the *backgrounds*). The
//! [`SeriesFactory`] caches one synthesized series per input and rebuilds
//! them wholesale whenever an input changes: background add / remove /
//! replace / clear, signal reassignment, or a model time change. Every
//! rebuild is a full pass over current inputs; with the small,
//! interactively edited tables involved there is nothing to gain from an
//! incremental path.

use chrono::{DateTime, Utc};

use crate::astro::AstroComponentTable;
use crate::forcing::ForcingData;
use crate::point_data::PointData;
use crate::synthesis::{create_time_series, SampledSeries, SeriesComponent};

/// Model time context: the sample window and the harmonic phase origin.
#[derive(Clone, Copy, Debug)]
pub struct ModelTimes {
    /// Start of the sample window
    pub start: DateTime<Utc>,
    /// End of the sample window
    pub stop: DateTime<Utc>,
    /// Reference time the harmonic phases are defined against
    pub reference: DateTime<Utc>,
}

impl ModelTimes {
    /// Create a model time context.
    pub fn new(start: DateTime<Utc>, stop: DateTime<Utc>, reference: DateTime<Utc>) -> Self {
        Self {
            start,
            stop,
            reference,
        }
    }
}

/// The synthesized signal: resampled for time-dependent forcings, passed
/// through untouched for QH relations (whose argument is discharge, not
/// time).
#[derive(Clone, Debug)]
pub enum SignalSeries {
    /// A resampled time series.
    Sampled(SampledSeries),
    /// A discharge-level rating curve, exposed as-is.
    Rating {
        /// Name of the source function
        name: String,
        /// Discharge argument values
        discharges: Vec<f64>,
        /// Water levels per discharge
        levels: SeriesComponent,
    },
}

/// Holds the signal and background conditions and keeps their synthesized
/// series current.
#[derive(Clone, Debug)]
pub struct SeriesFactory {
    times: ModelTimes,
    astro: AstroComponentTable,
    signal: Option<PointData>,
    backgrounds: Vec<PointData>,
    signal_series: Option<SignalSeries>,
    background_series: Vec<Option<SampledSeries>>,
}

impl SeriesFactory {
    /// Create a factory with no signal and no backgrounds.
    pub fn new(times: ModelTimes, astro: AstroComponentTable) -> Self {
        Self {
            times,
            astro,
            signal: None,
            backgrounds: Vec::new(),
            signal_series: None,
            background_series: Vec::new(),
        }
    }

    /// The current model time context.
    pub fn model_times(&self) -> ModelTimes {
        self.times
    }

    /// Replace the model time context and rebuild everything.
    pub fn set_model_times(&mut self, times: ModelTimes) {
        self.times = times;
        self.rebuild_all();
    }

    /// Replace the astronomical component table and rebuild everything.
    pub fn set_astro_components(&mut self, astro: AstroComponentTable) {
        self.astro = astro;
        self.rebuild_all();
    }

    /// Assign (or clear) the signal condition and rebuild everything.
    ///
    /// Backgrounds are rebuilt too: a time-series signal narrows the
    /// sample window to its native time span.
    pub fn set_signal(&mut self, signal: Option<PointData>) {
        self.signal = signal;
        self.rebuild_all();
    }

    /// Append a background condition.
    pub fn add_background(&mut self, wrapper: PointData) {
        let series = self.synthesize_one(&wrapper);
        self.backgrounds.push(wrapper);
        self.background_series.push(series);
    }

    /// Remove the background at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn remove_background(&mut self, index: usize) {
        self.backgrounds.remove(index);
        self.background_series.remove(index);
    }

    /// Replace the background at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn replace_background(&mut self, index: usize, wrapper: PointData) {
        self.background_series[index] = self.synthesize_one(&wrapper);
        self.backgrounds[index] = wrapper;
    }

    /// Remove all backgrounds.
    pub fn clear_backgrounds(&mut self) {
        self.backgrounds.clear();
        self.background_series.clear();
    }

    /// The synthesized signal series, if a signal with data is assigned.
    pub fn signal_series(&self) -> Option<&SignalSeries> {
        self.signal_series.as_ref()
    }

    /// The synthesized background series, index-aligned with the
    /// backgrounds; `None` entries correspond to non-summable backgrounds.
    pub fn background_series(&self) -> &[Option<SampledSeries>] {
        &self.background_series
    }

    /// Number of backgrounds currently held.
    pub fn background_count(&self) -> usize {
        self.backgrounds.len()
    }

    /// Sum all summable backgrounds into one combined series.
    pub fn combined_background_series(&self) -> Option<SampledSeries> {
        let (start, stop) = self.window();
        create_time_series(
            &self.backgrounds,
            start,
            stop,
            self.times.reference,
            &self.astro,
        )
    }

    /// The effective sample window.
    ///
    /// A time-series signal narrows the window to its own native time
    /// span; otherwise the model start/stop apply.
    fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        if let Some(signal) = &self.signal {
            if let Some(function) = signal.function() {
                if let ForcingData::TimeSeries { times, .. } = &function.data {
                    if let (Some(&first), Some(&last)) = (times.first(), times.last()) {
                        return (first, last);
                    }
                }
            }
        }
        (self.times.start, self.times.stop)
    }

    fn rebuild_all(&mut self) {
        self.signal_series = self.signal.as_ref().and_then(|s| self.synthesize_signal(s));
        self.background_series = self
            .backgrounds
            .iter()
            .map(|w| self.synthesize_one(w))
            .collect();
    }

    fn synthesize_signal(&self, signal: &PointData) -> Option<SignalSeries> {
        let function = signal.function()?;
        if let ForcingData::Qh {
            discharges,
            components,
        } = &function.data
        {
            let levels = components.first()?;
            return Some(SignalSeries::Rating {
                name: function.name.clone(),
                discharges: discharges.clone(),
                levels: SeriesComponent {
                    name: levels.name.clone(),
                    unit: levels.unit.clone(),
                    values: levels.values.clone(),
                    missing_value: f64::NAN,
                },
            });
        }
        self.synthesize_one(signal).map(SignalSeries::Sampled)
    }

    fn synthesize_one(&self, wrapper: &PointData) -> Option<SampledSeries> {
        let (start, stop) = self.window();
        create_time_series(
            std::slice::from_ref(wrapper),
            start,
            stop,
            self.times.reference,
            &self.astro,
        )
    }
}
