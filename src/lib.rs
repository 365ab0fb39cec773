//! # forcing-rs
//!
//! Boundary-condition signal synthesis for hydrodynamic flow models.
//!
//! A boundary condition prescribes a forced quantity (water level,
//! velocity, salinity, sediment transport, ...) at support points along a
//! boundary feature, through one of several forcing forms: a plain time
//! series, harmonic components, astronomical constituents (with or
//! without correction columns), or a discharge-level rating curve. This
//! crate turns those definitions into combined, resampled time series for
//! charting and validation:
//!
//! - a shared sample grid is derived from the forcings' own time stamps
//!   or, for purely periodic data, from the fastest constituent present;
//! - each forcing's analytic waveform is evaluated onto that grid,
//!   ```text
//!   v(t) = offset + Σⱼ Aⱼ·factor·cos(π/180·(fⱼ·Δh − φⱼ))
//!   ```
//!   with per-row amplitude/phase corrections and name→frequency lookup
//!   for astronomical constituents;
//! - contributions from several conditions at the same point are summed
//!   component-wise into one output series.
//!
//! Everything is synchronous and pure: the host invokes a rebuild on any
//! input change and gets back plain data.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use forcing_rs::{
//!     AstroComponentTable, BoundaryCondition, Component, FlowQuantity, ForcingData,
//!     ForcingFunction, ModelTimes, PointData, SeriesFactory, SignalSeries,
//! };
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let stop = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
//!
//! let mut condition = BoundaryCondition::new("sea boundary", FlowQuantity::WaterLevel, 1);
//! condition.set_data_at_point(
//!     0,
//!     ForcingFunction::new(
//!         "water level",
//!         ForcingData::AstroComponents {
//!             constituents: vec!["M2".into(), "S2".into()],
//!             components: vec![
//!                 Component::new("amplitude", "m", vec![0.45, 0.15]),
//!                 Component::new("phase", "deg", vec![125.3, 158.7]),
//!             ],
//!         },
//!     ),
//! );
//!
//! let mut factory = SeriesFactory::new(
//!     ModelTimes::new(start, stop, start),
//!     AstroComponentTable::standard(),
//! );
//! factory.set_signal(Some(PointData::new(condition, 0, false)));
//!
//! let Some(SignalSeries::Sampled(series)) = factory.signal_series() else {
//!     unreachable!()
//! };
//! assert!(!series.times.is_empty());
//! ```

pub mod astro;
pub mod condition;
pub mod factory;
pub mod forcing;
pub mod io;
pub mod point_data;
pub mod synthesis;

// Re-export main types for convenience
pub use astro::AstroComponentTable;
pub use condition::{BoundaryCondition, FlowQuantity};
pub use factory::{ModelTimes, SeriesFactory, SignalSeries};
pub use forcing::{Component, ForcingData, ForcingFunction, ForcingType};
pub use io::{parse_components, read_component_file, AstroFileError};
pub use point_data::PointData;
pub use synthesis::{
    accumulate, compute_sample_times, create_time_series, maximal_frequency, SampledSeries,
    SeriesComponent,
};
