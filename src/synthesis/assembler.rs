//! Series assembly: from point data wrappers to one combined function.

use chrono::{DateTime, Utc};

use crate::astro::AstroComponentTable;
use crate::condition::FlowQuantity;
use crate::point_data::PointData;
use crate::synthesis::{accumulate, compute_sample_times};

/// One component column of a synthesized series.
#[derive(Clone, Debug)]
pub struct SeriesComponent {
    /// Component name (source name, with a layer suffix or fraction name
    /// where applicable)
    pub name: String,
    /// Unit, taken from the source's first component column
    pub unit: String,
    /// One value per sample timestamp
    pub values: Vec<f64>,
    /// Missing-value marker, always NaN
    pub missing_value: f64,
}

/// A synthesized, resampled series: shared time axis plus one or more
/// value components.
///
/// The time axis unit is hours (relative display is up to the host).
#[derive(Clone, Debug)]
pub struct SampledSeries {
    /// Series name; prefixed with "Total " in summation mode
    pub name: String,
    /// The shared sample grid, strictly increasing
    pub times: Vec<DateTime<Utc>>,
    /// Value components, one per variable dimension / layer / fraction
    pub components: Vec<SeriesComponent>,
}

impl SampledSeries {
    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&SeriesComponent> {
        self.components.iter().find(|c| c.name == name)
    }
}

/// Synthesize one combined series from a list of point data wrappers.
///
/// Returns `None` when the list holds no summable wrapper. The shared
/// sample grid spans `[start, stop]` and is built from every wrapper's
/// argument column; `reference` phase-aligns the harmonic terms.
///
/// Output layout:
/// - a single wrapper yields one component per variable dimension and
///   vertical layer, sliced out of the wrapper's flat component list and
///   suffixed `(layer#)` when more than one layer exists;
/// - multiple wrappers are summed: one component per variable dimension,
///   accumulating every summable wrapper's zeroth-layer slice
///   (non-summable wrappers are skipped);
/// - morphology bed-load transport sums per sediment fraction, one
///   component per fraction named after it, regardless of wrapper count.
///
/// The unit of every output component is the first summable wrapper's
/// first component unit; summed inputs are assumed, not checked, to share
/// it. Every output component's missing-value marker is NaN.
pub fn create_time_series(
    point_data: &[PointData],
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
    reference: DateTime<Utc>,
    astro: &AstroComponentTable,
) -> Option<SampledSeries> {
    let first = point_data.iter().find(|p| p.is_summable())?;
    let function = first.function()?;
    let name = function.name.clone();
    let unit = function.primary_unit().unwrap_or_default().to_string();

    let times = compute_sample_times(
        point_data.iter().filter_map(|p| p.function().map(|f| &f.data)),
        start,
        stop,
        astro,
    );

    let mut series = SampledSeries {
        name: if point_data.len() == 1 {
            name.clone()
        } else {
            format!("Total {name}")
        },
        times,
        components: Vec::new(),
    };

    let morphology = first.condition().quantity == FlowQuantity::MorphologyBedLoadTransport;

    if morphology || point_data.len() > 1 {
        // Summation mode: one output component per variable dimension,
        // zeroth layer only.
        for i in 0..first.variable_dimension() {
            let mut values = vec![0.0; series.times.len()];
            for wrapper in point_data.iter().filter(|p| p.is_summable()) {
                let Some(f) = wrapper.function() else { continue };
                accumulate(
                    &f.data,
                    wrapper.layer_components(0, i),
                    &series.times,
                    reference,
                    wrapper.condition().factor,
                    wrapper.condition().offset,
                    astro,
                    &mut values,
                );
            }
            let component_name = if morphology {
                first.condition().sediment_fractions[i].clone()
            } else {
                name.clone()
            };
            series.components.push(SeriesComponent {
                name: component_name,
                unit: unit.clone(),
                values,
                missing_value: f64::NAN,
            });
        }
    } else {
        let layers = first.layer_count();
        for i in 0..first.variable_dimension() {
            for layer in 0..layers {
                let mut values = vec![0.0; series.times.len()];
                accumulate(
                    &function.data,
                    first.layer_components(layer, i),
                    &series.times,
                    reference,
                    first.condition().factor,
                    first.condition().offset,
                    astro,
                    &mut values,
                );
                let component_name = if layers == 1 {
                    name.clone()
                } else {
                    format!("{name}({})", layer + 1)
                };
                series.components.push(SeriesComponent {
                    name: component_name,
                    unit: unit.clone(),
                    values,
                    missing_value: f64::NAN,
                });
            }
        }
    }

    Some(series)
}
