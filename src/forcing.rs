//! Forcing definitions for boundary conditions.
//!
//! A boundary condition expresses its time dependence through one of a
//! closed set of functional forms: a plain time series, a discharge-level
//! (QH) rating curve, harmonic components given by frequency, or
//! astronomical components given by constituent name. The correction
//! variants carry two extra columns that scale the amplitude and shift the
//! phase of each row.
//!
//! The data is kept column-oriented: one argument column (times,
//! frequencies, discharges, or constituent names) plus a flat list of
//! numeric component columns. How many columns belong to one "slice" of
//! the definition is fixed per forcing type (see
//! [`ForcingData::type_dimension`]); vector quantities and vertical layers
//! multiply the number of slices stored in the flat list.

use chrono::{DateTime, Utc};

/// The functional form of a forcing definition.
///
/// Discriminant mirror of [`ForcingData`], used where only the kind
/// matters (dimension tables, dispatch filters, error messages).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForcingType {
    Empty,
    Constant,
    TimeSeries,
    Qh,
    Harmonics,
    HarmonicCorrection,
    AstroComponents,
    AstroCorrection,
}

impl ForcingType {
    /// Number of component columns one slice of this forcing type carries.
    ///
    /// Time series and QH relations have a single value column; harmonic
    /// and astronomical components carry amplitude and phase; the
    /// correction variants add an amplitude-correction and a
    /// phase-correction column.
    pub fn dimension(&self) -> usize {
        match self {
            ForcingType::Empty | ForcingType::Constant => 0,
            ForcingType::TimeSeries | ForcingType::Qh => 1,
            ForcingType::Harmonics | ForcingType::AstroComponents => 2,
            ForcingType::HarmonicCorrection | ForcingType::AstroCorrection => 4,
        }
    }

    /// Whether contributions of this type can be accumulated onto a shared
    /// sample grid.
    ///
    /// QH relations are lookup curves rather than time functions, and
    /// empty/constant definitions have nothing to sample; neither
    /// participates in summation.
    pub fn is_summable(&self) -> bool {
        matches!(
            self,
            ForcingType::TimeSeries
                | ForcingType::Harmonics
                | ForcingType::HarmonicCorrection
                | ForcingType::AstroComponents
                | ForcingType::AstroCorrection
        )
    }
}

/// A single named numeric column of a forcing definition.
#[derive(Clone, Debug)]
pub struct Component {
    /// Column name (e.g. "water level amplitude")
    pub name: String,
    /// Unit string (e.g. "m")
    pub unit: String,
    /// Column values, positionally aligned with the argument column
    pub values: Vec<f64>,
}

impl Component {
    /// Create a new component column.
    pub fn new(name: impl Into<String>, unit: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            values,
        }
    }
}

/// Forcing data: argument column plus component columns, tagged by form.
///
/// The enum is closed, so an unhandled forcing type is a compile error
/// rather than a runtime surprise.
#[derive(Clone, Debug)]
pub enum ForcingData {
    /// No data defined at this point.
    Empty,
    /// A single constant value (no time dependence, not summable).
    Constant(f64),
    /// Values at discrete timestamps, linearly interpolated in between.
    TimeSeries {
        times: Vec<DateTime<Utc>>,
        components: Vec<Component>,
    },
    /// Discharge-level rating curve (argument is discharge, not time).
    Qh {
        discharges: Vec<f64>,
        components: Vec<Component>,
    },
    /// Harmonic components: per row a frequency in degrees/hour, with
    /// amplitude and phase columns.
    Harmonics {
        frequencies: Vec<f64>,
        components: Vec<Component>,
    },
    /// Harmonics with amplitude- and phase-correction columns.
    HarmonicCorrection {
        frequencies: Vec<f64>,
        components: Vec<Component>,
    },
    /// Astronomical components: per row a constituent name, with amplitude
    /// and phase columns. Frequencies are resolved through an
    /// [`AstroComponentTable`](crate::astro::AstroComponentTable).
    AstroComponents {
        constituents: Vec<String>,
        components: Vec<Component>,
    },
    /// Astronomical components with correction columns.
    AstroCorrection {
        constituents: Vec<String>,
        components: Vec<Component>,
    },
}

impl ForcingData {
    /// The forcing type tag of this data.
    pub fn forcing_type(&self) -> ForcingType {
        match self {
            ForcingData::Empty => ForcingType::Empty,
            ForcingData::Constant(_) => ForcingType::Constant,
            ForcingData::TimeSeries { .. } => ForcingType::TimeSeries,
            ForcingData::Qh { .. } => ForcingType::Qh,
            ForcingData::Harmonics { .. } => ForcingType::Harmonics,
            ForcingData::HarmonicCorrection { .. } => ForcingType::HarmonicCorrection,
            ForcingData::AstroComponents { .. } => ForcingType::AstroComponents,
            ForcingData::AstroCorrection { .. } => ForcingType::AstroCorrection,
        }
    }

    /// Number of component columns in one slice of this definition.
    pub fn type_dimension(&self) -> usize {
        self.forcing_type().dimension()
    }

    /// Whether this data can be accumulated onto a shared sample grid.
    pub fn is_summable(&self) -> bool {
        self.forcing_type().is_summable()
    }

    /// The flat list of component columns (empty for `Empty`/`Constant`).
    pub fn components(&self) -> &[Component] {
        match self {
            ForcingData::Empty | ForcingData::Constant(_) => &[],
            ForcingData::TimeSeries { components, .. }
            | ForcingData::Qh { components, .. }
            | ForcingData::Harmonics { components, .. }
            | ForcingData::HarmonicCorrection { components, .. }
            | ForcingData::AstroComponents { components, .. }
            | ForcingData::AstroCorrection { components, .. } => components,
        }
    }

    /// Number of rows in the argument column.
    pub fn argument_len(&self) -> usize {
        match self {
            ForcingData::Empty | ForcingData::Constant(_) => 0,
            ForcingData::TimeSeries { times, .. } => times.len(),
            ForcingData::Qh { discharges, .. } => discharges.len(),
            ForcingData::Harmonics { frequencies, .. }
            | ForcingData::HarmonicCorrection { frequencies, .. } => frequencies.len(),
            ForcingData::AstroComponents { constituents, .. }
            | ForcingData::AstroCorrection { constituents, .. } => constituents.len(),
        }
    }

    /// Check that every component column is positionally aligned with the
    /// argument column.
    ///
    /// # Panics
    ///
    /// Panics when a component column's row count differs from the
    /// argument row count, or when the flat component count is not a
    /// multiple of the per-slice dimension.
    pub fn validate(&self) {
        let rows = self.argument_len();
        for component in self.components() {
            assert_eq!(
                component.values.len(),
                rows,
                "component '{}' has {} rows, argument has {}",
                component.name,
                component.values.len(),
                rows
            );
        }
        let dim = self.type_dimension();
        if dim > 0 {
            assert!(
                self.components().len() % dim == 0,
                "component count {} is not a multiple of the slice dimension {}",
                self.components().len(),
                dim
            );
        }
    }
}

/// A named forcing definition, as attached to one support point.
#[derive(Clone, Debug)]
pub struct ForcingFunction {
    /// Name of the forced quantity (e.g. "water level")
    pub name: String,
    /// The forcing data
    pub data: ForcingData,
}

impl ForcingFunction {
    /// Create a new forcing function.
    ///
    /// # Panics
    ///
    /// Panics when the component columns are not aligned with the argument
    /// column (see [`ForcingData::validate`]).
    pub fn new(name: impl Into<String>, data: ForcingData) -> Self {
        data.validate();
        Self {
            name: name.into(),
            data,
        }
    }

    /// Unit of the first component column, if any.
    ///
    /// Convention: the amplitude (or value) column comes first, so this is
    /// the unit of the synthesized signal.
    pub fn primary_unit(&self) -> Option<&str> {
        self.data.components().first().map(|c| c.unit.as_str())
    }
}
