//! Point data wrappers.
//!
//! A [`PointData`] associates a boundary condition with one of its support
//! points and exposes the derived dimensions the series assembler works
//! with: the per-slice component count fixed by the forcing type, and the
//! variable dimension of the forced quantity (sediment fraction count for
//! morphology bed-load transport). It also provides the slicing rule that
//! picks one (layer, variable component) slice out of the flat component
//! list.

use crate::condition::{BoundaryCondition, FlowQuantity};
use crate::forcing::{Component, ForcingFunction, ForcingType};

/// A boundary condition viewed at a single support point.
///
/// Wrappers are transient: they are created per edit session and hold no
/// state beyond the condition snapshot, the support point index, and
/// whether the data carries a vertical profile.
#[derive(Clone, Debug)]
pub struct PointData {
    condition: BoundaryCondition,
    support_point: usize,
    use_layers: bool,
}

impl PointData {
    /// Wrap a condition at a support point.
    pub fn new(condition: BoundaryCondition, support_point: usize, use_layers: bool) -> Self {
        Self {
            condition,
            support_point,
            use_layers,
        }
    }

    /// The wrapped condition.
    pub fn condition(&self) -> &BoundaryCondition {
        &self.condition
    }

    /// The support point index.
    pub fn support_point(&self) -> usize {
        self.support_point
    }

    /// Whether the data carries a vertical profile (layered components).
    pub fn use_layers(&self) -> bool {
        self.use_layers
    }

    /// The forcing definition at this support point, if any.
    pub fn function(&self) -> Option<&ForcingFunction> {
        self.condition.data_at_point(self.support_point)
    }

    /// Forcing type at this support point (`Empty` when no data is set).
    pub fn forcing_type(&self) -> ForcingType {
        self.condition.forcing_type_at(self.support_point)
    }

    /// Number of component columns in one slice of the forcing data.
    pub fn forcing_type_dimension(&self) -> usize {
        self.forcing_type().dimension()
    }

    /// Number of vector components of the forced quantity.
    ///
    /// For morphology bed-load transport this is the sediment fraction
    /// count: each fraction carries its own slice of component columns and
    /// is synthesized independently.
    pub fn variable_dimension(&self) -> usize {
        if self.condition.quantity == FlowQuantity::MorphologyBedLoadTransport {
            self.condition.sediment_fractions.len()
        } else {
            self.condition.variable_dimension()
        }
    }

    /// Whether this wrapper's data can participate in summation.
    pub fn is_summable(&self) -> bool {
        self.forcing_type().is_summable()
    }

    /// Number of vertical layers in the flat component list.
    ///
    /// One unless the wrapper carries a vertical profile, in which case the
    /// flat list holds `layers * variable_dimension * type_dimension`
    /// columns.
    pub fn layer_count(&self) -> usize {
        if !self.use_layers {
            return 1;
        }
        let per_layer = self.variable_dimension() * self.forcing_type_dimension();
        match self.function() {
            Some(f) if per_layer > 0 => f.data.components().len() / per_layer,
            _ => 1,
        }
    }

    /// Slice of component columns for one layer and variable component.
    ///
    /// The flat component list is ordered variable-component-major within a
    /// layer: the slice starts at
    /// `(variable_component + layer * variable_dimension) * type_dimension`
    /// and spans `type_dimension` columns.
    ///
    /// # Panics
    ///
    /// Panics when the wrapper has no forcing data or the requested slice
    /// lies outside the flat component list.
    pub fn layer_components(&self, layer: usize, variable_component: usize) -> &[Component] {
        let function = self
            .function()
            .expect("no forcing data at this support point");
        let dimension = self.forcing_type_dimension();
        let start = (variable_component + layer * self.variable_dimension()) * dimension;
        &function.data.components()[start..start + dimension]
    }
}
