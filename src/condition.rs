//! Boundary-condition objects.
//!
//! A boundary condition ties a forced flow quantity to a boundary feature:
//! it names the quantity, carries a scalar factor/offset pair applied to
//! every synthesized sample, and holds one forcing definition per support
//! point along the feature.

use crate::forcing::{ForcingFunction, ForcingType};

/// The flow quantity forced by a boundary condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowQuantity {
    WaterLevel,
    Velocity,
    /// Two-component velocity (normal and tangential)
    VelocityVector,
    Discharge,
    Riemann,
    Neumann,
    Salinity,
    Temperature,
    Tracer,
    SedimentConcentration,
    MorphologyBedLevel,
    MorphologyBedLoadTransport,
}

impl FlowQuantity {
    /// Number of vector components of this quantity.
    pub fn variable_dimension(&self) -> usize {
        match self {
            FlowQuantity::VelocityVector => 2,
            _ => 1,
        }
    }
}

/// A boundary condition: quantity, scaling, and per-support-point data.
#[derive(Clone, Debug)]
pub struct BoundaryCondition {
    /// Display name of this condition
    pub name: String,
    /// The forced quantity
    pub quantity: FlowQuantity,
    /// Scalar multiplier applied to every amplitude/value
    pub factor: f64,
    /// Scalar offset added to every synthesized sample
    pub offset: f64,
    /// Sediment fraction names; only meaningful for morphology bed-load
    /// transport, where each fraction has its own component columns
    pub sediment_fractions: Vec<String>,
    /// Forcing definition per support point; `None` where no data is set
    point_data: Vec<Option<ForcingFunction>>,
}

impl BoundaryCondition {
    /// Create a condition with room for `support_points` forcing slots.
    pub fn new(name: impl Into<String>, quantity: FlowQuantity, support_points: usize) -> Self {
        Self {
            name: name.into(),
            quantity,
            factor: 1.0,
            offset: 0.0,
            sediment_fractions: Vec::new(),
            point_data: vec![None; support_points],
        }
    }

    /// Set the factor/offset scaling pair.
    pub fn with_scaling(mut self, factor: f64, offset: f64) -> Self {
        self.factor = factor;
        self.offset = offset;
        self
    }

    /// Set the sediment fraction names (morphology bed-load transport).
    pub fn with_sediment_fractions(mut self, fractions: Vec<String>) -> Self {
        self.sediment_fractions = fractions;
        self
    }

    /// Attach a forcing definition to a support point.
    ///
    /// # Panics
    ///
    /// Panics when `support_point` is out of range.
    pub fn set_data_at_point(&mut self, support_point: usize, function: ForcingFunction) {
        self.point_data[support_point] = Some(function);
    }

    /// Remove the forcing definition at a support point.
    pub fn clear_data_at_point(&mut self, support_point: usize) {
        self.point_data[support_point] = None;
    }

    /// The forcing definition at a support point, if any.
    pub fn data_at_point(&self, support_point: usize) -> Option<&ForcingFunction> {
        self.point_data.get(support_point).and_then(|d| d.as_ref())
    }

    /// Number of support points.
    pub fn support_point_count(&self) -> usize {
        self.point_data.len()
    }

    /// Forcing type at a support point (`Empty` when no data is set).
    pub fn forcing_type_at(&self, support_point: usize) -> ForcingType {
        self.data_at_point(support_point)
            .map(|f| f.data.forcing_type())
            .unwrap_or(ForcingType::Empty)
    }

    /// Number of vector components of the forced quantity.
    pub fn variable_dimension(&self) -> usize {
        self.quantity.variable_dimension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forcing::ForcingData;

    #[test]
    fn test_variable_dimension() {
        assert_eq!(FlowQuantity::WaterLevel.variable_dimension(), 1);
        assert_eq!(FlowQuantity::VelocityVector.variable_dimension(), 2);
        assert_eq!(FlowQuantity::Discharge.variable_dimension(), 1);
    }

    #[test]
    fn test_point_data_lookup() {
        let mut bc = BoundaryCondition::new("sea", FlowQuantity::WaterLevel, 3);
        assert!(bc.data_at_point(0).is_none());
        assert_eq!(bc.forcing_type_at(1), ForcingType::Empty);

        bc.set_data_at_point(1, ForcingFunction::new("water level", ForcingData::Empty));
        assert!(bc.data_at_point(1).is_some());

        bc.clear_data_at_point(1);
        assert!(bc.data_at_point(1).is_none());
    }

    #[test]
    fn test_out_of_range_lookup_is_none() {
        let bc = BoundaryCondition::new("sea", FlowQuantity::WaterLevel, 1);
        assert!(bc.data_at_point(5).is_none());
    }

    #[test]
    fn test_default_scaling() {
        let bc = BoundaryCondition::new("sea", FlowQuantity::WaterLevel, 1);
        assert!((bc.factor - 1.0).abs() < 1e-12);
        assert!(bc.offset.abs() < 1e-12);
    }
}
