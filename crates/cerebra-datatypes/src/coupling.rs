// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Coupling-function datatypes.
//!
//! A coupling function maps the aggregate activity arriving at a node to
//! the input it actually receives. Every scientific half implements
//! [`CouplingForm`], so a datatype without an evaluation rule cannot be
//! composed in the first place.

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::entity::{
    DataType, EntityInfo, EntityKind, FrameworkCapability, ScientificCapability, ValidationRules,
};
use crate::{DataTypeError, ValidationError};

/// Evaluation rule every coupling datatype must provide.
pub trait CouplingForm {
    /// Apply the coupling function elementwise to incoming activity.
    fn evaluate(&self, activity: ArrayView1<'_, f64>) -> Array1<f64>;
}

/// Linear coupling `a * x + b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearCouplingScientific {
    pub a: f64,
    pub b: f64,
}

impl Default for LinearCouplingScientific {
    fn default() -> Self {
        // 1/256, the conventional rescaling for region-level simulations.
        Self {
            a: 0.003_906_25,
            b: 0.0,
        }
    }
}

impl ScientificCapability for LinearCouplingScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        // Parameters are raw fields; nothing is derived.
        Ok(())
    }
}

impl CouplingForm for LinearCouplingScientific {
    fn evaluate(&self, activity: ArrayView1<'_, f64>) -> Array1<f64> {
        activity.mapv(|x| self.a * x + self.b)
    }
}

/// Sigmoidal coupling `cmin + (cmax - cmin) / (1 + exp(-a * (x - midpoint) / sigma))`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigmoidalCouplingScientific {
    pub cmin: f64,
    pub cmax: f64,
    pub midpoint: f64,
    pub a: f64,
    pub sigma: f64,
}

impl Default for SigmoidalCouplingScientific {
    fn default() -> Self {
        Self {
            cmin: -1.0,
            cmax: 1.0,
            midpoint: 1.0,
            a: 1.0,
            sigma: 230.0,
        }
    }
}

impl ScientificCapability for SigmoidalCouplingScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        Ok(())
    }
}

impl CouplingForm for SigmoidalCouplingScientific {
    fn evaluate(&self, activity: ArrayView1<'_, f64>) -> Array1<f64> {
        let span = self.cmax - self.cmin;
        activity.mapv(|x| {
            self.cmin + span / (1.0 + (-self.a * (x - self.midpoint) / self.sigma).exp())
        })
    }
}

/// Persistence/metadata half shared by the coupling datatypes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouplingFramework {
    pub info: EntityInfo,
}

impl FrameworkCapability<LinearCouplingScientific> for CouplingFramework {
    fn configure(&mut self, scientific: &LinearCouplingScientific) -> Result<(), DataTypeError> {
        self.info.record("Coupling form", "linear");
        self.info.record("a", scientific.a);
        self.info.record("b", scientific.b);
        Ok(())
    }
}

impl FrameworkCapability<SigmoidalCouplingScientific> for CouplingFramework {
    fn configure(&mut self, scientific: &SigmoidalCouplingScientific) -> Result<(), DataTypeError> {
        self.info.record("Coupling form", "sigmoidal");
        self.info.record("cmin", scientific.cmin);
        self.info.record("cmax", scientific.cmax);
        self.info.record("midpoint", scientific.midpoint);
        self.info.record("sigma", scientific.sigma);
        Ok(())
    }
}

/// Linear coupling datatype.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearCoupling {
    pub scientific: LinearCouplingScientific,
    pub framework: CouplingFramework,
}

impl DataType for LinearCoupling {
    fn kind(&self) -> EntityKind {
        EntityKind::LinearCoupling
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    fn validate(&self, _rules: &ValidationRules) -> Result<(), DataTypeError> {
        Ok(())
    }
}

/// Sigmoidal coupling datatype.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SigmoidalCoupling {
    pub scientific: SigmoidalCouplingScientific,
    pub framework: CouplingFramework,
}

impl DataType for SigmoidalCoupling {
    fn kind(&self) -> EntityKind {
        EntityKind::SigmoidalCoupling
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    fn validate(&self, _rules: &ValidationRules) -> Result<(), DataTypeError> {
        if self.scientific.sigma <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                field: "sigma",
                reason: format!(
                    "the sigmoid spread must be positive, found {}",
                    self.scientific.sigma
                ),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn linear_coupling_rescales_activity() {
        let coupling = LinearCouplingScientific::default();
        let out = coupling.evaluate(array![256.0, 0.0].view());
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn sigmoidal_coupling_saturates_between_cmin_and_cmax() {
        let coupling = SigmoidalCouplingScientific {
            sigma: 1.0,
            ..Default::default()
        };
        let out = coupling.evaluate(array![-1e6, 1.0, 1e6].view());
        assert!((out[0] - coupling.cmin).abs() < 1e-9);
        assert!((out[1] - (coupling.cmin + coupling.cmax) / 2.0).abs() < 1e-12);
        assert!((out[2] - coupling.cmax).abs() < 1e-9);
    }

    #[test]
    fn sigmoidal_coupling_rejects_non_positive_sigma() {
        let mut coupling = SigmoidalCoupling::default();
        coupling.scientific.sigma = 0.0;
        coupling.configure().unwrap();
        let err = coupling.validate(&ValidationRules::default()).unwrap_err();
        assert!(matches!(
            err,
            DataTypeError::Validation(ValidationError::InvalidParameter { field: "sigma", .. })
        ));
    }
}
