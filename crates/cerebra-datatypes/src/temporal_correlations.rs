// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Temporal correlation datatypes.

use ndarray::{Array1, ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::entity::{
    DataType, EntityInfo, EntityKind, FrameworkCapability, ScientificCapability, ValidationRules,
};
use crate::{DataTypeError, ValidationError};

/// Scientific half of the cross-correlation datatype.
///
/// `array_data` holds the correlation values with the lag axis first,
/// followed by the two node axes. `lags` is derived from the raw time
/// vector, centred on its midpoint so zero lag sits in the middle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossCorrelationScientific {
    /// Sample times of the source time series.
    pub time: Array1<f64>,
    /// Correlation values, lag axis first.
    pub array_data: ArrayD<f64>,
    /// Node labels for the correlated channels, if known.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Derived: time offsets corresponding to the lag axis.
    #[serde(default)]
    pub lags: Array1<f64>,
}

impl Default for CrossCorrelationScientific {
    fn default() -> Self {
        Self {
            time: Array1::zeros(0),
            array_data: ArrayD::zeros(IxDyn(&[0])),
            labels: Vec::new(),
            lags: Array1::zeros(0),
        }
    }
}

impl ScientificCapability for CrossCorrelationScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.lags = if self.time.is_empty() {
            Array1::zeros(0)
        } else {
            let centre = self.time[self.time.len() / 2];
            self.time.mapv(|t| t - centre)
        };
        Ok(())
    }
}

/// Persistence/metadata half of the cross-correlation datatype.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationFramework {
    pub info: EntityInfo,
}

impl FrameworkCapability<CrossCorrelationScientific> for CorrelationFramework {
    fn configure(&mut self, scientific: &CrossCorrelationScientific) -> Result<(), DataTypeError> {
        self.info.record("Number of lags", scientific.lags.len());
        self.info.record("Number of nodes", scientific.labels.len());
        Ok(())
    }
}

/// Pairwise cross-correlation of a set of signals across time lags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrossCorrelation {
    pub scientific: CrossCorrelationScientific,
    pub framework: CorrelationFramework,
}

impl DataType for CrossCorrelation {
    fn kind(&self) -> EntityKind {
        EntityKind::CrossCorrelation
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    fn validate(&self, _rules: &ValidationRules) -> Result<(), DataTypeError> {
        let lag_rows = self.scientific.array_data.shape().first().copied().unwrap_or(0);
        if lag_rows != self.scientific.lags.len() {
            return Err(ValidationError::StructurallyUnsound(format!(
                "Could not process this cross-correlation because it stores {} lags but the \
                 value array has {} rows.",
                self.scientific.lags.len(),
                lag_rows
            ))
            .into());
        }
        if !self.scientific.labels.is_empty() {
            let nodes = self.scientific.array_data.shape().get(1).copied().unwrap_or(0);
            if self.scientific.labels.len() != nodes {
                return Err(ValidationError::InvalidParameter {
                    field: "labels",
                    reason: format!(
                        "{} labels given for {} correlated nodes",
                        self.scientific.labels.len(),
                        nodes
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}
