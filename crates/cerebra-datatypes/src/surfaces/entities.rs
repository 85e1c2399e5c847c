// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! The surface datatype family.
//!
//! `Surface` pairs the scientific and framework capability halves and owns
//! the surface validation pipeline. The concrete datatypes wrap it (or wrap
//! `OpenSurface`, which wraps it) and chain their validation through the
//! parent explicitly, parent invariants first.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{SurfaceFramework, SurfaceScientific, SurfaceTopology};
use crate::entity::{
    DataType, EntityKind, FrameworkCapability, ScientificCapability, ValidationRules,
};
use crate::{DataTypeError, ValidationError};

/// Shared behavior bundle of all surface datatypes.
///
/// Not a concrete datatype itself: it carries no discriminator and the
/// taxonomy registry never instantiates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub scientific: SurfaceScientific,
    pub framework: SurfaceFramework,
    /// Boundary behavior this surface must exhibit to be storable.
    pub topology: SurfaceTopology,
}

impl Default for Surface {
    fn default() -> Self {
        Self::with_topology(SurfaceTopology::Closed)
    }
}

impl Surface {
    pub fn with_topology(topology: SurfaceTopology) -> Self {
        Self {
            scientific: SurfaceScientific::default(),
            framework: SurfaceFramework::default(),
            topology,
        }
    }

    /// Refresh all derived fields: scientific first, framework second.
    /// Framework slicing and summary metadata read the scientific counts,
    /// so the order is fixed.
    pub fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    /// Surface invariants, cheapest first.
    ///
    /// The vertex-count bound is plain metadata and runs before the mesh
    /// traversal in [`SurfaceScientific::check`], so oversized uploads are
    /// rejected without walking their triangle tables.
    pub fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        if self.scientific.number_of_vertices > rules.max_surface_vertices {
            warn!(
                vertices = self.scientific.number_of_vertices,
                maximum = rules.max_surface_vertices,
                "surface rejected: vertex bound exceeded"
            );
            return Err(ValidationError::BoundExceeded {
                field: "vertices",
                actual: self.scientific.number_of_vertices,
                maximum: rules.max_surface_vertices,
            }
            .into());
        }

        let report = self.scientific.check();
        match self.topology {
            SurfaceTopology::Closed if !report.is_closed => {
                warn!(
                    boundary_edges = report.boundary_edge_count,
                    non_manifold_edges = report.non_manifold_edge_count,
                    "surface rejected: expected a closed mesh"
                );
                Err(ValidationError::StructurallyUnsound(
                    "Could not import surface because it is not closed.".to_string(),
                )
                .into())
            }
            SurfaceTopology::Open if !report.is_manifold() => {
                warn!(
                    non_manifold_edges = report.non_manifold_edge_count,
                    dangling_triangles = report.out_of_range_triangle_count,
                    "surface rejected: malformed open mesh"
                );
                Err(ValidationError::StructurallyUnsound(
                    "Could not import surface because its mesh is malformed: it has \
                     non-manifold edges or triangles referencing missing vertices."
                        .to_string(),
                )
                .into())
            }
            _ => Ok(()),
        }
    }
}

/// Shared behavior bundle of the open (bordered) surface datatypes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenSurface {
    pub surface: Surface,
}

impl Default for OpenSurface {
    fn default() -> Self {
        Self {
            surface: Surface::with_topology(SurfaceTopology::Open),
        }
    }
}

impl OpenSurface {
    pub fn configure(&mut self) -> Result<(), DataTypeError> {
        self.surface.configure()
    }

    pub fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        self.surface.validate(rules)
    }
}

/// Cortical sheet the simulation integrates activity on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorticalSurface {
    pub surface: Surface,
    /// Optional per-vertex anatomical region index; when present it must
    /// cover the vertex table exactly.
    #[serde(default)]
    pub region_assignment: Option<Array1<u32>>,
}

impl DataType for CorticalSurface {
    fn kind(&self) -> EntityKind {
        EntityKind::CorticalSurface
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.surface.configure()
    }

    fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        self.surface.validate(rules)?;
        if let Some(assignment) = &self.region_assignment {
            let vertices = self.surface.scientific.number_of_vertices;
            if assignment.len() as u64 != vertices {
                return Err(ValidationError::InvalidParameter {
                    field: "region_assignment",
                    reason: format!(
                        "covers {} vertices but the surface has {}",
                        assignment.len(),
                        vertices
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Outer skin/air boundary surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkinAir {
    pub surface: Surface,
}

impl DataType for SkinAir {
    fn kind(&self) -> EntityKind {
        EntityKind::SkinAir
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.surface.configure()
    }

    fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        self.surface.validate(rules)
    }
}

/// Brain/skull boundary surface (inner skull).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrainSkull {
    pub surface: Surface,
}

impl DataType for BrainSkull {
    fn kind(&self) -> EntityKind {
        EntityKind::BrainSkull
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.surface.configure()
    }

    fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        self.surface.validate(rules)
    }
}

/// Skull/skin boundary surface (outer skull).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkullSkin {
    pub surface: Surface,
}

impl DataType for SkullSkin {
    fn kind(&self) -> EntityKind {
        EntityKind::SkullSkin
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.surface.configure()
    }

    fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        self.surface.validate(rules)
    }
}

/// Sensor cap sheet used to position EEG electrodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EEGCap {
    pub open: OpenSurface,
}

impl DataType for EEGCap {
    fn kind(&self) -> EntityKind {
        EntityKind::EegCap
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.open.configure()
    }

    fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        self.open.validate(rules)
    }
}

/// Face sheet used for subject-space visual orientation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaceSurface {
    pub open: OpenSurface,
}

impl DataType for FaceSurface {
    fn kind(&self) -> EntityKind {
        EntityKind::FaceSurface
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.open.configure()
    }

    fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError> {
        self.open.validate(rules)
    }
}
