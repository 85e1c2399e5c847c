// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Entity composition layer.
//!
//! Defines the capability seams datatypes are assembled from, the uniform
//! [`DataType`] contract every concrete datatype satisfies, and the taxonomy
//! registry that rebuilds concrete datatypes from persisted discriminators.

mod capability;
mod info;
mod kind;
mod registry;

pub use capability::{FrameworkCapability, ScientificCapability};
pub use info::EntityInfo;
pub use kind::EntityKind;
pub use registry::{taxonomy, EntityFactory, TaxonomyRegistry};

use crate::DataTypeError;

/// Default upper bound on surface vertex counts, used when no configuration
/// is loaded.
pub const DEFAULT_MAX_SURFACE_VERTICES: u64 = 300_000;

/// Configured bounds consulted by the validation pipeline.
///
/// Cheap bound checks run against these values before any expensive
/// structural diagnostic is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Maximum number of vertices a surface may carry and still be accepted
    /// for storage.
    pub max_surface_vertices: u64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_surface_vertices: DEFAULT_MAX_SURFACE_VERTICES,
        }
    }
}

/// Uniform contract of every concrete datatype.
///
/// Lifecycle: an entity is created bare (`Default` or via the taxonomy
/// registry), `configure`d one or more times as raw data is filled in, and
/// `validate`d immediately before being handed to the persistence layer.
///
/// `configure` fans out to the scientific capability first and the
/// framework capability second; the order is load-bearing because framework
/// metadata is derived from scientific counts. `validate` runs the
/// datatype's invariant checks in order, parent invariants strictly before
/// its own, and short-circuits on the first failure. A return of `Ok(())`
/// is the only success signal; there is no partial validity.
pub trait DataType {
    /// The discriminator persisted alongside this entity.
    fn kind(&self) -> EntityKind;

    /// Recompute all derived fields from the current raw fields.
    fn configure(&mut self) -> Result<(), DataTypeError>;

    /// Check every pre-persistence invariant, cheapest first.
    fn validate(&self, rules: &ValidationRules) -> Result<(), DataTypeError>;
}
