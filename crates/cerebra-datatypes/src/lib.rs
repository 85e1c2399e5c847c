// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Core datatype library for CEREBRA.
//!
//! Every brain-simulation data entity in this crate is composed from two
//! capability halves: a *scientific* capability holding numeric state and
//! domain computations, and a *framework* capability holding identity and
//! storage metadata. The [`entity`] module defines the composition seams,
//! the uniform [`DataType`](entity::DataType) contract (configure, then
//! validate, then persist) and the taxonomy registry used to rebuild
//! concrete entities from persisted discriminator tags. The remaining
//! modules hold the datatype families themselves.

mod error;

pub mod coupling;
pub mod entity;
pub mod spectral;
pub mod surfaces;
pub mod temporal_correlations;

pub use entity::{
    taxonomy, DataType, EntityInfo, EntityKind, FrameworkCapability, ScientificCapability,
    TaxonomyRegistry, ValidationRules, DEFAULT_MAX_SURFACE_VERTICES,
};
pub use error::{DataTypeError, ValidationError};
