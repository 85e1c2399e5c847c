// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! # CEREBRA - Composable brain-simulation datatypes
//!
//! CEREBRA models brain-simulation data entities (surfaces, coupling
//! functions, spectral decompositions, correlation matrices) as dual-aspect
//! objects: a *scientific* capability carrying numeric state and domain
//! computations, and a *framework* capability carrying identity and storage
//! metadata. Entities are configured (scientific first, framework second),
//! validated against configured bounds and structural invariants, and only
//! then handed to a persistence layer; concrete entity types are rebuilt
//! from persisted discriminator tags through the taxonomy registry.
//!
//! ## Quick Start
//!
//! ```rust
//! use cerebra::datatypes::surfaces::CorticalSurface;
//! use cerebra::datatypes::{DataType, ValidationRules};
//!
//! let mut surface = CorticalSurface::default();
//! // ...load vertex and triangle tables into surface.surface.scientific...
//! surface.configure()?;
//! match surface.validate(&ValidationRules::default()) {
//!     Ok(()) => { /* hand to the persistence layer */ }
//!     Err(err) => eprintln!("{err}"),
//! }
//! # Ok::<(), cerebra::datatypes::DataTypeError>(())
//! ```

pub use cerebra_config as config;
pub use cerebra_datatypes as datatypes;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Derive the datatype validation rules from loaded configuration.
pub fn validation_rules(config: &config::CerebraConfig) -> datatypes::ValidationRules {
    datatypes::ValidationRules {
        max_surface_vertices: config.validation.max_surface_vertices,
    }
}
