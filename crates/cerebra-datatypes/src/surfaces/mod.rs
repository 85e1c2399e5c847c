// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Surface datatypes: cortical and head-model meshes.

mod entities;
mod framework;
mod scientific;

pub use entities::{
    BrainSkull, CorticalSurface, EEGCap, FaceSurface, OpenSurface, SkinAir, SkullSkin, Surface,
};
pub use framework::{SurfaceFramework, SPLIT_SLICE_VERTEX_BUDGET};
pub use scientific::{SurfaceScientific, SurfaceTopology, SurfaceTopologyReport};
