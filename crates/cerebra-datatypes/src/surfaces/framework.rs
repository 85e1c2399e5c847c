// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Framework capability of surface datatypes: identity, display slicing and
//! summary metadata.

use serde::{Deserialize, Serialize};

use super::SurfaceScientific;
use crate::entity::{EntityInfo, FrameworkCapability};
use crate::DataTypeError;

/// Vertex budget of one display slice. Renderers index slice-local vertex
/// buffers with 16-bit indices, so a surface is split into chunks that fit.
pub const SPLIT_SLICE_VERTEX_BUDGET: u64 = 65_536;

/// Persistence/metadata half of every surface datatype.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceFramework {
    pub info: EntityInfo,
    /// Derived: number of display slices the vertex table splits into.
    #[serde(default)]
    pub number_of_split_slices: u64,
}

impl FrameworkCapability<SurfaceScientific> for SurfaceFramework {
    fn configure(&mut self, scientific: &SurfaceScientific) -> Result<(), DataTypeError> {
        self.number_of_split_slices = scientific
            .number_of_vertices
            .div_ceil(SPLIT_SLICE_VERTEX_BUDGET)
            .max(1);
        self.info
            .record("Number of vertices", scientific.number_of_vertices);
        self.info
            .record("Number of triangles", scientific.number_of_triangles);
        self.info
            .record("Number of display slices", self.number_of_split_slices);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ScientificCapability;
    use ndarray::Array2;

    #[test]
    fn split_slices_follow_vertex_budget() {
        let mut scientific = SurfaceScientific {
            vertices: Array2::zeros((SPLIT_SLICE_VERTEX_BUDGET as usize + 1, 3)),
            ..Default::default()
        };
        scientific.configure().unwrap();

        let mut framework = SurfaceFramework::default();
        framework.configure(&scientific).unwrap();
        assert_eq!(framework.number_of_split_slices, 2);
        assert_eq!(
            framework.info.summary.get("Number of vertices").map(String::as_str),
            Some("65537")
        );
    }

    #[test]
    fn empty_surface_still_occupies_one_slice() {
        let scientific = SurfaceScientific::default();
        let mut framework = SurfaceFramework::default();
        framework.configure(&scientific).unwrap();
        assert_eq!(framework.number_of_split_slices, 1);
    }
}
