// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Scientific capability of surface datatypes: raw mesh arrays, derived
//! counts and normals, and the mesh topology diagnostic.

use ahash::AHashMap;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::ScientificCapability;
use crate::DataTypeError;

/// Boundary behavior a surface mesh is expected to exhibit.
///
/// Skull and skin layers enclose a volume and must form a closed 2-manifold;
/// EEG caps and face meshes are open sheets that only need to be manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceTopology {
    Closed,
    Open,
}

/// Outcome of the full mesh traversal performed by
/// [`SurfaceScientific::check`].
///
/// The validation pipeline only reads the booleans; the edge counts and the
/// Euler characteristic are auxiliary diagnostics for tooling and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceTopologyReport {
    /// Every edge is shared by exactly two triangles.
    pub is_closed: bool,
    /// Edges belonging to exactly one triangle.
    pub boundary_edge_count: usize,
    /// Edges belonging to three or more triangles.
    pub non_manifold_edge_count: usize,
    /// Triangles referencing a vertex outside the vertex table.
    pub out_of_range_triangle_count: usize,
    /// V - E + F over the in-range triangles (2 for a closed sphere-like
    /// mesh).
    pub euler_characteristic: i64,
}

impl SurfaceTopologyReport {
    /// True when the mesh is a (possibly bordered) manifold: no non-manifold
    /// edges, no dangling vertex references, and at least one triangle.
    pub fn is_manifold(&self) -> bool {
        self.non_manifold_edge_count == 0 && self.out_of_range_triangle_count == 0
    }
}

/// Numeric half of every surface datatype.
///
/// Raw fields are the vertex and triangle tables loaded from an uploaded
/// mesh; `configure` refreshes the derived counts and per-triangle normals
/// from them and may be repeated freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceScientific {
    /// Vertex positions, one `[x, y, z]` row per vertex.
    pub vertices: Array2<f64>,
    /// Triangles as rows of three indices into the vertex table.
    pub triangles: Array2<usize>,
    /// Derived: number of rows in `vertices`.
    #[serde(default)]
    pub number_of_vertices: u64,
    /// Derived: number of rows in `triangles`.
    #[serde(default)]
    pub number_of_triangles: u64,
    /// Derived: unit normal per triangle (zero for degenerate triangles).
    #[serde(default)]
    pub triangle_normals: Array2<f64>,
}

impl Default for SurfaceScientific {
    fn default() -> Self {
        Self {
            vertices: Array2::zeros((0, 3)),
            triangles: Array2::zeros((0, 3)),
            number_of_vertices: 0,
            number_of_triangles: 0,
            triangle_normals: Array2::zeros((0, 3)),
        }
    }
}

impl SurfaceScientific {
    /// Full mesh traversal classifying every undirected edge by how many
    /// triangles share it.
    ///
    /// This walks the whole triangle table and is therefore the expensive
    /// step of surface validation; callers should exhaust cheaper checks
    /// first. Triangles referencing vertices outside the vertex table are
    /// counted and excluded from the edge statistics.
    pub fn check(&self) -> SurfaceTopologyReport {
        let vertex_count = self.vertices.nrows();
        let mut edge_incidence: AHashMap<(usize, usize), u32> = AHashMap::new();
        let mut out_of_range = 0usize;
        let mut counted_triangles = 0usize;

        for triangle in self.triangles.rows() {
            let (a, b, c) = (triangle[0], triangle[1], triangle[2]);
            if a >= vertex_count || b >= vertex_count || c >= vertex_count {
                out_of_range += 1;
                continue;
            }
            counted_triangles += 1;
            for (u, v) in [(a, b), (b, c), (c, a)] {
                let edge = if u < v { (u, v) } else { (v, u) };
                *edge_incidence.entry(edge).or_insert(0) += 1;
            }
        }

        let boundary = edge_incidence.values().filter(|&&n| n == 1).count();
        let non_manifold = edge_incidence.values().filter(|&&n| n > 2).count();
        let euler =
            vertex_count as i64 - edge_incidence.len() as i64 + counted_triangles as i64;

        SurfaceTopologyReport {
            is_closed: counted_triangles > 0
                && out_of_range == 0
                && boundary == 0
                && non_manifold == 0,
            boundary_edge_count: boundary,
            non_manifold_edge_count: non_manifold,
            out_of_range_triangle_count: out_of_range,
            euler_characteristic: euler,
        }
    }

    fn compute_triangle_normals(&self) -> Array2<f64> {
        let vertex_count = self.vertices.nrows();
        let mut normals = Array2::zeros((self.triangles.nrows(), 3));
        for (row, triangle) in self.triangles.rows().into_iter().enumerate() {
            let (a, b, c) = (triangle[0], triangle[1], triangle[2]);
            if a >= vertex_count || b >= vertex_count || c >= vertex_count {
                continue;
            }
            let p = self.vertices.row(a);
            let q = self.vertices.row(b);
            let r = self.vertices.row(c);
            let e1 = [q[0] - p[0], q[1] - p[1], q[2] - p[2]];
            let e2 = [r[0] - p[0], r[1] - p[1], r[2] - p[2]];
            let cross = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let norm = (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt();
            if norm > 0.0 {
                normals[[row, 0]] = cross[0] / norm;
                normals[[row, 1]] = cross[1] / norm;
                normals[[row, 2]] = cross[2] / norm;
            }
        }
        normals
    }
}

impl ScientificCapability for SurfaceScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        if self.vertices.nrows() > 0 && self.vertices.ncols() != 3 {
            return Err(DataTypeError::BadParameters(format!(
                "vertex table must have 3 columns, found {}",
                self.vertices.ncols()
            )));
        }
        if self.triangles.nrows() > 0 && self.triangles.ncols() != 3 {
            return Err(DataTypeError::BadParameters(format!(
                "triangle table must have 3 columns, found {}",
                self.triangles.ncols()
            )));
        }

        self.number_of_vertices = self.vertices.nrows() as u64;
        self.number_of_triangles = self.triangles.nrows() as u64;
        self.triangle_normals = self.compute_triangle_normals();
        debug!(
            vertices = self.number_of_vertices,
            triangles = self.number_of_triangles,
            "surface scientific fields recomputed"
        );
        Ok(())
    }
}
