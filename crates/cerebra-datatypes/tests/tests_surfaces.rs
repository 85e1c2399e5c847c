//! Tests for the surface datatype family: configure fan-out, the
//! validation pipeline and specialization chaining.

use cerebra_datatypes::surfaces::*;
use cerebra_datatypes::{DataType, DataTypeError, ValidationError, ValidationRules};
use ndarray::{array, Array1, Array2};

/// Square pyramid: 5 vertices, 6 triangles, closed.
fn pyramid_mesh() -> (Array2<f64>, Array2<usize>) {
    let vertices = array![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.5, 0.5, 1.0]
    ];
    let triangles = array![
        [0, 2, 1],
        [0, 3, 2],
        [0, 1, 4],
        [1, 2, 4],
        [2, 3, 4],
        [3, 0, 4]
    ];
    (vertices, triangles)
}

/// The same pyramid with one side face removed, leaving a hole.
fn open_pyramid_mesh() -> (Array2<f64>, Array2<usize>) {
    let (vertices, triangles) = pyramid_mesh();
    let open = triangles.slice(ndarray::s![..5, ..]).to_owned();
    (vertices, open)
}

fn configured_surface(topology: SurfaceTopology) -> Surface {
    let (vertices, triangles) = pyramid_mesh();
    let mut surface = Surface::with_topology(topology);
    surface.scientific.vertices = vertices;
    surface.scientific.triangles = triangles;
    surface.configure().unwrap();
    surface
}

fn rules(max_surface_vertices: u64) -> ValidationRules {
    ValidationRules {
        max_surface_vertices,
    }
}

mod configure_tests {
    use super::*;

    #[test]
    fn configure_fans_out_to_both_capabilities() {
        let surface = configured_surface(SurfaceTopology::Closed);
        assert_eq!(surface.scientific.number_of_vertices, 5);
        assert_eq!(surface.scientific.number_of_triangles, 6);
        assert_eq!(surface.framework.number_of_split_slices, 1);
        assert_eq!(
            surface
                .framework
                .info
                .summary
                .get("Number of vertices")
                .map(String::as_str),
            Some("5")
        );
    }

    #[test]
    fn configure_is_idempotent() {
        let mut surface = configured_surface(SurfaceTopology::Closed);
        let counts = (
            surface.scientific.number_of_vertices,
            surface.scientific.number_of_triangles,
        );
        let normals = surface.scientific.triangle_normals.clone();
        let summary = surface.framework.info.summary.clone();

        surface.configure().unwrap();
        assert_eq!(
            counts,
            (
                surface.scientific.number_of_vertices,
                surface.scientific.number_of_triangles
            )
        );
        assert_eq!(normals, surface.scientific.triangle_normals);
        assert_eq!(summary, surface.framework.info.summary);
    }

    #[test]
    fn configure_tracks_mesh_edits() {
        let mut surface = configured_surface(SurfaceTopology::Closed);
        let (vertices, triangles) = open_pyramid_mesh();
        surface.scientific.vertices = vertices;
        surface.scientific.triangles = triangles;
        surface.configure().unwrap();
        assert_eq!(surface.scientific.number_of_triangles, 5);
    }
}

mod validation_pipeline_tests {
    use super::*;

    #[test]
    fn valid_closed_surface_passes_silently() {
        let surface = configured_surface(SurfaceTopology::Closed);
        assert!(surface.validate(&rules(10)).is_ok());
    }

    #[test]
    fn vertex_bound_failure_names_the_maximum() {
        let surface = configured_surface(SurfaceTopology::Closed);
        let err = surface.validate(&rules(3)).unwrap_err();
        match err {
            DataTypeError::Validation(ValidationError::BoundExceeded {
                actual, maximum, ..
            }) => {
                assert_eq!(actual, 5);
                assert_eq!(maximum, 3);
            }
            other => panic!("expected a bound failure, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("3"), "message must name the bound: {message}");
    }

    #[test]
    fn bound_check_short_circuits_the_mesh_traversal() {
        // Triangles reference vertices far outside the table; the topology
        // diagnostic would flag this as structurally unsound. Getting the
        // bound error proves the diagnostic never ran.
        let mut surface = configured_surface(SurfaceTopology::Closed);
        surface.scientific.triangles = array![[100, 200, 300]];
        surface.scientific.number_of_triangles = 1;
        let err = surface.validate(&rules(3)).unwrap_err();
        assert!(matches!(
            err,
            DataTypeError::Validation(ValidationError::BoundExceeded { .. })
        ));
    }

    #[test]
    fn open_mesh_fails_the_closedness_check() {
        let (vertices, triangles) = open_pyramid_mesh();
        let mut surface = Surface::default();
        surface.scientific.vertices = vertices;
        surface.scientific.triangles = triangles;
        surface.configure().unwrap();

        let err = surface.validate(&rules(10)).unwrap_err();
        match &err {
            DataTypeError::Validation(ValidationError::StructurallyUnsound(_)) => {}
            other => panic!("expected a structural failure, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("not closed"));
        assert!(message.contains("correct the problem"));
    }

    #[test]
    fn open_surface_accepts_a_bordered_manifold_mesh() {
        let (vertices, triangles) = open_pyramid_mesh();
        let mut surface = Surface::with_topology(SurfaceTopology::Open);
        surface.scientific.vertices = vertices;
        surface.scientific.triangles = triangles;
        surface.configure().unwrap();
        assert!(surface.validate(&rules(10)).is_ok());
    }

    #[test]
    fn open_surface_rejects_dangling_vertex_references() {
        let mut surface = Surface::with_topology(SurfaceTopology::Open);
        surface.scientific.vertices = array![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        surface.scientific.triangles = array![[0, 1, 9]];
        surface.configure().unwrap();
        assert!(matches!(
            surface.validate(&rules(10)),
            Err(DataTypeError::Validation(
                ValidationError::StructurallyUnsound(_)
            ))
        ));
    }
}

mod specialization_tests {
    use super::*;

    #[test]
    fn cortical_surface_runs_parent_invariants_first() {
        // Both the parent bound invariant and the subclass region
        // assignment invariant are violated; the parent's category must
        // win.
        let mut cortical = CorticalSurface::default();
        let (vertices, triangles) = pyramid_mesh();
        cortical.surface.scientific.vertices = vertices;
        cortical.surface.scientific.triangles = triangles;
        cortical.region_assignment = Some(Array1::zeros(2));
        cortical.configure().unwrap();

        let err = cortical.validate(&rules(3)).unwrap_err();
        assert!(matches!(
            err,
            DataTypeError::Validation(ValidationError::BoundExceeded { .. })
        ));
    }

    #[test]
    fn cortical_surface_checks_its_own_invariant_after_the_parent() {
        let mut cortical = CorticalSurface::default();
        let (vertices, triangles) = pyramid_mesh();
        cortical.surface.scientific.vertices = vertices;
        cortical.surface.scientific.triangles = triangles;
        cortical.region_assignment = Some(Array1::zeros(2));
        cortical.configure().unwrap();

        let err = cortical.validate(&rules(10)).unwrap_err();
        assert!(matches!(
            err,
            DataTypeError::Validation(ValidationError::InvalidParameter {
                field: "region_assignment",
                ..
            })
        ));
    }

    #[test]
    fn cortical_surface_with_full_region_assignment_is_valid() {
        let mut cortical = CorticalSurface::default();
        let (vertices, triangles) = pyramid_mesh();
        cortical.surface.scientific.vertices = vertices;
        cortical.surface.scientific.triangles = triangles;
        cortical.region_assignment = Some(Array1::zeros(5));
        cortical.configure().unwrap();
        assert!(cortical.validate(&rules(10)).is_ok());
    }

    #[test]
    fn eeg_cap_chains_through_open_surface_to_surface() {
        let (vertices, triangles) = open_pyramid_mesh();
        let mut cap = EEGCap::default();
        cap.open.surface.scientific.vertices = vertices;
        cap.open.surface.scientific.triangles = triangles;
        cap.configure().unwrap();

        // Parent bound invariant fires through two specialization levels.
        assert!(matches!(
            cap.validate(&rules(3)),
            Err(DataTypeError::Validation(
                ValidationError::BoundExceeded { .. }
            ))
        ));
        // Within bounds, the open-topology structural predicate accepts it.
        assert!(cap.validate(&rules(10)).is_ok());
    }

    #[test]
    fn closed_specializations_share_the_surface_pipeline() {
        // All three wrap a closed-topology surface; an open mesh must fail
        // structurally for each of them.
        let (vertices, triangles) = open_pyramid_mesh();

        let mut skin = SkinAir::default();
        skin.surface.scientific.vertices = vertices.clone();
        skin.surface.scientific.triangles = triangles.clone();
        skin.configure().unwrap();
        assert!(skin.validate(&rules(10)).is_err());

        let mut skull = BrainSkull::default();
        skull.surface.scientific.vertices = vertices.clone();
        skull.surface.scientific.triangles = triangles.clone();
        skull.configure().unwrap();
        assert!(skull.validate(&rules(10)).is_err());

        let mut outer = SkullSkin::default();
        outer.surface.scientific.vertices = vertices;
        outer.surface.scientific.triangles = triangles;
        outer.configure().unwrap();
        assert!(outer.validate(&rules(10)).is_err());
    }
}
