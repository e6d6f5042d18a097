#![allow(clippy::unwrap_used)]

use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use netfold::math::{Point2, Point3, Vector2};
use netfold::math::polygon_2d::{interior_angle_2d, signed_area_2d};
use netfold::math::polygon_3d::{newell_normal, polygon_area_3d};
use netfold::{
    unfold_mesh, Diagnostic, EdgeKey, FaceAdjacency, Polyhedron, SpanningTree, UnfoldResult,
    VertexPlacement,
};

const EPS: f64 = 1e-9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn mesh(name: &str, vertices: &[Point3], faces: &[&[usize]]) -> Polyhedron {
    let mut poly = Polyhedron::new(name);
    for &v in vertices {
        poly.add_vertex(v);
    }
    for f in faces {
        poly.add_face(f.to_vec());
    }
    poly
}

fn unit_cube() -> Polyhedron {
    mesh(
        "unit cube",
        &[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.0),
        ],
        &[
            &[0, 3, 2, 1], // bottom
            &[4, 5, 6, 7], // top
            &[0, 1, 5, 4], // front
            &[1, 2, 6, 5], // right
            &[2, 3, 7, 6], // back
            &[3, 0, 4, 7], // left
        ],
    )
}

fn tetrahedron() -> Polyhedron {
    mesh(
        "tetrahedron",
        &[
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        ],
        &[&[0, 2, 1], &[0, 1, 3], &[1, 2, 3], &[2, 0, 3]],
    )
}

fn octahedron() -> Polyhedron {
    mesh(
        "octahedron",
        &[
            p(1.0, 0.0, 0.0),
            p(-1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, -1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(0.0, 0.0, -1.0),
        ],
        &[
            &[0, 2, 4],
            &[2, 1, 4],
            &[1, 3, 4],
            &[3, 0, 4],
            &[2, 0, 5],
            &[1, 2, 5],
            &[3, 1, 5],
            &[0, 3, 5],
        ],
    )
}

/// An L-shaped prism. The top loop starts so that its second vertex is the
/// reflex corner.
fn l_prism() -> Polyhedron {
    let outline = [
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ];
    let mut poly = Polyhedron::new("L prism");
    for z in [0.0, 1.0] {
        for &(x, y) in &outline {
            poly.add_vertex(p(x, y, z));
        }
    }
    poly.add_face(vec![8, 9, 10, 11, 6, 7]);
    poly.add_face(vec![5, 4, 3, 2, 1, 0]);
    for i in 0..6 {
        let j = (i + 1) % 6;
        poly.add_face(vec![i, j, j + 6, i + 6]);
    }
    poly
}

// ── property helpers ──

fn assert_isometric(poly: &Polyhedron, net: &UnfoldResult) {
    for (face_idx, face) in poly.faces().iter().enumerate() {
        let Some(placed) = net.face_placement(face_idx) else {
            continue;
        };
        assert_eq!(placed.len(), face.len());
        for edge in face.edges() {
            let d3 = (poly.vertices()[edge.end] - poly.vertices()[edge.start]).norm();
            let d2 = (placed[edge.end_slot] - placed[edge.start_slot]).norm();
            assert_relative_eq!(d2, d3, epsilon = EPS);
        }
    }
}

fn assert_counter_clockwise(net: &UnfoldResult) {
    for placed in net.face_placements().iter().flatten() {
        assert!(signed_area_2d(placed) > 0.0);
    }
}

fn placed_vertex(poly: &Polyhedron, net: &UnfoldResult, face: usize, vertex: usize) -> Point2 {
    let slot = poly.faces()[face].slot_of(vertex).unwrap();
    net.face_placement(face).unwrap()[slot]
}

fn assert_hinges_attached(poly: &Polyhedron, net: &UnfoldResult) {
    for (parent, child, edge) in net.hinges() {
        for v in [edge.lo(), edge.hi()] {
            assert_relative_eq!(
                placed_vertex(poly, net, parent, v),
                placed_vertex(poly, net, child, v),
                epsilon = EPS
            );
        }
    }
}

fn centroid(points: &[Point2]) -> Point2 {
    let sum = points.iter().fold(Vector2::zeros(), |acc, q| acc + q.coords);
    Point2::from(sum / points.len() as f64)
}

/// For convex faces: parent and child lie on opposite sides of their hinge.
fn assert_hinges_unfold_outward(poly: &Polyhedron, net: &UnfoldResult) {
    for (parent, child, edge) in net.hinges() {
        let a = placed_vertex(poly, net, parent, edge.lo());
        let b = placed_vertex(poly, net, parent, edge.hi());
        let side = |q: Point2| {
            let d = b - a;
            let r = q - a;
            d.x * r.y - d.y * r.x
        };
        let s_parent = side(centroid(net.face_placement(parent).unwrap()));
        let s_child = side(centroid(net.face_placement(child).unwrap()));
        assert!(s_parent * s_child < 0.0, "face {child} folds back over {parent}");
    }
}

fn surface_area(poly: &Polyhedron) -> f64 {
    (0..poly.face_count())
        .map(|f| {
            let pts = poly.face_points(f).unwrap();
            let n = newell_normal(&pts).normalize();
            polygon_area_3d(&pts, &n)
        })
        .sum()
}

// ── unit cube ──

#[test]
fn cube_parent_map() {
    init_tracing();
    let net = unfold_mesh(&unit_cube(), 0).unwrap();
    let parents = net.parent_indices();

    assert_eq!(parents.iter().filter(|&&x| x == -1).count(), 1);
    assert_eq!(parents, vec![-1, 2, 0, 0, 0, 0]);

    let order = net.spanning_tree().order();
    for (face, &parent) in parents.iter().enumerate() {
        if parent < 0 {
            continue;
        }
        let parent_pos = order.iter().position(|&f| f as isize == parent).unwrap();
        let face_pos = order.iter().position(|&f| f == face).unwrap();
        assert!(parent_pos < face_pos);
    }
}

#[test]
fn cube_faces_are_unit_squares() {
    init_tracing();
    let net = unfold_mesh(&unit_cube(), 0).unwrap();
    assert_eq!(net.placed_face_count(), 6);
    for placed in net.face_placements().iter().flatten() {
        assert_eq!(placed.len(), 4);
        for i in 0..4 {
            assert_relative_eq!((placed[(i + 1) % 4] - placed[i]).norm(), 1.0, epsilon = EPS);
            assert_relative_eq!(interior_angle_2d(placed, i), FRAC_PI_2, epsilon = EPS);
        }
    }
}

#[test]
fn cube_net_is_a_cross() {
    let cube = unit_cube();
    let net = unfold_mesh(&cube, 0).unwrap();

    assert!(net.is_complete());
    assert!(net.diagnostics().is_empty());
    assert_eq!(net.hinges().len(), 5);
    // Twelve edges, five hinges.
    assert_eq!(net.cuts().len(), 7);
    assert_relative_eq!(net.area(), 6.0, epsilon = EPS);

    let bounds = net.bounds().unwrap();
    assert_relative_eq!(bounds.width(), 4.0, epsilon = EPS);
    assert_relative_eq!(bounds.height(), 3.0, epsilon = EPS);

    assert_hinges_attached(&cube, &net);
    assert_hinges_unfold_outward(&cube, &net);
    assert_counter_clockwise(&net);
}

#[test]
fn cube_every_root() {
    let cube = unit_cube();
    for root in 0..cube.face_count() {
        let net = unfold_mesh(&cube, root).unwrap();
        assert_isometric(&cube, &net);
        assert_eq!(net.parent_indices()[root], -1);

        let placed = net.face_placement(root).unwrap();
        assert_relative_eq!(placed[0], Point2::new(0.0, 0.0), epsilon = EPS);
        assert_relative_eq!(placed[1], Point2::new(1.0, 0.0), epsilon = EPS);
    }
}

// ── other solids ──

#[test]
fn solids_unfold_isometrically() {
    init_tracing();
    for poly in [tetrahedron(), octahedron(), l_prism()] {
        let net = unfold_mesh(&poly, 0).unwrap();
        assert!(net.is_complete(), "{}", poly.name);
        assert_eq!(net.placed_face_count(), poly.face_count());
        assert_isometric(&poly, &net);
        assert_counter_clockwise(&net);
        assert_hinges_attached(&poly, &net);
        assert_relative_eq!(net.area(), surface_area(&poly), epsilon = 1e-9);
    }
}

#[test]
fn convex_solids_unfold_outward() {
    for poly in [tetrahedron(), octahedron()] {
        for root in 0..poly.face_count() {
            let net = unfold_mesh(&poly, root).unwrap();
            assert_hinges_unfold_outward(&poly, &net);
        }
    }
}

#[test]
fn root_first_edge_length() {
    let poly = l_prism();
    let net = unfold_mesh(&poly, 0).unwrap();
    let placed = net.face_placement(0).unwrap();
    // Top loop starts (2, 1) -> (1, 1).
    assert_relative_eq!(placed[0], Point2::new(0.0, 0.0), epsilon = EPS);
    assert_relative_eq!(placed[1], Point2::new(1.0, 0.0), epsilon = EPS);
}

#[test]
fn unfold_is_reproducible() {
    for poly in [unit_cube(), octahedron(), l_prism()] {
        let first = unfold_mesh(&poly, 1).unwrap();
        let second = unfold_mesh(&poly, 1).unwrap();
        assert_eq!(first.face_placements(), second.face_placements());
        assert_eq!(first.parent_indices(), second.parent_indices());
        assert_eq!(first.cuts(), second.cuts());
    }
}

#[test]
fn tree_reaches_root_from_every_face() {
    let poly = octahedron();
    let adj = FaceAdjacency::build(&poly).unwrap();
    let tree = SpanningTree::build(&adj, 5).unwrap();
    assert_eq!(tree.parent(5), None);
    for face in 0..poly.face_count() {
        let mut current = face;
        let mut steps = 0;
        while let Some(parent) = tree.parent(current) {
            assert!(adj.are_adjacent(current, parent));
            current = parent;
            steps += 1;
            assert!(steps <= poly.face_count());
        }
        assert_eq!(current, 5);
    }
}

// ── partial nets ──

#[test]
fn disconnected_component_left_unplaced() {
    init_tracing();
    let mut poly = unit_cube();
    poly.append(&tetrahedron());
    let net = unfold_mesh(&poly, 0).unwrap();

    assert_eq!(net.placed_face_count(), 6);
    assert!(!net.is_complete());
    assert_eq!(net.unreachable_faces(), vec![6, 7, 8, 9]);
    assert_eq!(
        net.diagnostics(),
        &[
            Diagnostic::UnreachableFace { face: 6 },
            Diagnostic::UnreachableFace { face: 7 },
            Diagnostic::UnreachableFace { face: 8 },
            Diagnostic::UnreachableFace { face: 9 },
        ]
    );
    for face in 6..10 {
        assert!(net.face_placement(face).is_none());
        assert!(!net.spanning_tree().is_reachable(face));
    }
    for vertex in 8..12 {
        assert_eq!(net.vertex_placement(vertex), &VertexPlacement::Unplaced);
        assert_eq!(net.vertex_position(vertex), None);
    }
    assert_isometric(&poly, &net);
}

#[test]
fn non_manifold_fin_reported() {
    init_tracing();
    let mut poly = tetrahedron();
    let tip = poly.add_vertex(p(0.5, -0.5, -0.5));
    poly.add_face(vec![1, 0, tip]);

    let adj = FaceAdjacency::build(&poly).unwrap();
    assert_eq!(adj.non_manifold_edges().len(), 1);
    assert_eq!(adj.non_manifold_edges()[0].edge, EdgeKey::new(0, 1));
    assert_eq!(adj.non_manifold_edges()[0].faces, vec![0, 1, 4]);
    // The other five tetrahedron edges keep their adjacency.
    assert_eq!(adj.interior_edge_count(), 5);

    let net = unfold_mesh(&poly, 0).unwrap();
    assert_eq!(net.placed_face_count(), 4);
    assert!(net.face_placement(4).is_none());
    assert!(matches!(
        &net.diagnostics()[0],
        Diagnostic::NonManifoldEdge(e) if e.edge == EdgeKey::new(0, 1)
    ));
    assert_eq!(net.diagnostics()[1], Diagnostic::UnreachableFace { face: 4 });
    assert_isometric(&poly, &net);
}

#[test]
fn cut_vertices_split() {
    let cube = unit_cube();
    let net = unfold_mesh(&cube, 0).unwrap();
    // Each top corner is reached through several faces that the net cuts
    // apart.
    for v in 4..8 {
        assert!(matches!(net.vertex_placement(v), VertexPlacement::Split(_)));
    }
    for v in net.split_vertices() {
        assert_eq!(net.vertex_position(v), None);
    }
}
