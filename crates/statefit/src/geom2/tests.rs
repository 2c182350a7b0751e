use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn unit_square() -> Polygon {
    Polygon::rect(0.0, 0.0, 1.0, 1.0)
}

#[test]
fn closing_vertex_is_dropped() {
    let p = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
    assert_eq!(p.len(), 4);
    assert_eq!(p.edges().count(), 4);
}

#[test]
fn area_of_squares_and_orientation() {
    assert!((area(&unit_square()) - 1.0).abs() < 1e-12);
    assert!((signed_area(&unit_square()) - 1.0).abs() < 1e-12);
    // clockwise ring: negative signed area, same absolute area
    let cw = Polygon::from_xy(&[(0.0, 0.0), (0.0, 3.0), (3.0, 3.0), (3.0, 0.0)]);
    assert!((signed_area(&cw) + 9.0).abs() < 1e-12);
    assert!((area(&cw) - 9.0).abs() < 1e-12);
}

#[test]
fn degenerate_rings_are_conservative() {
    let empty = Polygon::default();
    let two = Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0)]);
    let collinear = Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    let nan = Polygon::from_xy(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]);
    for p in [&empty, &two, &collinear, &nan] {
        assert_eq!(area(p), 0.0);
        assert!(!point_in_polygon(vector![0.5, 0.5], p));
        assert!(!point_in_polygon(vector![0.0, 0.0], p));
    }
    assert!(bounding_box(&empty).is_none());
    assert!(centroid(&empty).is_none());
    // a NaN query point is never inside
    assert!(!point_in_polygon(vector![f64::NAN, 0.5], &unit_square()));
}

#[test]
fn rounded_collinear_rings_have_zero_area() {
    let rings = [
        Polygon::from_xy(&[(-71.8, 41.1), (-71.45, 41.4), (-71.1, 41.7)]),
        Polygon::from_xy(&[(0.1, 0.7), (0.2, 1.4), (0.3, 2.1), (0.9, 6.3)]),
    ];
    for ring in &rings {
        assert_eq!(signed_area(ring), 0.0);
        assert_eq!(area(ring), 0.0);
        let v0 = ring.vertices()[0];
        let mid = (ring.vertices()[0] + ring.vertices()[1]) * 0.5;
        assert!(!point_in_polygon(v0, ring));
        assert!(!point_in_polygon(mid, ring));
    }
    // a real sliver of the same extent keeps its area
    let thin = Polygon::from_xy(&[(-71.8, 41.1), (-71.45, 41.41), (-71.1, 41.7)]);
    assert!(area(&thin) > 1e-3);
    assert!(area_tolerance(&thin) < 1e-10);
}

#[test]
fn simple_and_self_intersecting_rings() {
    assert!(is_simple(&unit_square()));
    // collinear extra vertex on an edge and a repeated vertex are fine
    let notched = Polygon::from_xy(&[
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (0.0, 3.0),
        (0.0, 1.5),
    ]);
    assert!(is_simple(&notched));
    let bowtie = Polygon::from_xy(&[(0.0, 0.0), (6.0, 6.0), (6.0, 0.0), (0.0, 2.0)]);
    assert!(!is_simple(&bowtie));
    // a vertex touching a non-adjacent edge
    let pinched = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    assert!(!is_simple(&pinched));
    // a spike doubling back on itself
    let spike = Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert!(!is_simple(&spike));
    assert!(!is_simple(&Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0)])));
}

#[test]
fn bounding_box_and_vertex_centroid() {
    let p = Polygon::from_xy(&[(-71.8, 41.1), (-71.1, 41.1), (-71.1, 41.7), (-71.8, 41.7)]);
    let b = bounding_box(&p).unwrap();
    assert!(b.approx_eq(
        &Bounds2 {
            min_x: -71.8,
            min_y: 41.1,
            max_x: -71.1,
            max_y: 41.7
        },
        1e-12
    ));
    // vertex mean, not area centroid: an extra vertex on an edge shifts it
    let tri = Polygon::from_xy(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0), (0.0, 1.5)]);
    let c = centroid(&tri).unwrap();
    assert!((c.x - 1.2).abs() < 1e-12);
    assert!((c.y - 1.5).abs() < 1e-12);
}

#[test]
fn even_odd_containment() {
    // U-shaped ring: the notch (1..2 x 1..3) is outside
    let u = Polygon::from_xy(&[
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0),
    ]);
    assert!(point_in_polygon(vector![0.5, 2.0], &u));
    assert!(point_in_polygon(vector![2.5, 2.0], &u));
    assert!(point_in_polygon(vector![1.5, 0.5], &u));
    assert!(!point_in_polygon(vector![1.5, 2.0], &u));
    assert!(!point_in_polygon(vector![4.0, 0.5], &u));
    assert!(!point_in_polygon(vector![-0.1, 0.5], &u));
}

#[test]
fn boundary_points_count_as_inside() {
    let sq = unit_square();
    assert!(point_in_polygon(vector![0.0, 0.0], &sq));
    assert!(point_in_polygon(vector![1.0, 0.5], &sq));
    assert!(point_in_polygon(vector![0.5, 1.0 + 1e-12], &sq));
    assert!(!point_in_polygon(vector![0.5, 1.0 + 1e-6], &sq));
}

#[test]
fn rotate_about_pivot_is_pure() {
    let sq = unit_square();
    let before = sq.clone();
    let r = rotate(&sq, 90.0, vector![0.0, 0.0]);
    assert_eq!(sq, before);
    // (1,0) -> (0,1) under +90°
    let v = r.vertices()[1];
    assert!((v - vector![0.0, 1.0]).norm() < 1e-12);
    // full turn returns to the start
    let back = rotate(&r, 270.0, vector![0.0, 0.0]);
    for (a, b) in back.vertices().iter().zip(sq.vertices()) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn translate_shifts_every_vertex() {
    let t = translate(&unit_square(), 2.0, -1.0);
    let b = bounding_box(&t).unwrap();
    assert!((b.min_x - 2.0).abs() < 1e-12 && (b.min_y + 1.0).abs() < 1e-12);
    assert!((area(&t) - 1.0).abs() < 1e-12);
}

#[test]
fn svg_path_closes_ring() {
    let p = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert_eq!(
        p.to_svg_path(),
        "M 0.000 0.000 L 1.000 0.000 L 0.000 1.000 Z"
    );
    assert_eq!(Polygon::default().to_svg_path(), "");
}

proptest! {
    #[test]
    fn rigid_motions_preserve_area(
        w in 0.1f64..50.0,
        h in 0.1f64..50.0,
        angle in -360.0f64..360.0,
        dx in -100.0f64..100.0,
        dy in -100.0f64..100.0,
    ) {
        let p = Polygon::rect(-3.0, 7.0, w, h);
        let pivot = centroid(&p).unwrap();
        let moved = translate(&rotate(&p, angle, pivot), dx, dy);
        prop_assert!((area(&moved) - w * h).abs() < 1e-9 * (1.0 + w * h));
    }

    #[test]
    fn centroid_of_rect_is_inside(
        x in -180.0f64..180.0,
        y in -90.0f64..90.0,
        w in 0.01f64..20.0,
        h in 0.01f64..20.0,
    ) {
        let p = Polygon::rect(x, y, w, h);
        let c: Vector2<f64> = centroid(&p).unwrap();
        prop_assert!(point_in_polygon(c, &p));
    }
}
