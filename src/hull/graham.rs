use egui::Pos2;

use super::{cross, dist2, HullEvent, HullScan};
use crate::trace::Trace;

/// Runs a Graham scan over a snapshot of `points`.
///
/// Pivot is the point with minimum y, ties broken by minimum x; the remaining
/// points are swept in ascending polar angle about the pivot, angle ties
/// resolved closest-first. Collinear boundary points are excluded: a cross
/// product of zero pops like a right turn does.
///
/// Fewer than three points yield an empty hull and an empty trace; callers
/// are expected not to animate in that case.
pub fn graham_scan(points: &[Pos2]) -> HullScan {
    if points.len() < 3 {
        return HullScan::default();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
    let pivot = sorted[0];

    let mut rest = sorted.split_off(1);
    rest.sort_by(|a, b| {
        let angle_a = (a.y - pivot.y).atan2(a.x - pivot.x);
        let angle_b = (b.y - pivot.y).atan2(b.x - pivot.x);
        angle_a
            .total_cmp(&angle_b)
            .then(dist2(pivot, *a).total_cmp(&dist2(pivot, *b)))
    });

    let mut stack = vec![pivot, rest[0]];
    let mut trace = Trace::new();
    trace.push(HullEvent::Seed { a: pivot, b: rest[0] });

    for &candidate in &rest[1..] {
        trace.push(HullEvent::Inspect {
            from: stack[stack.len() - 1],
            to: candidate,
        });

        while stack.len() >= 2 && cross(stack[stack.len() - 2], stack[stack.len() - 1], candidate) <= 0. {
            let popped = stack.pop();
            if let Some(point) = popped {
                trace.push(HullEvent::Pop { point });
            }
        }

        trace.push(HullEvent::Confirm {
            from: stack[stack.len() - 1],
            to: candidate,
        });
        stack.push(candidate);
    }

    HullScan { hull: stack, trace }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_interior() -> Vec<Pos2> {
        vec![
            Pos2::new(0., 0.),
            Pos2::new(4., 0.),
            Pos2::new(4., 4.),
            Pos2::new(0., 4.),
            Pos2::new(2., 2.),
        ]
    }

    #[test]
    fn square_hull_excludes_interior_point() {
        let scan = graham_scan(&square_with_interior());
        assert_eq!(
            scan.hull,
            vec![
                Pos2::new(0., 0.),
                Pos2::new(4., 0.),
                Pos2::new(4., 4.),
                Pos2::new(0., 4.),
            ]
        );
    }

    #[test]
    fn degenerate_input_yields_empty_hull_and_trace() {
        assert_eq!(graham_scan(&[]), HullScan::default());
        assert_eq!(graham_scan(&[Pos2::new(1., 1.)]), HullScan::default());
        let two = [Pos2::new(0., 0.), Pos2::new(1., 1.)];
        assert_eq!(graham_scan(&two), HullScan::default());
    }

    #[test]
    fn collinear_boundary_points_are_popped() {
        let points = [
            Pos2::new(0., 0.),
            Pos2::new(2., 0.),
            Pos2::new(4., 0.),
            Pos2::new(4., 4.),
            Pos2::new(0., 4.),
        ];
        let scan = graham_scan(&points);
        assert!(!scan.hull.contains(&Pos2::new(2., 0.)));
        assert!(scan
            .trace
            .iter()
            .any(|e| matches!(e, HullEvent::Pop { point } if *point == Pos2::new(2., 0.))));
    }

    #[test]
    fn hull_is_convex_and_contains_all_points() {
        let points = [
            Pos2::new(1., 0.),
            Pos2::new(5., 1.),
            Pos2::new(6., 4.),
            Pos2::new(3., 6.),
            Pos2::new(0., 3.),
            Pos2::new(3., 2.),
            Pos2::new(2., 3.),
            Pos2::new(4., 3.),
        ];
        let scan = graham_scan(&points);
        let hull = &scan.hull;
        assert!(hull.len() >= 3);

        // Every consecutive vertex triple turns strictly left.
        for i in 0..hull.len() {
            let o = hull[i];
            let a = hull[(i + 1) % hull.len()];
            let b = hull[(i + 2) % hull.len()];
            assert!(cross(o, a, b) > 0., "vertices {o:?} {a:?} {b:?}");
        }

        // Every input point lies on or inside the hull boundary.
        for p in points {
            for i in 0..hull.len() {
                let a = hull[i];
                let b = hull[(i + 1) % hull.len()];
                assert!(cross(a, b, p) >= 0., "point {p:?} outside edge {a:?}-{b:?}");
            }
        }
    }

    #[test]
    fn trace_is_deterministic() {
        let points = square_with_interior();
        assert_eq!(graham_scan(&points), graham_scan(&points));
    }

    #[test]
    fn pivot_prefers_min_y_then_min_x() {
        let points = [
            Pos2::new(3., 0.),
            Pos2::new(1., 0.),
            Pos2::new(2., 2.),
            Pos2::new(0., 1.),
        ];
        let scan = graham_scan(&points);
        let HullEvent::Seed { a, .. } = scan.trace.events()[0] else {
            panic!("trace must start with a seed");
        };
        assert_eq!(a, Pos2::new(1., 0.));
    }
}
