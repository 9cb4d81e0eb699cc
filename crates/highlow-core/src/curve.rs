// File: crates/highlow-core/src/curve.rs
// Summary: Uniform cubic B-spline ("basis") smoothing of a polyline into path commands.

use crate::geometry::{PathCommand, PathData, Point};

/// Build a basis-spline path through `points`, in the given order.
///
/// The curve starts on the first point and ends on the last; interior points act as
/// control points, so the line passes near rather than through them. One point yields a
/// closed zero-length subpath, two points a straight segment.
pub fn basis_path(points: &[Point]) -> PathData {
    let mut path = PathData::new();
    let (first, rest) = match points.split_first() {
        Some(split) => split,
        None => return path,
    };
    path.push(PathCommand::MoveTo(*first));

    let mut p0 = *first;
    let mut p1 = match rest.first() {
        Some(p) => *p,
        None => {
            path.push(PathCommand::Close);
            return path;
        }
    };

    for (i, &p) in rest.iter().enumerate().skip(1) {
        if i == 1 {
            path.push(PathCommand::LineTo(Point::new(
                (5.0 * p0.x + p1.x) / 6.0,
                (5.0 * p0.y + p1.y) / 6.0,
            )));
        }
        path.push(basis_segment(p0, p1, p));
        p0 = p1;
        p1 = p;
    }

    if points.len() > 2 {
        path.push(basis_segment(p0, p1, p1));
    }
    path.push(PathCommand::LineTo(p1));
    path
}

fn basis_segment(p0: Point, p1: Point, p: Point) -> PathCommand {
    PathCommand::CubicTo(
        Point::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
        Point::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
        Point::new((p0.x + 4.0 * p1.x + p.x) / 6.0, (p0.y + 4.0 * p1.y + p.y) / 6.0),
    )
}
