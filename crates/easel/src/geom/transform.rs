use super::Point;

/// Rotates `point` around `pivot` by `radians`, rounding to the nearest
/// integer coordinate.
///
/// Sign convention: with the y axis growing downward, a positive angle turns
/// clockwise on screen.
pub fn rotate_about(point: Point, radians: f64, pivot: Point) -> Point {
    let x = (point.x - pivot.x) as f64;
    let y = (point.y - pivot.y) as f64;
    let (sin, cos) = radians.sin_cos();

    let nx = (x * cos + y * sin).round() as i32;
    let ny = (y * cos - x * sin).round() as i32;

    Point::new(nx + pivot.x, ny + pivot.y)
}

/// Arithmetic mean of the vertex coordinates, rounded to nearest.
///
/// Callers must pass a non-empty slice; the object constructors guard this.
pub fn centroid(points: &[Point]) -> Point {
    debug_assert!(!points.is_empty(), "centroid of an empty point list");

    let mut x_sum: i64 = 0;
    let mut y_sum: i64 = 0;
    for p in points {
        x_sum += p.x as i64;
        y_sum += p.y as i64;
    }

    let n = points.len() as f64;
    Point::new(
        (x_sum as f64 / n).round() as i32,
        (y_sum as f64 / n).round() as i32,
    )
}

/// Translates every vertex by integer deltas. Exact and self-inverse.
pub fn translate(points: &mut [Point], dx: i32, dy: i32) {
    for p in points.iter_mut() {
        *p = p.offset(dx, dy);
    }
}

/// Scales `point` about `center` by `factor`, truncating toward zero.
///
/// Truncation accumulates error under repeated scaling; this is a known
/// lossy operation inherited from the integer vertex representation.
pub fn scale_about(point: Point, center: Point, factor: f64) -> Point {
    let x = ((point.x - center.x) as f64 * factor) as i32;
    let y = ((point.y - center.y) as f64 * factor) as i32;
    Point::new(x + center.x, y + center.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── rotate_about ──────────────────────────────────────────────────────

    #[test]
    fn rotate_quarter_turn_is_clockwise_under_y_down() {
        // (10, 0) relative to the origin; +90° sends it to (0, -10), which
        // is "up" on a y-down canvas, i.e. clockwise visually from +x.
        let r = rotate_about(p(10, 0), 90f64.to_radians(), Point::zero());
        assert_eq!(r, p(0, -10));
    }

    #[test]
    fn rotate_about_offset_pivot() {
        let r = rotate_about(p(15, 10), 180f64.to_radians(), p(10, 10));
        assert_eq!(r, p(5, 10));
    }

    #[test]
    fn rotate_full_turn_is_identity() {
        let r = rotate_about(p(7, -3), 360f64.to_radians(), p(2, 2));
        assert_eq!(r, p(7, -3));
    }

    #[test]
    fn rotate_many_small_steps_has_bounded_drift() {
        // 360 one-degree steps round 360 times; drift stays within a few
        // pixels for modest radii.
        let pivot = p(100, 100);
        let start = p(140, 100);
        let mut v = start;
        for _ in 0..360 {
            v = rotate_about(v, 1f64.to_radians(), pivot);
        }
        assert!((v.x - start.x).abs() <= 3, "x drift too large: {v:?}");
        assert!((v.y - start.y).abs() <= 3, "y drift too large: {v:?}");
    }

    // ── centroid ──────────────────────────────────────────────────────────

    #[test]
    fn centroid_of_rectangle_corners() {
        let pts = [p(0, 0), p(10, 0), p(10, 20), p(0, 20)];
        assert_eq!(centroid(&pts), p(5, 10));
    }

    #[test]
    fn centroid_rounds_to_nearest() {
        let pts = [p(0, 0), p(1, 1), p(2, 0)];
        assert_eq!(centroid(&pts), p(1, 0));
    }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_then_inverse_restores_exactly() {
        let original = vec![p(3, 4), p(-7, 9), p(0, 0)];
        let mut pts = original.clone();
        translate(&mut pts, 13, -5);
        translate(&mut pts, -13, 5);
        assert_eq!(pts, original);
    }

    // ── scale_about ───────────────────────────────────────────────────────

    #[test]
    fn scale_doubles_offsets_from_center() {
        assert_eq!(scale_about(p(15, 10), p(10, 10), 2.0), p(20, 10));
    }

    #[test]
    fn scale_truncates_toward_zero() {
        // 5 * 0.5 = 2.5 truncates to 2; -5 * 0.5 = -2.5 truncates to -2.
        assert_eq!(scale_about(p(5, -5), Point::zero(), 0.5), p(2, -2));
    }
}
