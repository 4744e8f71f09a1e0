use super::Point;

/// Number of parametric samples used to approximate an ellipse outline.
///
/// Fixed precision/performance tradeoff; not configurable.
pub const ELLIPSE_SEGMENTS: usize = 200;

/// Polygon approximation of an ellipse with radii `(rx, ry)` centered at
/// `center`, sampled at [`ELLIPSE_SEGMENTS`] evenly spaced angles.
pub fn ellipse_outline(center: Point, rx: i32, ry: i32) -> Vec<Point> {
    let mut points = Vec::with_capacity(ELLIPSE_SEGMENTS);
    for i in 0..ELLIPSE_SEGMENTS {
        let theta = std::f64::consts::TAU * i as f64 / ELLIPSE_SEGMENTS as f64;
        let x = (rx as f64 * theta.cos()).round() as i32;
        let y = (ry as f64 * theta.sin()).round() as i32;
        points.push(Point::new(center.x + x, center.y + y));
    }
    points
}

/// Four corner points of an axis-aligned rectangle, clockwise from the top
/// left. Half extents use integer division, so odd sizes lose one pixel.
pub fn rect_corners(center: Point, width: i32, height: i32) -> Vec<Point> {
    let hw = width / 2;
    let hh = height / 2;
    vec![
        Point::new(center.x - hw, center.y - hh),
        Point::new(center.x + hw, center.y - hh),
        Point::new(center.x + hw, center.y + hh),
        Point::new(center.x - hw, center.y + hh),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_emits_exactly_200_vertices() {
        let pts = ellipse_outline(Point::new(200, 200), 40, 40);
        assert_eq!(pts.len(), ELLIPSE_SEGMENTS);
    }

    #[test]
    fn circle_vertices_lie_on_the_ideal_circle_within_rounding() {
        let center = Point::new(200, 200);
        let r = 40.0_f64;
        for p in ellipse_outline(center, 40, 40) {
            let dx = (p.x - center.x) as f64;
            let dy = (p.y - center.y) as f64;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!(
                (dist - r).abs() <= 0.75,
                "vertex {p:?} is {dist} from center, expected ~{r}"
            );
        }
    }

    #[test]
    fn oval_respects_both_radii() {
        let pts = ellipse_outline(Point::zero(), 40, 60);
        let max_x = pts.iter().map(|p| p.x.abs()).max().unwrap();
        let max_y = pts.iter().map(|p| p.y.abs()).max().unwrap();
        assert_eq!(max_x, 40);
        assert_eq!(max_y, 60);
    }

    #[test]
    fn rect_corners_are_centered() {
        let pts = rect_corners(Point::new(200, 200), 80, 120);
        assert_eq!(
            pts,
            vec![
                Point::new(160, 140),
                Point::new(240, 140),
                Point::new(240, 260),
                Point::new(160, 260),
            ]
        );
    }
}
