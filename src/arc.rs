//! Elliptic arc rasterization from SVG endpoint parameters.
//!
//! The endpoint form (two points, two radii, a rotation and two flags) is
//! reduced to a centre, following the W3C conversion. Equal radii hand off
//! to the circle walker; everything else samples the ellipse in whole
//! degrees with the 256-scaled trig table, so a given arc always produces
//! the same lattice points.

use crate::basics::{Point, ARC_FLAG_LARGE, ARC_FLAG_SWEEP};
use crate::circle::circle_segment_points;
use crate::smooth::SmoothingWindow;
use crate::trig::{cos256, scale256, sin256, vector_angle};

/// Centre parameterization of an endpoint arc.
struct CenterForm {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

/// W3C endpoint-to-centre conversion (SVG implementation notes F.6.5/F.6.6).
///
/// Degenerate radii are replaced by half the chord; radii too small for the
/// chord are scaled up until it fits. The centre lands on the side selected
/// by the large-arc and sweep flags.
fn center_form(from: Point, to: Point, rx: i16, ry: i16, phi: i16, flags: u8) -> CenterForm {
    let (sin_p, cos_p) = (phi as f64).to_radians().sin_cos();
    let dx2 = (from.x as f64 - to.x as f64) / 2.0;
    let dy2 = (from.y as f64 - to.y as f64) / 2.0;
    let x1p = cos_p * dx2 + sin_p * dy2;
    let y1p = -sin_p * dx2 + cos_p * dy2;

    let mut rx = (rx as f64).abs();
    let mut ry = (ry as f64).abs();
    if rx == 0.0 || ry == 0.0 {
        rx = (dx2 * dx2 + dy2 * dy2).sqrt();
        ry = rx;
    }

    let delta = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if delta > 1.0 {
        let s = delta.sqrt();
        rx *= s;
        ry *= s;
    }

    let num = rx * rx * ry * ry - rx * rx * y1p * y1p - ry * ry * x1p * x1p;
    let den = rx * rx * y1p * y1p + ry * ry * x1p * x1p;
    let mut co = (num.max(0.0) / den).sqrt();
    let large = flags & ARC_FLAG_LARGE != 0;
    let sweep = flags & ARC_FLAG_SWEEP != 0;
    if large == sweep {
        co = -co;
    }
    let cxp = co * rx * y1p / ry;
    let cyp = -co * ry * x1p / rx;

    CenterForm {
        cx: cos_p * cxp - sin_p * cyp + (from.x as f64 + to.x as f64) / 2.0,
        cy: sin_p * cxp + cos_p * cyp + (from.y as f64 + to.y as f64) / 2.0,
        rx,
        ry,
    }
}

/// Generate the arc's candidate pixels, start and end points included
/// exactly, and hand them to `propose`.
pub(crate) fn arc_points(
    from: Point,
    to: Point,
    rx: i16,
    ry: i16,
    phi: i16,
    flags: u8,
    propose: &mut impl FnMut(Point),
) {
    if from == to {
        propose(from);
        return;
    }

    let c = center_form(from, to, rx, ry, phi, flags);
    let icx = c.cx.round() as i16;
    let icy = c.cy.round() as i16;
    let irx = c.rx.round() as i32;
    let iry = c.ry.round() as i32;

    if irx == iry {
        propose(from);
        circle_segment_points(Point::new(icx, icy), irx as i16, from, to, flags, propose);
        propose(to);
        return;
    }

    // Parametric angles of the endpoints on the unrotated ellipse.
    let (sin_p, cos_p) = (phi as f64).to_radians().sin_cos();
    let vx1 = from.x as f64 - c.cx;
    let vy1 = from.y as f64 - c.cy;
    let vx2 = to.x as f64 - c.cx;
    let vy2 = to.y as f64 - c.cy;
    let ux1 = cos_p * vx1 + sin_p * vy1;
    let uy1 = -sin_p * vx1 + cos_p * vy1;
    let ux2 = cos_p * vx2 + sin_p * vy2;
    let uy2 = -sin_p * vx2 + cos_p * vy2;
    let a1 = vector_angle((ux1 * iry as f64).round() as i32, (uy1 * irx as f64).round() as i32)
        as i32;
    let a2 = vector_angle((ux2 * iry as f64).round() as i32, (uy2 * irx as f64).round() as i32)
        as i32;

    let step: i32 = if flags & ARC_FLAG_SWEEP != 0 { -1 } else { 1 };
    let phi = phi as i32;

    propose(from);
    let mut a = a1;
    while a != a2 {
        a = (a + step).rem_euclid(360);
        let ex = scale256(irx * cos256(a));
        let ey = scale256(iry * sin256(a));
        let px = icx as i32 + scale256(ex * cos256(phi) - ey * sin256(phi));
        let py = icy as i32 + scale256(ex * sin256(phi) + ey * cos256(phi));
        propose(Point::new(px as i16, py as i16));
    }
    propose(to);
}

/// Draw an SVG elliptic arc from `from` to `to`.
///
/// `rx`/`ry` are the radii, `phi` the ellipse rotation in degrees, `flags`
/// the packed large-arc and sweep bits. The exact start and end lattice
/// points are always emitted, regardless of where the angular sampling
/// lands. A sub-path marker terminates the stream.
pub fn draw_arc(
    from: Point,
    to: Point,
    rx: i16,
    ry: i16,
    phi: i16,
    flags: u8,
    sink: &mut impl FnMut(i16, i16),
) {
    let mut win = SmoothingWindow::new();
    arc_points(from, to, rx, ry, phi, flags, &mut |p| win.propose(p, sink));
    win.propose(Point::break_marker(), sink);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::BREAK_Y;

    fn collect(from: (i16, i16), to: (i16, i16), rx: i16, ry: i16, phi: i16, flags: u8) -> Vec<(i16, i16)> {
        let mut v = Vec::new();
        draw_arc(
            Point::new(from.0, from.1),
            Point::new(to.0, to.1),
            rx,
            ry,
            phi,
            flags,
            &mut |x, y| {
                if y != BREAK_Y {
                    v.push((x, y));
                }
            },
        );
        v
    }

    #[test]
    fn test_endpoints_always_exact() {
        for &(rx, ry, phi, flags) in &[
            (4i16, 4i16, 0i16, 0u8),
            (4, 4, 0, ARC_FLAG_SWEEP),
            (8, 5, 0, ARC_FLAG_LARGE),
            (8, 5, 30, ARC_FLAG_LARGE | ARC_FLAG_SWEEP),
            (2, 9, 120, 0),
            (0, 0, 0, ARC_FLAG_SWEEP),
        ] {
            let v = collect((4, 2), (16, 10), rx, ry, phi, flags);
            assert_eq!(v.first(), Some(&(4, 2)), "rx={rx} ry={ry} phi={phi} flags={flags}");
            assert_eq!(v.last(), Some(&(16, 10)), "rx={rx} ry={ry} phi={phi} flags={flags}");
        }
    }

    #[test]
    fn test_connected_after_window() {
        let v = collect((4, 2), (16, 10), 8, 5, 30, ARC_FLAG_LARGE);
        for w in v.windows(2) {
            let dx = (w[1].0 - w[0].0).abs();
            let dy = (w[1].1 - w[0].1).abs();
            assert!(dx <= 1 && dy <= 1, "gap between {:?} and {:?}", w[0], w[1]);
            assert!(dx + dy >= 1, "duplicate {:?}", w[0]);
        }
    }

    #[test]
    fn test_equal_radii_uses_circle_lattice() {
        // Clockwise from the west point crosses the top half (y down).
        let v = collect((2, 10), (18, 10), 8, 8, 0, ARC_FLAG_SWEEP);
        assert!(v.iter().all(|&(_, y)| y <= 10));
        let v = collect((2, 10), (18, 10), 8, 8, 0, 0);
        assert!(v.iter().all(|&(_, y)| y >= 10));
    }

    #[test]
    fn test_degenerate_chord() {
        let v = collect((7, 7), (7, 7), 5, 5, 0, 0);
        assert_eq!(v, vec![(7, 7)]);
    }

    #[test]
    fn test_sweep_sides_differ() {
        let with_sweep = collect((4, 2), (16, 10), 9, 9, 0, ARC_FLAG_SWEEP);
        let without = collect((4, 2), (16, 10), 9, 9, 0, 0);
        // Same endpoints, opposite sides of the chord: interiors disjoint.
        let shared: Vec<_> = with_sweep
            .iter()
            .filter(|p| without.contains(p))
            .collect();
        assert!(shared.len() <= 4, "arcs overlap: {shared:?}");
    }
}
